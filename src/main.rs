//! `pointview` binary: open a window showing a random point cloud.

use std::path::PathBuf;

use clap::Parser;
use pointview::{Options, PointViewError, Viewer};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// TOML options file; missing fields use defaults.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,
    /// Number of points to sample (overrides the options file).
    #[arg(long, value_name = "N")]
    points: Option<usize>,
    /// RNG seed for a reproducible cloud (overrides the options file).
    #[arg(long, value_name = "S")]
    seed: Option<u64>,
    /// Write the effective options to FILE and exit.
    #[arg(long, value_name = "FILE")]
    write_options: Option<PathBuf>,
}

impl Args {
    /// Options file contents with command line overrides applied.
    fn effective_options(&self) -> Result<Options, PointViewError> {
        let mut options = match &self.options {
            Some(path) => Options::load(path)?,
            None => Options::default(),
        };
        if let Some(count) = self.points {
            options.cloud.count = count;
        }
        if let Some(seed) = self.seed {
            options.cloud.seed = Some(seed);
        }
        Ok(options)
    }
}

fn run(args: &Args) -> Result<(), PointViewError> {
    let options = args.effective_options()?;

    if let Some(path) = &args.write_options {
        options.save(path)?;
        log::info!("wrote options to {}", path.display());
        return Ok(());
    }

    let mut builder = Viewer::builder().with_options(options);
    if let Some(path) = &args.options {
        builder = builder.with_options_file(path);
    }
    builder.build().run()
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let args =
            Args::parse_from(["pointview", "--points", "25", "--seed", "3"]);
        let options = args.effective_options().unwrap();
        assert_eq!(options.cloud.count, 25);
        assert_eq!(options.cloud.seed, Some(3));
        assert_eq!(options.camera.distance, 10.0);
    }

    #[test]
    fn missing_options_file_is_an_io_error() {
        let args = Args::parse_from([
            "pointview",
            "--options",
            "/nonexistent/pointview.toml",
        ]);
        let err = args.effective_options().unwrap_err();
        assert!(matches!(err, PointViewError::Io(_)));
    }

    #[test]
    fn args_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
