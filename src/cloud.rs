//! Random point cloud sampled once at startup.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::PointViewError;
use crate::options::CloudOptions;

/// Static set of points centred on the origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    positions: Vec<Vec3>,
}

impl PointCloud {
    /// Wrap existing positions.
    #[must_use]
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    /// Sample `count` points with each coordinate drawn independently from
    /// a zero-mean normal distribution.
    ///
    /// # Errors
    ///
    /// Returns [`PointViewError::Cloud`] if `std_dev` is negative or not
    /// finite.
    pub fn sample_normal<R: Rng + ?Sized>(
        count: usize,
        std_dev: f32,
        rng: &mut R,
    ) -> Result<Self, PointViewError> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(PointViewError::Cloud(format!(
                "std_dev must be a finite non-negative number, got {std_dev}"
            )));
        }
        let normal = Normal::new(0.0, std_dev)
            .map_err(|e| PointViewError::Cloud(e.to_string()))?;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    normal.sample(rng),
                    normal.sample(rng),
                    normal.sample(rng),
                )
            })
            .collect();
        Ok(Self { positions })
    }

    /// Sample a cloud from options, seeding the RNG when a seed is given.
    ///
    /// # Errors
    ///
    /// See [`PointCloud::sample_normal`].
    pub fn from_options(options: &CloudOptions) -> Result<Self, PointViewError> {
        let cloud = match options.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Self::sample_normal(options.count, options.std_dev, &mut rng)?
            }
            None => Self::sample_normal(
                options.count,
                options.std_dev,
                &mut rand::rng(),
            )?,
        };
        log::debug!(
            "sampled {} points (std_dev {}, seed {:?})",
            cloud.len(),
            options.std_dev,
            options.seed
        );
        Ok(cloud)
    }

    /// Point positions in world space.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let cloud = PointCloud::sample_normal(1000, 1.0, &mut rng).unwrap();
        assert_eq!(cloud.len(), 1000);
        assert!(cloud.positions().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn empty_cloud_is_allowed() {
        let mut rng = StdRng::seed_from_u64(1);
        let cloud = PointCloud::sample_normal(0, 1.0, &mut rng).unwrap();
        assert!(cloud.is_empty());
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let options = CloudOptions {
            count: 50,
            std_dev: 2.0,
            seed: Some(42),
        };
        let a = PointCloud::from_options(&options).unwrap();
        let b = PointCloud::from_options(&options).unwrap();
        assert_eq!(a, b);

        let other = PointCloud::from_options(&CloudOptions {
            seed: Some(43),
            ..options
        })
        .unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn zero_std_dev_collapses_to_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        let cloud = PointCloud::sample_normal(10, 0.0, &mut rng).unwrap();
        assert!(cloud.positions().iter().all(|p| *p == Vec3::ZERO));
    }

    #[test]
    fn invalid_std_dev_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        for bad in [-1.0, f32::NAN, f32::INFINITY] {
            let err = PointCloud::sample_normal(10, bad, &mut rng).unwrap_err();
            assert!(matches!(err, PointViewError::Cloud(_)));
        }
    }

    #[test]
    fn spread_tracks_std_dev() {
        let mut rng = StdRng::seed_from_u64(9);
        let cloud = PointCloud::sample_normal(4000, 0.5, &mut rng).unwrap();
        let n = cloud.len() as f32;
        let mean = cloud.positions().iter().copied().sum::<Vec3>() / n;
        let var = cloud
            .positions()
            .iter()
            .map(|p| (p.x - mean.x).powi(2))
            .sum::<f32>()
            / n;
        assert!(mean.length() < 0.1);
        assert!((var.sqrt() - 0.5).abs() < 0.05);
    }
}
