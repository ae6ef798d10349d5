//! Human-readable camera status.

use glam::Vec3;

use crate::camera::pose::CameraPose;

/// Two-line status label for a pose:
///
/// ```text
/// Target: [x, y, z]  Eye: [x, y, z]
/// Distance: d, Elevation: e, Azimuth: a
/// ```
#[must_use]
pub fn status_label(pose: &CameraPose) -> String {
    format!(
        "Target: {}  Eye: {}\nDistance: {:.2}, Elevation: {:.2}, Azimuth: {:.2}",
        format_vec(pose.target),
        format_vec(pose.eye()),
        pose.distance,
        pose.elevation,
        pose.azimuth,
    )
}

/// Single-line window title: `app` followed by each label line.
#[must_use]
pub fn window_title(app: &str, pose: &CameraPose) -> String {
    let label = status_label(pose);
    let mut title = app.to_owned();
    for line in label.lines() {
        title.push_str(" | ");
        title.push_str(line);
    }
    title
}

fn format_vec(v: Vec3) -> String {
    format!("[{:.2}, {:.2}, {:.2}]", v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_uses_two_decimals() {
        let pose = CameraPose {
            target: Vec3::new(1.0, -0.5, 0.25),
            distance: 10.0,
            elevation: 0.0,
            azimuth: 0.0,
        };
        assert_eq!(
            status_label(&pose),
            "Target: [1.00, -0.50, 0.25]  Eye: [11.00, -0.50, 0.25]\n\
             Distance: 10.00, Elevation: 0.00, Azimuth: 0.00"
        );
    }

    #[test]
    fn title_is_one_line() {
        let title = window_title("pointview", &CameraPose::default());
        assert!(!title.contains('\n'));
        assert!(title.starts_with("pointview | Target: [0.00, 0.00, 0.00]"));
        assert!(title.ends_with("Azimuth: 0.00"));
    }
}
