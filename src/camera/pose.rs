//! Orbit camera pose and the clamp/wrap rules that keep it consistent.
//!
//! The world is Z-up. Azimuth rotates around +Z starting from +X, elevation
//! tilts above the XY plane. All angles are in degrees.

use glam::Vec3;

use crate::options::ZoomClamp;

/// Lowest and highest reachable elevation, in degrees.
pub const ELEVATION_LIMIT: f32 = 90.0;

/// Snapshot of an orbit camera: what it looks at and from where.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Point the camera orbits and looks toward.
    pub target: Vec3,
    /// Distance from the target to the eye. Always positive.
    pub distance: f32,
    /// Tilt above the horizontal plane, in [-90, 90] degrees.
    pub elevation: f32,
    /// Heading around the vertical axis, in [0, 360) degrees.
    pub azimuth: f32,
}

impl CameraPose {
    /// Unit vector from the target toward the eye.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        spherical_direction(self.elevation, self.azimuth)
    }

    /// World-space eye position derived from target, distance and angles.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.target + self.direction() * self.distance
    }

    /// Camera up vector: the elevation tangent of the view sphere.
    ///
    /// Unlike a fixed world up, this stays orthogonal to the view direction
    /// when looking straight down or up.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        let (sin_e, cos_e) = self.elevation.to_radians().sin_cos();
        let (sin_a, cos_a) = self.azimuth.to_radians().sin_cos();
        Vec3::new(-sin_e * cos_a, -sin_e * sin_a, cos_e)
    }

    /// Horizontal heading the camera faces, as a unit XY vector.
    ///
    /// Points from the eye toward the target, projected onto the ground
    /// plane, so forward motion never depends on elevation.
    #[must_use]
    pub fn heading(&self) -> Vec3 {
        let (sin_a, cos_a) = self.azimuth.to_radians().sin_cos();
        Vec3::new(-cos_a, -sin_a, 0.0)
    }

    /// Copy of this pose with every field forced into its valid range.
    #[must_use]
    pub fn normalized(self, min_distance: f32) -> Self {
        Self {
            target: self.target,
            distance: clamp_distance(self.distance, min_distance),
            elevation: clamp_elevation(self.elevation),
            azimuth: wrap_azimuth(self.azimuth),
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 10.0,
            elevation: 0.0,
            azimuth: 0.0,
        }
    }
}

/// Unit vector for the given elevation and azimuth (degrees), Z-up.
#[must_use]
pub fn spherical_direction(elevation: f32, azimuth: f32) -> Vec3 {
    let (sin_e, cos_e) = elevation.to_radians().sin_cos();
    let (sin_a, cos_a) = azimuth.to_radians().sin_cos();
    Vec3::new(cos_e * cos_a, cos_e * sin_a, sin_e)
}

/// Clamp an elevation into [-90, 90]. NaN collapses to 0.
#[must_use]
pub fn clamp_elevation(elevation: f32) -> f32 {
    if elevation.is_nan() {
        return 0.0;
    }
    elevation.clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT)
}

/// Wrap an azimuth into [0, 360). Non-finite input collapses to 0.
#[must_use]
pub fn wrap_azimuth(azimuth: f32) -> f32 {
    if !azimuth.is_finite() {
        return 0.0;
    }
    let wrapped = azimuth.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Keep a distance at or above the positive floor.
#[must_use]
pub fn clamp_distance(distance: f32, min_distance: f32) -> f32 {
    let floor = min_distance.max(f32::MIN_POSITIVE);
    if distance.is_nan() {
        return floor;
    }
    distance.max(floor)
}

/// Apply a wheel step of `notches` to `distance` under the given clamp mode.
#[must_use]
pub fn apply_zoom(
    distance: f32,
    notches: f32,
    min_distance: f32,
    mode: ZoomClamp,
) -> f32 {
    let next = distance - notches;
    match mode {
        ZoomClamp::Stepped => {
            if next > 0.0 {
                clamp_distance(next, min_distance)
            } else {
                clamp_distance(notches, min_distance)
            }
        }
        ZoomClamp::Continuous => clamp_distance(next, min_distance),
    }
}
