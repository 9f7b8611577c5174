use glam::Vec3;

pub const DEFAULT_MIN_SCALE: f32 = 0.01;
pub const DEFAULT_MAX_SCALE: f32 = 0.02;

/// Inclusive per-axis range a placed object's scale is kept within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min: f32,
    max: f32,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}

impl ScaleBounds {
    /// Returns `None` unless `0 < min <= max` and both are finite.
    pub fn new(min: f32, max: f32) -> Option<Self> {
        if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Scale given to a freshly placed object: the smallest visible size.
    pub fn initial(&self) -> Vec3 {
        Vec3::splat(self.min)
    }

    /// Clamps every axis independently.
    pub fn clamp(&self, scale: Vec3) -> Vec3 {
        scale.clamp(Vec3::splat(self.min), Vec3::splat(self.max))
    }

    pub fn contains(&self, scale: Vec3) -> bool {
        scale.cmpge(Vec3::splat(self.min)).all() && scale.cmple(Vec3::splat(self.max)).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_ranges() {
        assert!(ScaleBounds::new(0.0, 1.0).is_none());
        assert!(ScaleBounds::new(-0.1, 1.0).is_none());
        assert!(ScaleBounds::new(0.5, 0.1).is_none());
        assert!(ScaleBounds::new(f32::NAN, 1.0).is_none());
        assert!(ScaleBounds::new(0.1, f32::INFINITY).is_none());
        assert!(ScaleBounds::new(0.1, 0.1).is_some());
    }

    #[test]
    fn clamps_each_axis_independently() {
        let bounds = ScaleBounds::default();
        let clamped = bounds.clamp(Vec3::new(0.001, 0.015, 5.0));

        assert_eq!(clamped.x, DEFAULT_MIN_SCALE);
        assert_eq!(clamped.y, 0.015);
        assert_eq!(clamped.z, DEFAULT_MAX_SCALE);
        assert!(bounds.contains(clamped));
    }

    #[test]
    fn initial_scale_is_minimum() {
        let bounds = ScaleBounds::default();
        assert_eq!(bounds.initial(), Vec3::splat(0.01));
        assert!(bounds.contains(bounds.initial()));
    }
}
