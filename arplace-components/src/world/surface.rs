use arplace_core::{SurfaceAlignment, WorldPose};
use glam::{Quat, Vec3};

const PARALLEL_EPSILON: f32 = 1e-6;

/// A detected (or estimated) infinite plane in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePlane {
    origin: Vec3,
    normal: Vec3,
    estimated: bool,
}

impl SurfacePlane {
    /// Horizontal plane facing up at `height`.
    pub fn horizontal(height: f32) -> Self {
        Self {
            origin: Vec3::new(0.0, height, 0.0),
            normal: Vec3::Y,
            estimated: false,
        }
    }

    /// Returns `None` for a degenerate normal.
    pub fn new(origin: Vec3, normal: Vec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self {
            origin,
            normal,
            estimated: false,
        })
    }

    pub fn with_estimated(mut self, estimated: bool) -> Self {
        self.estimated = estimated;
        self
    }

    pub fn is_estimated(&self) -> bool {
        self.estimated
    }

    pub fn alignment(&self) -> SurfaceAlignment {
        if self.normal.y.abs() >= 0.9 {
            SurfaceAlignment::Horizontal
        } else if self.normal.y.abs() <= 0.1 {
            SurfaceAlignment::Vertical
        } else {
            SurfaceAlignment::Any
        }
    }

    /// Distance along the ray and the pose at the hit, if the ray hits the
    /// front of the plane.
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<(f32, WorldPose)> {
        let denom = self.normal.dot(direction);
        if denom.is_nan() || denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let distance = self.normal.dot(self.origin - origin) / denom;
        if !distance.is_finite() || distance <= 0.0 {
            return None;
        }
        let position = origin + direction * distance;
        if !position.is_finite() {
            return None;
        }
        let orientation = Quat::from_rotation_arc(Vec3::Y, self.normal);
        Some((distance, WorldPose::new(position, orientation)))
    }
}
