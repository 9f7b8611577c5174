use arplace_core::ScreenPoint;
use glam::{Vec2, Vec3};

const FOV_Y_DEGREES: f32 = 60.0;

/// Pinhole camera at the world origin used to turn view coordinates into rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    viewport: Vec2,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(1170.0, 2532.0),
        }
    }
}

impl ViewCamera {
    /// Returns `None` unless both extents are finite and positive.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let viewport = Vec2::new(width, height);
        if viewport.is_finite() && viewport.cmpgt(Vec2::ZERO).all() {
            Some(Self { viewport })
        } else {
            None
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Origin and normalized direction of the ray through `point`.
    ///
    /// The camera looks down -Z with +Y up; view coordinates start at the
    /// top-left corner.
    pub fn ray(&self, point: ScreenPoint) -> (Vec3, Vec3) {
        let ndc = Vec2::new(
            2.0 * point.x / self.viewport.x - 1.0,
            1.0 - 2.0 * point.y / self.viewport.y,
        );
        let half_height = (FOV_Y_DEGREES.to_radians() * 0.5).tan();
        let aspect = self.viewport.x / self.viewport.y;
        let direction =
            Vec3::new(ndc.x * half_height * aspect, ndc.y * half_height, -1.0).normalize();
        (Vec3::ZERO, direction)
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.viewport.x * 0.5, self.viewport.y * 0.5)
    }
}
