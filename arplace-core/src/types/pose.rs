use glam::{Mat4, Quat, Vec3};

/// Position of a discrete tap in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Position and orientation in the tracked world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPose {
    position: Vec3,
    orientation: Quat,
}

impl Default for WorldPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl WorldPose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    pub fn position(&self) -> &Vec3 {
        &self.position
    }

    pub fn orientation(&self) -> &Quat {
        &self.orientation
    }
}
