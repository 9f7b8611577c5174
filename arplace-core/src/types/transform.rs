use crate::WorldPose;

/// Local transform of a placed object relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: glam::Vec3,
    scale: glam::Vec3,
    rotation: glam::Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: glam::Vec3::ZERO,
            scale: glam::Vec3::ONE,
            rotation: glam::Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn with_scale(mut self, scale: glam::Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn set_scale(&mut self, scale: glam::Vec3) {
        self.scale = scale;
    }

    pub fn to_model_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Model matrix of this transform placed under `anchor`.
    pub fn to_world_matrix(&self, anchor: &WorldPose) -> glam::Mat4 {
        anchor.to_matrix() * self.to_model_matrix()
    }

    pub fn get_scale(&self) -> glam::Vec3 {
        self.scale
    }
}
