use arplace_core::{AnchorId, Transform, WorldPose};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub id: AnchorId,
    pub pose: WorldPose,
}

/// Renderable instance owned by a [`crate::MemoryScene`].
#[derive(Debug, Clone)]
pub struct PlacedObject {
    asset_name: String,
    local_transform: Transform,
    collision_enabled: bool,
    anchor: Option<Anchor>,
}

impl PlacedObject {
    pub fn new(asset_name: &str) -> Self {
        Self {
            asset_name: asset_name.to_owned(),
            local_transform: Transform::default(),
            collision_enabled: false,
            anchor: None,
        }
    }

    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    pub fn local_transform(&self) -> &Transform {
        &self.local_transform
    }

    pub fn local_transform_mut(&mut self) -> &mut Transform {
        &mut self.local_transform
    }

    pub fn collision_enabled(&self) -> bool {
        self.collision_enabled
    }

    pub fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision_enabled = enabled;
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = Some(anchor);
    }

    /// Loaded objects stay invisible until they are attached to an anchor.
    pub fn is_attached(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn world_matrix(&self) -> Option<glam::Mat4> {
        self.anchor
            .as_ref()
            .map(|anchor| self.local_transform.to_world_matrix(&anchor.pose))
    }
}
