use arplace_core::{AnchorId, ObjectHandle, ScreenPoint, SurfaceFilter, WorldPose};
use glam::Vec3;

use crate::{AssetLoadError, SceneError};

/// Projects a screen point onto detected surfaces.
pub trait SurfaceHitTester {
    /// Hits ordered closest / most confident first. May be empty.
    fn hit_test(&self, point: ScreenPoint, filter: SurfaceFilter) -> Vec<WorldPose>;
}

pub trait AssetLoader {
    fn load_renderable(&mut self, name: &str) -> Result<ObjectHandle, AssetLoadError>;
}

/// Owner of every placed object. Callers only ever hold handles.
pub trait SceneGraph {
    /// Creates a world anchor at `pose` and attaches `object` under it.
    fn attach(&mut self, object: ObjectHandle, pose: WorldPose) -> Result<AnchorId, SceneError>;
    fn scale(&self, object: ObjectHandle) -> Result<Vec3, SceneError>;
    fn set_scale(&mut self, object: ObjectHandle, scale: Vec3) -> Result<(), SceneError>;
    fn set_collision_enabled(
        &mut self,
        object: ObjectHandle,
        enabled: bool,
    ) -> Result<(), SceneError>;
}

/// Everything the session needs from the surrounding AR subsystem.
pub trait ArHost: SurfaceHitTester + AssetLoader + SceneGraph {}

impl<T> ArHost for T where T: SurfaceHitTester + AssetLoader + SceneGraph {}
