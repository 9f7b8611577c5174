use std::cell::Cell;

use arplace_core::{AnchorId, ObjectHandle, ScreenPoint, SurfaceFilter, WorldPose};
use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::{AssetLoadError, AssetLoader, SceneError, SceneGraph, SurfaceHitTester};

#[derive(Debug, Clone)]
struct TestObject {
    scale: Vec3,
    collision: bool,
    anchor: Option<(AnchorId, WorldPose)>,
}

/// Scripted host for controller tests.
#[derive(Debug, Default)]
pub(crate) struct TestHost {
    hits: Vec<WorldPose>,
    pub missing_assets: Vec<String>,
    pub load_calls: usize,
    pub last_filter: Cell<Option<SurfaceFilter>>,
    objects: FxHashMap<ObjectHandle, TestObject>,
    next_index: u32,
}

impl TestHost {
    pub fn with_hits(hits: Vec<WorldPose>) -> Self {
        Self {
            hits,
            ..Default::default()
        }
    }

    pub fn set_hits(&mut self, hits: Vec<WorldPose>) {
        self.hits = hits;
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn collision_enabled(&self, object: ObjectHandle) -> bool {
        self.objects.get(&object).is_some_and(|o| o.collision)
    }

    pub fn anchor_pose(&self, object: ObjectHandle) -> Option<WorldPose> {
        self.objects
            .get(&object)
            .and_then(|o| o.anchor)
            .map(|(_, pose)| pose)
    }

    pub fn remove(&mut self, object: ObjectHandle) {
        self.objects.remove(&object);
    }

    fn object_mut(&mut self, object: ObjectHandle) -> Result<&mut TestObject, SceneError> {
        self.objects
            .get_mut(&object)
            .ok_or(SceneError::StaleHandle(object))
    }
}

impl SurfaceHitTester for TestHost {
    fn hit_test(&self, _point: ScreenPoint, filter: SurfaceFilter) -> Vec<WorldPose> {
        self.last_filter.set(Some(filter));
        self.hits.clone()
    }
}

impl AssetLoader for TestHost {
    fn load_renderable(&mut self, name: &str) -> Result<ObjectHandle, AssetLoadError> {
        self.load_calls += 1;
        if self.missing_assets.iter().any(|missing| missing == name) {
            return Err(AssetLoadError::NotFound(name.to_owned()));
        }
        let handle = ObjectHandle::new(self.next_index, 0);
        self.next_index += 1;
        self.objects.insert(
            handle,
            TestObject {
                scale: Vec3::ONE,
                collision: false,
                anchor: None,
            },
        );
        Ok(handle)
    }
}

impl SceneGraph for TestHost {
    fn attach(&mut self, object: ObjectHandle, pose: WorldPose) -> Result<AnchorId, SceneError> {
        let anchor = AnchorId::new_v4();
        self.object_mut(object)?.anchor = Some((anchor, pose));
        Ok(anchor)
    }

    fn scale(&self, object: ObjectHandle) -> Result<Vec3, SceneError> {
        self.objects
            .get(&object)
            .map(|o| o.scale)
            .ok_or(SceneError::StaleHandle(object))
    }

    fn set_scale(&mut self, object: ObjectHandle, scale: Vec3) -> Result<(), SceneError> {
        self.object_mut(object)?.scale = scale;
        Ok(())
    }

    fn set_collision_enabled(
        &mut self,
        object: ObjectHandle,
        enabled: bool,
    ) -> Result<(), SceneError> {
        self.object_mut(object)?.collision = enabled;
        Ok(())
    }
}
