use arplace_core::{AnchorId, ObjectHandle, ScreenPoint, SurfaceFilter, WorldPose};
use arplace_runtime::{AssetLoadError, AssetLoader, SceneError, SceneGraph, SurfaceHitTester};
use glam::Vec3;
use log::debug;
use rustc_hash::FxHashSet;

use crate::{Anchor, PlacedObject, SurfacePlane, ViewCamera};

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    object: Option<PlacedObject>,
}

/// In-process scene graph, hit tester and asset catalog.
///
/// Objects live in generation-checked slots, so a handle to a despawned
/// object is reported as stale instead of aliasing whatever reuses the slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    camera: ViewCamera,
    planes: Vec<SurfacePlane>,
    assets: FxHashSet<String>,
    slots: Vec<Slot>,
    free_slots: Vec<u32>,
}

impl MemoryScene {
    pub fn new(camera: ViewCamera) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    pub fn with_plane(mut self, plane: SurfacePlane) -> Self {
        self.planes.push(plane);
        self
    }

    pub fn with_asset(mut self, name: &str) -> Self {
        self.register_asset(name);
        self
    }

    pub fn register_asset(&mut self, name: &str) {
        self.assets.insert(name.to_owned());
    }

    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    pub fn add_plane(&mut self, plane: SurfacePlane) {
        self.planes.push(plane);
    }

    pub fn get(&self, handle: ObjectHandle) -> Option<&PlacedObject> {
        self.slots
            .get(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.object.as_ref())
    }

    fn get_mut(&mut self, handle: ObjectHandle) -> Result<&mut PlacedObject, SceneError> {
        self.slots
            .get_mut(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.object.as_mut())
            .ok_or(SceneError::StaleHandle(handle))
    }

    /// Live objects with their handles, in slot order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectHandle, &PlacedObject)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.object
                .as_ref()
                .map(|object| (ObjectHandle::new(index as u32, slot.generation), object))
        })
    }

    pub fn len(&self) -> usize {
        self.objects().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes an object. Outstanding handles to it become stale.
    pub fn despawn(&mut self, handle: ObjectHandle) -> Result<PlacedObject, SceneError> {
        let slot = self
            .slots
            .get_mut(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .ok_or(SceneError::StaleHandle(handle))?;
        let object = slot.object.take().ok_or(SceneError::StaleHandle(handle))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_slots.push(handle.index());
        debug!("Despawn object {}", handle);
        Ok(object)
    }

    fn spawn(&mut self, object: PlacedObject) -> ObjectHandle {
        if let Some(index) = self.free_slots.pop() {
            let slot = &mut self.slots[index as usize];
            slot.object = Some(object);
            ObjectHandle::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                object: Some(object),
            });
            ObjectHandle::new(index, 0)
        }
    }
}

impl SurfaceHitTester for MemoryScene {
    fn hit_test(&self, point: ScreenPoint, filter: SurfaceFilter) -> Vec<WorldPose> {
        let (origin, direction) = self.camera.ray(point);
        let mut hits: Vec<(f32, WorldPose)> = self
            .planes
            .iter()
            .filter(|plane| filter.accepts_alignment(plane.alignment()))
            .filter(|plane| filter.accepts_estimated(plane.is_estimated()))
            .filter_map(|plane| plane.intersect(origin, direction))
            .collect();
        hits.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        hits.into_iter().map(|(_, pose)| pose).collect()
    }
}

impl AssetLoader for MemoryScene {
    fn load_renderable(&mut self, name: &str) -> Result<ObjectHandle, AssetLoadError> {
        if !self.assets.contains(name) {
            return Err(AssetLoadError::NotFound(name.to_owned()));
        }
        let handle = self.spawn(PlacedObject::new(name));
        debug!("Spawn object: {{handle={}, asset={}}}", handle, name);
        Ok(handle)
    }
}

impl SceneGraph for MemoryScene {
    fn attach(&mut self, object: ObjectHandle, pose: WorldPose) -> Result<AnchorId, SceneError> {
        let id = AnchorId::new_v4();
        self.get_mut(object)?.set_anchor(Anchor { id, pose });
        debug!(
            "Attach object {} to anchor {} at {:?}",
            object,
            id,
            pose.position()
        );
        Ok(id)
    }

    fn scale(&self, object: ObjectHandle) -> Result<Vec3, SceneError> {
        self.get(object)
            .map(|o| o.local_transform().get_scale())
            .ok_or(SceneError::StaleHandle(object))
    }

    fn set_scale(&mut self, object: ObjectHandle, scale: Vec3) -> Result<(), SceneError> {
        self.get_mut(object)?.local_transform_mut().set_scale(scale);
        Ok(())
    }

    fn set_collision_enabled(
        &mut self,
        object: ObjectHandle,
        enabled: bool,
    ) -> Result<(), SceneError> {
        self.get_mut(object)?.set_collision_enabled(enabled);
        Ok(())
    }
}
