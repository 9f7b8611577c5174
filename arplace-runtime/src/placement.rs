use arplace_core::{AnchorId, ObjectHandle, ScaleBounds, ScreenPoint, SurfaceFilter, WorldPose};
use log::{debug, info, warn};

use crate::{ArHost, PlacementError, SessionConfig};

/// Result of a successful tap placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub object: ObjectHandle,
    pub anchor: AnchorId,
    pub pose: WorldPose,
}

/// Turns discrete taps into anchored objects and tracks which one is selected.
#[derive(Debug, Clone)]
pub struct PlacementController {
    asset_name: String,
    bounds: ScaleBounds,
    surface_filter: SurfaceFilter,
    enable_collision: bool,
    selected: Option<ObjectHandle>,
}

impl PlacementController {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            asset_name: config.asset_name().to_owned(),
            bounds: *config.bounds(),
            surface_filter: *config.surface_filter(),
            enable_collision: config.enable_collision(),
            selected: None,
        }
    }

    /// Most recently placed object, if any.
    pub fn selected(&self) -> Option<ObjectHandle> {
        self.selected
    }

    /// Places a new object on the first surface under `point`.
    ///
    /// On failure neither the selection nor the anchor set changes. The
    /// previously selected object stays in the scene but is no longer
    /// reachable for scaling once a new object is placed.
    pub fn place_at<H>(
        &mut self,
        point: ScreenPoint,
        host: &mut H,
    ) -> Result<Placement, PlacementError>
    where
        H: ArHost + ?Sized,
    {
        let hits = host.hit_test(point, self.surface_filter);
        let Some(pose) = hits.first().copied() else {
            warn!("No surface under tap {:?}", point);
            return Err(PlacementError::NoSurfaceFound);
        };
        debug!(
            "Hit test returned {} result(s), using {:?}",
            hits.len(),
            pose.position()
        );

        let object = host.load_renderable(&self.asset_name).map_err(|e| {
            warn!("Failed to load '{}': {}", self.asset_name, e);
            PlacementError::from(e)
        })?;

        host.set_scale(object, self.bounds.initial())?;
        host.set_collision_enabled(object, self.enable_collision)?;
        let anchor = host.attach(object, pose)?;

        if let Some(previous) = self.selected.replace(object) {
            debug!("Selection moved from {} to {}", previous, object);
        }
        info!(
            "Placed object {} on anchor {} at {:?}",
            object,
            anchor,
            pose.position()
        );

        Ok(Placement {
            object,
            anchor,
            pose,
        })
    }
}

#[cfg(test)]
mod tests {
    use arplace_core::{ScreenPoint, SurfaceAlignment};
    use glam::{Quat, Vec3};

    use super::*;
    use crate::{test_host::TestHost, AssetLoadError, SceneGraph};

    fn floor_pose() -> WorldPose {
        WorldPose::new(Vec3::new(0.0, -1.0, -1.5), Quat::IDENTITY)
    }

    #[test]
    fn empty_hit_test_changes_nothing() {
        let mut host = TestHost::default();
        let mut controller = PlacementController::new(&SessionConfig::default());

        let result = controller.place_at(ScreenPoint::new(10.0, 10.0), &mut host);

        assert_eq!(result.unwrap_err(), PlacementError::NoSurfaceFound);
        assert_eq!(controller.selected(), None);
        assert_eq!(host.object_count(), 0);
        assert_eq!(host.load_calls, 0);
    }

    #[test]
    fn missing_asset_changes_nothing() {
        let mut host = TestHost::with_hits(vec![floor_pose()]);
        host.missing_assets.push("robot".to_owned());
        let mut controller = PlacementController::new(&SessionConfig::default());

        let result = controller.place_at(ScreenPoint::new(10.0, 10.0), &mut host);

        assert_eq!(
            result.unwrap_err(),
            PlacementError::AssetLoad(AssetLoadError::NotFound("robot".to_owned()))
        );
        assert_eq!(controller.selected(), None);
        assert_eq!(host.object_count(), 0);
    }

    #[test]
    fn failed_taps_keep_previous_selection() {
        let mut host = TestHost::with_hits(vec![floor_pose()]);
        let mut controller = PlacementController::new(&SessionConfig::default());
        let placed = controller
            .place_at(ScreenPoint::new(10.0, 10.0), &mut host)
            .unwrap();

        host.set_hits(Vec::new());
        let result = controller.place_at(ScreenPoint::new(20.0, 20.0), &mut host);
        assert_eq!(result.unwrap_err(), PlacementError::NoSurfaceFound);
        assert_eq!(controller.selected(), Some(placed.object));
        assert_eq!(host.object_count(), 1);

        host.set_hits(vec![floor_pose()]);
        host.missing_assets.push("robot".to_owned());
        let result = controller.place_at(ScreenPoint::new(30.0, 30.0), &mut host);
        assert!(matches!(result, Err(PlacementError::AssetLoad(_))));
        assert_eq!(controller.selected(), Some(placed.object));
        assert_eq!(host.object_count(), 1);
        assert_eq!(host.scale(placed.object).unwrap(), Vec3::splat(0.01));
    }

    #[test]
    fn successful_tap_creates_minimum_scale_object_and_selects_it() {
        let mut host = TestHost::with_hits(vec![floor_pose()]);
        let mut controller = PlacementController::new(&SessionConfig::default());

        let placement = controller
            .place_at(ScreenPoint::new(200.0, 400.0), &mut host)
            .unwrap();

        assert_eq!(controller.selected(), Some(placement.object));
        assert_eq!(host.object_count(), 1);
        assert_eq!(host.scale(placement.object).unwrap(), Vec3::splat(0.01));
        assert!(host.collision_enabled(placement.object));
        assert_eq!(host.anchor_pose(placement.object), Some(floor_pose()));
    }

    #[test]
    fn only_first_hit_is_used() {
        let near = floor_pose();
        let far = WorldPose::new(Vec3::new(0.0, -1.0, -4.0), Quat::IDENTITY);
        let mut host = TestHost::with_hits(vec![near, far]);
        let mut controller = PlacementController::new(&SessionConfig::default());

        let placement = controller
            .place_at(ScreenPoint::new(0.0, 0.0), &mut host)
            .unwrap();

        assert_eq!(placement.pose, near);
        assert_eq!(host.object_count(), 1);
    }

    #[test]
    fn last_placed_object_wins_selection() {
        let mut host = TestHost::with_hits(vec![floor_pose()]);
        let mut controller = PlacementController::new(&SessionConfig::default());

        let first = controller
            .place_at(ScreenPoint::new(0.0, 0.0), &mut host)
            .unwrap();
        let second = controller
            .place_at(ScreenPoint::new(5.0, 5.0), &mut host)
            .unwrap();

        assert_ne!(first.object, second.object);
        assert_eq!(controller.selected(), Some(second.object));
        assert_eq!(host.object_count(), 2);
    }

    #[test]
    fn configured_filter_is_forwarded_to_hit_test() {
        let mut host = TestHost::with_hits(vec![floor_pose()]);
        let config = SessionConfig::builder()
            .with_surface_filter(SurfaceFilter::default().with_alignment(SurfaceAlignment::Any))
            .with_collision(false)
            .build()
            .unwrap();
        let mut controller = PlacementController::new(&config);

        let placement = controller
            .place_at(ScreenPoint::new(0.0, 0.0), &mut host)
            .unwrap();

        assert_eq!(
            host.last_filter.get().map(|f| f.alignment),
            Some(SurfaceAlignment::Any)
        );
        assert!(!host.collision_enabled(placement.object));
    }
}
