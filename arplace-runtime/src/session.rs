use arplace_core::{ObjectHandle, ScreenPoint};

use crate::{
    ArHost, Feedback, GestureState, PinchEvent, PlacementController, ScaleController, SceneGraph,
    SessionConfig,
};

/// Owns all gesture-driven state for one AR session.
///
/// Handlers are expected to run serially on the thread that receives
/// gesture callbacks.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    placement: PlacementController,
    scale: ScaleController,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let placement = PlacementController::new(&config);
        let scale = ScaleController::new(*config.bounds());
        Self {
            config,
            placement,
            scale,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<ObjectHandle> {
        self.placement.selected()
    }

    pub fn gesture_state(&self) -> &GestureState {
        self.scale.state()
    }

    /// Handles a recognized discrete tap.
    pub fn on_tap<H>(&mut self, point: ScreenPoint, host: &mut H) -> Feedback
    where
        H: ArHost + ?Sized,
    {
        Feedback::from(self.placement.place_at(point, host))
    }

    pub fn on_pinch<H>(&mut self, event: PinchEvent, host: &mut H) -> Feedback
    where
        H: SceneGraph + ?Sized,
    {
        let transition = self.scale.handle(event, self.placement.selected(), host);
        Feedback::from(&transition)
    }
}
