use arplace_core::{ObjectHandle, ScaleBounds};
use glam::Vec3;
use log::{debug, info, warn};

use crate::{GestureError, GesturePhase, PinchEvent, PinchKind, SceneError, SceneGraph};

/// Per-gesture state captured at `Begin`.
///
/// The target is fixed for the whole session so a tap that moves the
/// selection mid-pinch does not switch which object is being scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    target: ObjectHandle,
    baseline: Vec3,
    current: Vec3,
}

impl GestureSession {
    fn new(target: ObjectHandle, baseline: Vec3) -> Self {
        Self {
            target,
            baseline,
            current: baseline,
        }
    }

    pub fn target(&self) -> ObjectHandle {
        self.target
    }

    pub fn baseline(&self) -> Vec3 {
        self.baseline
    }

    /// Last scale written during this session.
    pub fn current(&self) -> Vec3 {
        self.current
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Active(GestureSession),
}

impl GestureState {
    pub fn session(&self) -> Option<&GestureSession> {
        match self {
            Self::Idle => None,
            Self::Active(session) => Some(session),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// The selected object and its scale, sampled when a gesture begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionView {
    pub object: ObjectHandle,
    pub scale: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleEffect {
    SetScale { target: ObjectHandle, scale: Vec3 },
}

/// Outcome of feeding one pinch event through the machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub kind: PinchKind,
    pub state: GestureState,
    pub phase: GesturePhase,
    /// Session the event was applied to, as it stands after the event.
    pub session: Option<GestureSession>,
    pub effects: Vec<ScaleEffect>,
    pub error: Option<GestureError>,
}

impl Transition {
    fn ignored(kind: PinchKind, state: GestureState, error: GestureError) -> Self {
        let phase = if state.is_active() {
            GesturePhase::Active
        } else {
            GesturePhase::Idle
        };
        Self {
            kind,
            state,
            phase,
            session: state.session().copied(),
            effects: Vec::new(),
            error: Some(error),
        }
    }
}

/// Pure pinch-to-scale transition function. Holds no gesture state itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaleMachine {
    bounds: ScaleBounds,
}

impl ScaleMachine {
    pub fn new(bounds: ScaleBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &ScaleBounds {
        &self.bounds
    }

    /// `factor` is cumulative since `Begin`, so the result depends only on
    /// the baseline and the factor.
    pub fn scaled(&self, baseline: Vec3, factor: f32) -> Vec3 {
        self.bounds.clamp(baseline * factor)
    }

    /// `selection` is only consulted for `Begin`.
    pub fn transition(
        &self,
        state: GestureState,
        event: PinchEvent,
        selection: Option<SelectionView>,
    ) -> Transition {
        let kind = event.kind();
        match (state, event) {
            (_, PinchEvent::Begin) => {
                let Some(view) = selection else {
                    return Transition::ignored(kind, GestureState::Idle, GestureError::NoSelection);
                };
                let session = GestureSession::new(view.object, view.scale);
                Transition {
                    kind,
                    state: GestureState::Active(session),
                    phase: GesturePhase::Active,
                    session: Some(session),
                    effects: Vec::new(),
                    error: None,
                }
            }
            (GestureState::Active(mut session), PinchEvent::Change(factor)) => {
                if !(factor.is_finite() && factor > 0.0) {
                    return Transition::ignored(
                        kind,
                        state,
                        GestureError::InvalidScaleFactor(factor),
                    );
                }
                session.current = self.scaled(session.baseline, factor);
                Transition {
                    kind,
                    state: GestureState::Active(session),
                    phase: GesturePhase::Active,
                    session: Some(session),
                    effects: vec![ScaleEffect::SetScale {
                        target: session.target,
                        scale: session.current,
                    }],
                    error: None,
                }
            }
            (GestureState::Active(session), PinchEvent::End) => Transition {
                kind,
                state: GestureState::Idle,
                phase: GesturePhase::Ended,
                session: Some(session),
                effects: Vec::new(),
                error: None,
            },
            (GestureState::Active(mut session), PinchEvent::Cancel) => {
                session.current = session.baseline;
                Transition {
                    kind,
                    state: GestureState::Idle,
                    phase: GesturePhase::Cancelled,
                    session: Some(session),
                    effects: vec![ScaleEffect::SetScale {
                        target: session.target,
                        scale: session.baseline,
                    }],
                    error: None,
                }
            }
            (GestureState::Idle, _) => Transition::ignored(
                kind,
                GestureState::Idle,
                GestureError::StrayGestureEvent(kind),
            ),
        }
    }
}

/// Drives [`ScaleMachine`] and writes its effects into a scene graph.
#[derive(Debug, Clone, Default)]
pub struct ScaleController {
    machine: ScaleMachine,
    state: GestureState,
}

impl ScaleController {
    pub fn new(bounds: ScaleBounds) -> Self {
        Self {
            machine: ScaleMachine::new(bounds),
            state: GestureState::Idle,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn handle<S>(
        &mut self,
        event: PinchEvent,
        selected: Option<ObjectHandle>,
        scene: &mut S,
    ) -> Transition
    where
        S: SceneGraph + ?Sized,
    {
        let selection = match (event, selected) {
            (PinchEvent::Begin, Some(object)) => match scene.scale(object) {
                Ok(scale) => Some(SelectionView { object, scale }),
                Err(SceneError::StaleHandle(stale)) => {
                    self.state = GestureState::Idle;
                    let transition = Transition::ignored(
                        event.kind(),
                        GestureState::Idle,
                        GestureError::StaleSelection(stale),
                    );
                    warn!("Pinch ignored: {}", GestureError::StaleSelection(stale));
                    return transition;
                }
            },
            _ => None,
        };

        if let (PinchEvent::Begin, GestureState::Active(previous)) = (event, self.state) {
            debug!(
                "Pinch began while scaling {}, dropping previous session",
                previous.target()
            );
        }

        let mut transition = self.machine.transition(self.state, event, selection);
        if let Err(SceneError::StaleHandle(stale)) = Self::apply(&transition.effects, scene) {
            transition.state = GestureState::Idle;
            transition.phase = GesturePhase::Idle;
            transition.effects.clear();
            transition.error = Some(GestureError::StaleSelection(stale));
        }
        self.state = transition.state;

        match (&transition.error, &transition.session) {
            (Some(error), _) => warn!("Pinch ignored: {}", error),
            (None, Some(session)) => match transition.phase {
                GesturePhase::Active if transition.kind == PinchKind::Begin => info!(
                    "Started scaling {} from {:?}",
                    session.target(),
                    session.baseline()
                ),
                GesturePhase::Active => {
                    debug!("Scale of {} set to {:?}", session.target(), session.current())
                }
                GesturePhase::Ended => {
                    info!("Final scale of {} is {:?}", session.target(), session.current())
                }
                GesturePhase::Cancelled => info!(
                    "Scaling {} cancelled, restored {:?}",
                    session.target(),
                    session.baseline()
                ),
                GesturePhase::Idle => {}
            },
            (None, None) => {}
        }

        transition
    }

    fn apply<S>(effects: &[ScaleEffect], scene: &mut S) -> Result<(), SceneError>
    where
        S: SceneGraph + ?Sized,
    {
        for effect in effects {
            match effect {
                ScaleEffect::SetScale { target, scale } => scene.set_scale(*target, *scale)?,
            }
        }
        Ok(())
    }
}
