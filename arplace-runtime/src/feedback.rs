use arplace_core::ObjectHandle;
use glam::Vec3;

use crate::{GestureError, GesturePhase, PinchKind, Placement, PlacementError, Transition};

/// What a host should surface after a tap or pinch event.
///
/// Every failure ends up here as a value; none of them stop the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Placed(Placement),
    PlacementFailed(PlacementError),
    ScaleStarted { object: ObjectHandle, baseline: Vec3 },
    Scaled { object: ObjectHandle, scale: Vec3 },
    ScaleEnded { object: ObjectHandle, scale: Vec3 },
    ScaleCancelled { object: ObjectHandle, restored: Vec3 },
    GestureIgnored(GestureError),
}

impl Feedback {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::PlacementFailed(_) | Self::GestureIgnored(_))
    }

    /// Guidance text for the user, for outcomes worth showing on screen.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Placed(_) => Some("Placed the model - pinch to scale"),
            Self::PlacementFailed(PlacementError::NoSurfaceFound) => {
                Some("No surface was found - point camera at flat surface")
            }
            Self::PlacementFailed(PlacementError::AssetLoad(_)) => {
                Some("Failed to load 3D model - check that the asset is bundled")
            }
            Self::PlacementFailed(PlacementError::Scene(_)) => {
                Some("Could not place the model - try again")
            }
            Self::GestureIgnored(GestureError::NoSelection) => {
                Some("No object is selected - tap to place an object first")
            }
            Self::GestureIgnored(GestureError::StaleSelection(_)) => {
                Some("The selected object is gone - tap to place a new one")
            }
            _ => None,
        }
    }
}

impl From<Result<Placement, PlacementError>> for Feedback {
    fn from(value: Result<Placement, PlacementError>) -> Self {
        match value {
            Ok(placement) => Self::Placed(placement),
            Err(e) => Self::PlacementFailed(e),
        }
    }
}

impl From<&Transition> for Feedback {
    fn from(transition: &Transition) -> Self {
        if let Some(error) = transition.error {
            return Self::GestureIgnored(error);
        }
        let Some(session) = transition.session else {
            return Self::GestureIgnored(GestureError::StrayGestureEvent(transition.kind));
        };
        let object = session.target();
        match (transition.kind, transition.phase) {
            (PinchKind::Begin, _) => Self::ScaleStarted {
                object,
                baseline: session.baseline(),
            },
            (_, GesturePhase::Ended) => Self::ScaleEnded {
                object,
                scale: session.current(),
            },
            (_, GesturePhase::Cancelled) => Self::ScaleCancelled {
                object,
                restored: session.baseline(),
            },
            _ => Self::Scaled {
                object,
                scale: session.current(),
            },
        }
    }
}
