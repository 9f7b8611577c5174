/// Pinch gesture event as delivered by the host gesture recognizer.
///
/// `Change` carries the cumulative factor since `Begin`, not a delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinchEvent {
    Begin,
    Change(f32),
    End,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinchKind {
    Begin,
    Change,
    End,
    Cancel,
}

impl PinchEvent {
    pub fn kind(&self) -> PinchKind {
        match self {
            Self::Begin => PinchKind::Begin,
            Self::Change(_) => PinchKind::Change,
            Self::End => PinchKind::End,
            Self::Cancel => PinchKind::Cancel,
        }
    }
}

/// Phase of the scale gesture after an event was handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Active,
    Ended,
    Cancelled,
}
