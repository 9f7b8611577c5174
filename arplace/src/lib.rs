#[cfg(feature = "core")]
pub mod core {
    pub use arplace_core::*;
}

#[cfg(feature = "runtime")]
pub mod runtime {
    pub use arplace_runtime::*;
}

#[cfg(feature = "components")]
pub mod components {
    pub use arplace_components::*;
}

#[cfg(feature = "runtime")]
pub use arplace_runtime::{Feedback, PinchEvent, Session, SessionConfig};
