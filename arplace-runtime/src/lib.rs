mod config;
mod error;
mod event;
mod feedback;
mod host;
mod placement;
mod scale;
mod session;

#[cfg(test)]
mod test_host;

pub use config::*;
pub use error::*;
pub use event::*;
pub use feedback::*;
pub use host::*;
pub use placement::*;
pub use scale::*;
pub use session::*;
