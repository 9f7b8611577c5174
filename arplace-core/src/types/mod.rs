mod bounds;
mod handle;
mod pose;
mod surface;
mod transform;

pub use bounds::*;
pub use handle::*;
pub use pose::*;
pub use surface::*;
pub use transform::*;
