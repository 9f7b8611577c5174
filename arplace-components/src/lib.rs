mod object;
mod world;

pub use object::*;
pub use world::*;
