mod placed_object;

pub use placed_object::*;
