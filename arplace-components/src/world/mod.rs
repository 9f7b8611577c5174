mod memory_scene;
mod surface;
mod view_camera;

pub use memory_scene::*;
pub use surface::*;
pub use view_camera::*;
