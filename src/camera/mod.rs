mod flycam;
mod orientation;
mod uniform;

pub use flycam::{Camera, MoveDirection};
pub use orientation::Orientation;
pub use uniform::SceneUniform;
