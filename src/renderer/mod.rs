mod core;
mod cube;
pub mod hud;
mod texture;

pub use self::core::Renderer;
