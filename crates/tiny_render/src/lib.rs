pub mod camera;
pub mod draw;
pub mod geometry;
pub mod input;
pub mod plugin;
pub mod ui;

pub use plugin::TinyRenderPlugin;
