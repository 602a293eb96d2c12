//! Rendering module
//!
//! Scenes are drawn onto any `Canvas`; `Framebuffer` is the built-in 1-bit
//! implementation used by the terminal front-end.

pub mod canvas;
pub mod framebuffer;
pub mod icons;
pub mod scene;

pub use canvas::Canvas;
pub use framebuffer::Framebuffer;
pub use scene::{SceneOptions, draw};
