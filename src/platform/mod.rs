//! Platform abstraction layer
//!
//! In-process stand-ins for the device services the game talks to:
//! - `input`: button events from a text stream into the bounded event queue
//! - `viewport`: render thread that runs the draw callback on request
//! - `terminal`: prints finished frames to stdout

pub mod input;
pub mod terminal;
pub mod viewport;

pub use terminal::TerminalDisplay;
pub use viewport::ViewPort;
