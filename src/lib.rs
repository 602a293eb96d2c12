//! Furious Birds - a slingshot aiming toy for a 128x64 monochrome screen
//!
//! Core modules:
//! - `sim`: Game state, aiming, target placement and input dispatch
//! - `renderer`: Canvas abstraction, framebuffer and scene drawing
//! - `platform`: Input adapter and viewport (render thread) stand-ins
//! - `session`: Owning aggregate that runs the main loop
//! - `settings`: Optional JSON configuration

pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Red (the projectile) rests at this x; its icon is drawn around its center
    pub const RED_START_X: i32 = 9;
    pub const RED_CENTER_X: i32 = 7;
    pub const RED_CENTER_Y: i32 = 8;

    /// Slingshot pivot point
    pub const SLINGSHOT_X: i32 = 24;
    pub const SLINGSHOT_Y: i32 = 35;
    pub const SLINGSHOT_CENTER_X: i32 = 4;

    /// Horizontal distance between Red and the pivot
    pub const RED_TO_SLINGSHOT_X: i32 = SLINGSHOT_X - RED_START_X;

    /// Launch angle (degrees)
    pub const ANGLE_START: i32 = 15;
    pub const ANGLE_MAX: i32 = 45;
    pub const ANGLE_MIN: i32 = -45;

    pub const PIG_CENTER_X: i32 = 6;
    pub const PIG_CENTER_Y: i32 = 6;

    /// Region pigs are placed in (end bounds exclusive)
    pub const PIGS_AREA_X_START: i32 = 50;
    pub const PIGS_AREA_X_END: i32 = 120;
    pub const PIGS_AREA_Y_START: i32 = 8;
    pub const PIGS_AREA_Y_END: i32 = 56;

    pub const PIG_COUNT: usize = 10;
    pub const MIN_DISTANCE_BETWEEN_PIGS: i32 = 14;

    pub const AIMING_LINE_LENGTH: f64 = 20.0;

    /// Placement attempts allowed for layouts other than the stock pig layout
    pub const MAX_PLACEMENT_ATTEMPTS: u64 = 1_000_000;

    /// Bounded capacity of the input event queue
    pub const EVENT_QUEUE_CAPACITY: usize = 8;
}

/// Convert whole degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: i32) -> f64 {
    f64::from(degrees) / 180.0 * std::f64::consts::PI
}

/// Point `length` away from `origin` along `radians`, in screen space (y grows down)
#[inline]
pub fn polar_offset(origin: IVec2, length: f64, radians: f64) -> IVec2 {
    let dx = (length * radians.cos()) as i32;
    let dy = (length * radians.sin()) as i32;
    IVec2::new(origin.x + dx, origin.y - dy)
}
