//! Drawing surface the scene is rendered onto

use glam::IVec2;

use super::icons::Icon;

/// Minimal monochrome drawing API
///
/// Coordinates are screen pixels with the origin at the top-left. Anything
/// outside the surface is clipped by the implementation.
pub trait Canvas {
    /// Blank the whole surface
    fn clear(&mut self);

    /// Blit `icon` with its top-left corner at `top_left`
    fn draw_icon(&mut self, top_left: IVec2, icon: &Icon);

    /// Straight line between two points, both ends inclusive
    fn draw_line(&mut self, from: IVec2, to: IVec2);

    /// Text with its baseline-left corner at `at`
    fn draw_str(&mut self, at: IVec2, text: &str);
}
