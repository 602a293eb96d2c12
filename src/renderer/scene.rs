//! Scene drawing
//!
//! Everything is drawn from a `Snapshot`, so the renderer never sees a
//! half-updated angle/offset pair.

use glam::IVec2;

use super::canvas::Canvas;
use super::icons::{PIG, RED, SLINGSHOT};
use crate::consts::*;
use crate::polar_offset;
use crate::sim::Snapshot;

/// Draw options that do not affect gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneOptions {
    /// Print angle and Red's y in the top-left corner
    pub debug_overlay: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            debug_overlay: true,
        }
    }
}

fn draw_red(canvas: &mut impl Canvas, snap: &Snapshot) {
    let pos = snap.projectile - IVec2::new(RED_CENTER_X, RED_CENTER_Y);
    canvas.draw_icon(pos, &RED);
}

fn draw_slingshot(canvas: &mut impl Canvas) {
    canvas.draw_icon(
        IVec2::new(SLINGSHOT_X - SLINGSHOT_CENTER_X, SLINGSHOT_Y),
        &SLINGSHOT,
    );
}

fn draw_aiming_line(canvas: &mut impl Canvas, snap: &Snapshot) {
    let pivot = IVec2::new(SLINGSHOT_X, SLINGSHOT_Y);
    let end = polar_offset(pivot, AIMING_LINE_LENGTH, snap.radians);
    canvas.draw_line(pivot, end);
}

fn draw_pigs(canvas: &mut impl Canvas, snap: &Snapshot) {
    let center = IVec2::new(PIG_CENTER_X, PIG_CENTER_Y);
    for pig in snap.targets.iter().filter(|p| p.visible) {
        canvas.draw_icon(pig.pos - center, &PIG);
    }
}

fn draw_debug_info(canvas: &mut impl Canvas, snap: &Snapshot) {
    canvas.draw_str(IVec2::new(0, 8), &format!("angle: {}", snap.angle));
    canvas.draw_str(IVec2::new(0, 16), &format!("red y: {}", snap.projectile.y));
}

/// Draw a full frame
pub fn draw(canvas: &mut impl Canvas, snap: &Snapshot, options: SceneOptions) {
    canvas.clear();
    draw_red(canvas, snap);
    draw_slingshot(canvas);
    draw_aiming_line(canvas, snap);
    draw_pigs(canvas, snap);

    if options.debug_overlay {
        draw_debug_info(canvas, snap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Framebuffer;
    use crate::renderer::icons::Icon;
    use crate::sim::GameState;

    /// Records calls instead of rasterizing
    #[derive(Default)]
    struct Recorder {
        icons: Vec<(&'static str, IVec2)>,
        lines: Vec<(IVec2, IVec2)>,
        text: Vec<String>,
    }

    impl Canvas for Recorder {
        fn clear(&mut self) {
            *self = Self::default();
        }
        fn draw_icon(&mut self, top_left: IVec2, icon: &Icon) {
            self.icons.push((icon.name, top_left));
        }
        fn draw_line(&mut self, from: IVec2, to: IVec2) {
            self.lines.push((from, to));
        }
        fn draw_str(&mut self, _at: IVec2, text: &str) {
            self.text.push(text.to_string());
        }
    }

    #[test]
    fn test_frame_contents() {
        let mut state = GameState::new(12345);
        state.targets[2].visible = false;
        let snap = state.snapshot();

        let mut rec = Recorder::default();
        draw(&mut rec, &snap, SceneOptions::default());

        let pigs = rec.icons.iter().filter(|(n, _)| *n == "pig").count();
        assert_eq!(pigs, PIG_COUNT - 1);
        assert!(rec.icons.contains(&("red", IVec2::new(2, SLINGSHOT_Y + 4 - 8))));
        assert!(rec.icons.contains(&("slingshot", IVec2::new(20, 35))));
        // 15 deg: trunc(20 cos) = 19, trunc(20 sin) = 5
        assert_eq!(rec.lines, vec![(IVec2::new(24, 35), IVec2::new(43, 30))]);
        assert_eq!(rec.text, vec!["angle: 15".to_string(), "red y: 39".to_string()]);
    }

    #[test]
    fn test_overlay_can_be_disabled() {
        let snap = GameState::new(1).snapshot();
        let mut rec = Recorder::default();
        draw(
            &mut rec,
            &snap,
            SceneOptions {
                debug_overlay: false,
            },
        );
        assert!(rec.text.is_empty());
    }

    #[test]
    fn test_draws_into_framebuffer() {
        let snap = GameState::new(8).snapshot();
        let mut fb = Framebuffer::default();
        draw(&mut fb, &snap, SceneOptions::default());
        assert!(fb.get(SLINGSHOT_X, SLINGSHOT_Y));
        assert!(fb.to_ascii().contains("angle: 15"));
    }
}
