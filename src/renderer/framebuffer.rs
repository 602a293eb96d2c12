//! 1-bit framebuffer with an overlaid text layer
//!
//! Stands in for the device display: the scene draws into it and the
//! terminal front-end prints it as ASCII art.

use glam::IVec2;

use super::canvas::Canvas;
use super::icons::Icon;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub at: IVec2,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: i32,
    height: i32,
    pixels: Vec<bool>,
    text: Vec<TextRun>,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// Pixels in a `width` x `height` buffer; negative sides count as zero
fn pixel_count(width: i32, height: i32) -> usize {
    (width.max(0) as usize).saturating_mul(height.max(0) as usize)
}

impl Framebuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let len = pixel_count(width, height);
        Self {
            width,
            height,
            pixels: vec![false; len],
            text: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Set one pixel; out-of-bounds writes are clipped
    pub fn set(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = true;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| self.pixels[i]).unwrap_or(false)
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    pub fn text(&self) -> &[TextRun] {
        &self.text
    }

    /// Render as text, one character per pixel, with text runs stamped on top
    pub fn to_ascii(&self) -> String {
        let mut grid: Vec<Vec<char>> = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.get(x, y) { '#' } else { ' ' })
                    .collect()
            })
            .collect();

        for run in &self.text {
            // Baseline sits one row under the glyphs
            let row = run.at.y - 1;
            if row < 0 || row >= self.height {
                continue;
            }
            for (i, ch) in run.text.chars().enumerate() {
                let col = run.at.x + i as i32;
                if col >= 0 && col < self.width {
                    grid[row as usize][col as usize] = ch;
                }
            }
        }

        let mut out = String::with_capacity(pixel_count(self.width.saturating_add(1), self.height));
        for row in grid {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl Canvas for Framebuffer {
    fn clear(&mut self) {
        self.pixels.fill(false);
        self.text.clear();
    }

    fn draw_icon(&mut self, top_left: IVec2, icon: &Icon) {
        for (dx, dy) in icon.pixels() {
            self.set(top_left.x + dx, top_left.y + dy);
        }
    }

    /// Bresenham
    fn draw_line(&mut self, from: IVec2, to: IVec2) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.set(x, y);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_str(&mut self, at: IVec2, text: &str) {
        self.text.push(TextRun {
            at,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::icons::Icon;

    #[test]
    fn test_line_endpoints_inclusive() {
        let mut fb = Framebuffer::new(32, 32);
        fb.draw_line(IVec2::new(2, 3), IVec2::new(12, 8));
        assert!(fb.get(2, 3));
        assert!(fb.get(12, 8));
        // One pixel per column for a shallow line
        assert_eq!(fb.lit_count(), 11);
    }

    #[test]
    fn test_vertical_and_reversed_lines() {
        let mut fb = Framebuffer::new(16, 16);
        fb.draw_line(IVec2::new(5, 10), IVec2::new(5, 2));
        assert_eq!(fb.lit_count(), 9);
        assert!((2..=10).all(|y| fb.get(5, y)));
    }

    #[test]
    fn test_clipping() {
        let mut fb = Framebuffer::new(8, 8);
        fb.draw_icon(IVec2::new(-1, -1), &Icon::new("t", &["##", "##"]));
        assert_eq!(fb.lit_count(), 1);
        assert!(fb.get(0, 0));
        fb.draw_line(IVec2::new(-5, 4), IVec2::new(20, 4));
        assert!((0..8).all(|x| fb.get(x, 4)));
    }

    #[test]
    fn test_ascii_overlays_text() {
        let mut fb = Framebuffer::new(10, 3);
        fb.set(0, 2);
        fb.draw_str(IVec2::new(1, 1), "hi");
        let ascii = fb.to_ascii();
        let lines: Vec<_> = ascii.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], " hi       ");
        assert_eq!(lines[2], "#         ");
    }

    #[test]
    fn test_large_dimensions_do_not_wrap() {
        // Overflows as an i32 product
        assert_eq!(pixel_count(65_536, 32_768), 1usize << 31);
        assert_eq!(pixel_count(i32::MAX, -1), 0);

        let mut fb = Framebuffer::new(70_000, 2);
        fb.set(69_999, 1);
        assert!(fb.get(69_999, 1));
        assert!(!fb.get(69_999, 0));

        let empty = Framebuffer::new(-4, 10);
        assert_eq!(empty.lit_count(), 0);
        assert!(!empty.get(0, 0));
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set(1, 1);
        fb.draw_str(IVec2::new(0, 1), "x");
        fb.clear();
        assert_eq!(fb.lit_count(), 0);
        assert!(fb.text().is_empty());
    }
}
