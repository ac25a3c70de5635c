//! Software rasterizer for the terminal shell
//!
//! Fills a pixel buffer from a draw list. Text is not rasterized; fill-pass
//! text becomes a `Label` positioned in terminal cells, since one terminal
//! row holds two buffer rows.

use glam::Vec2;

use super::font;
use super::scene::{DrawCmd, Rect, TextPass};
use super::vertex::colors;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn from_color(color: [f32; 4]) -> Self {
        let (r, g, b) = colors::to_rgb8(color);
        Rgb(r, g, b)
    }
}

/// Fill for the area outside the letterboxed game
pub const BORDER: Rgb = Rgb(0, 0, 0);

/// Row-major RGB pixels
#[derive(Debug, Clone)]
pub struct PixelBuf {
    w: usize,
    h: usize,
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![BORDER; w * h],
        }
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.clear();
        self.px.resize(w * h, BORDER);
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    /// Fill `[x0, x1) x [y0, y1)`, clipped to the buffer
    pub fn fill_span(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgb) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.w as i32);
        let y1 = y1.min(self.h as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.px[y as usize * self.w + x as usize] = c;
            }
        }
    }

    pub fn clear(&mut self, c: Rgb) {
        self.px.fill(c);
    }
}

/// Where the 640x480 game lands inside a buffer, keeping its aspect ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Buffer pixels per game pixel
    pub scale: f32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Largest centered fit of the game into a `w` x `h` buffer
    pub fn fit(w: usize, h: usize) -> Self {
        let scale = (w as f32 / WINDOW_WIDTH).min(h as f32 / WINDOW_HEIGHT);
        let width = (WINDOW_WIDTH * scale).floor() as i32;
        let height = (WINDOW_HEIGHT * scale).floor() as i32;
        Self {
            scale,
            offset_x: (w as i32 - width) / 2,
            offset_y: (h as i32 - height) / 2,
            width,
            height,
        }
    }

    /// Game point to buffer pixel
    pub fn map(&self, p: Vec2) -> (i32, i32) {
        (
            self.offset_x + (p.x * self.scale).round() as i32,
            self.offset_y + (p.y * self.scale).round() as i32,
        )
    }

    fn fill_rect(&self, buf: &mut PixelBuf, rect: &Rect, c: Rgb) {
        let (x0, y0) = self.map(Vec2::new(rect.x, rect.y));
        let (x1, y1) = self.map(Vec2::new(rect.right(), rect.bottom()));
        let (cx0, cy0, cx1, cy1) = self.clip();
        buf.fill_span(x0.max(cx0), y0.max(cy0), x1.min(cx1), y1.min(cy1), c);
    }

    fn clip(&self) -> (i32, i32, i32, i32) {
        (
            self.offset_x,
            self.offset_y,
            self.offset_x + self.width,
            self.offset_y + self.height,
        )
    }
}

/// Text to print over the pixels, in terminal cells
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub col: u16,
    pub row: u16,
    pub text: String,
    pub color: Rgb,
}

/// Rasterize `cmds` into `buf` and return the labels to print on top
pub fn rasterize(cmds: &[DrawCmd], buf: &mut PixelBuf) -> Vec<Label> {
    let view = Viewport::fit(buf.width(), buf.height());
    let mut labels = Vec::new();

    for cmd in cmds {
        match cmd {
            DrawCmd::Clear(color) => {
                buf.clear(BORDER);
                let full = Rect {
                    x: 0.0,
                    y: 0.0,
                    w: WINDOW_WIDTH,
                    h: WINDOW_HEIGHT,
                };
                view.fill_rect(buf, &full, Rgb::from_color(*color));
            }
            DrawCmd::Line { from, to, color } => {
                // One buffer pixel thick, axis aligned
                let (x0, y0) = view.map(from.min(*to));
                let (x1, y1) = view.map(from.max(*to));
                let (cx0, cy0, cx1, cy1) = view.clip();
                buf.fill_span(
                    x0.max(cx0),
                    y0.max(cy0),
                    (x1 + 1).min(cx1),
                    (y1 + 1).min(cy1),
                    Rgb::from_color(*color),
                );
            }
            DrawCmd::FillRect { rect, color } => {
                view.fill_rect(buf, rect, Rgb::from_color(*color));
            }
            DrawCmd::Text {
                pos,
                text,
                scale,
                color,
                pass: TextPass::Fill,
            } => {
                let center = *pos
                    + Vec2::new(
                        font::text_width(text, *scale) / 2.0,
                        font::text_height(*scale) / 2.0,
                    );
                let (x, y) = view.map(center);
                let half = text.chars().count() as i32 / 2;
                labels.push(Label {
                    col: (x - half).max(0) as u16,
                    row: (y / 2).max(0) as u16,
                    text: text.clone(),
                    color: Rgb::from_color(*color),
                });
            }
            DrawCmd::Text { .. } => {}
        }
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::scene::build_scene;
    use crate::sim::{GameState, Overlay};

    #[test]
    fn test_viewport_letterboxes() {
        // Wide buffer: full height, bars left and right
        let view = Viewport::fit(200, 60);
        assert_eq!(view.height, 60);
        assert_eq!(view.width, 80);
        assert_eq!(view.offset_x, 60);
        assert_eq!(view.offset_y, 0);

        // Tall buffer: full width, bars top and bottom
        let view = Viewport::fit(64, 100);
        assert_eq!(view.width, 64);
        assert_eq!(view.height, 48);
        assert_eq!(view.offset_y, 26);
    }

    #[test]
    fn test_fill_span_clips() {
        let mut buf = PixelBuf::new(4, 4);
        buf.fill_span(-5, -5, 2, 2, Rgb(1, 2, 3));
        buf.fill_span(3, 3, 100, 100, Rgb(4, 5, 6));
        assert_eq!(buf.get(0, 0), Rgb(1, 2, 3));
        assert_eq!(buf.get(1, 1), Rgb(1, 2, 3));
        assert_eq!(buf.get(2, 2), BORDER);
        assert_eq!(buf.get(3, 3), Rgb(4, 5, 6));
    }

    #[test]
    fn test_offscreen_pipes_stay_in_viewport() {
        let state = GameState::new(1, 0.0);
        let mut buf = PixelBuf::new(200, 60);
        rasterize(&build_scene(&state), &mut buf);
        // Bars stay black even though parked and entering pipes extend past the edges
        for y in 0..buf.height() {
            assert_eq!(buf.get(0, y), BORDER);
            assert_eq!(buf.get(199, y), BORDER);
        }
        let sky = Rgb::from_color(colors::SKY);
        assert_eq!(buf.get(100, 10), sky);
    }

    #[test]
    fn test_scene_colors_land() {
        let state = GameState::new(1, 0.0);
        let mut buf = PixelBuf::new(64, 48);
        rasterize(&build_scene(&state), &mut buf);
        // Scale 0.1: player center (160,180) -> (16,18), ground from y 44
        assert_eq!(buf.get(16, 18), Rgb::from_color(colors::PLAYER));
        assert_eq!(buf.get(5, 46), Rgb::from_color(colors::GROUND));
        assert_eq!(buf.get(5, 7), Rgb::from_color(colors::CLOUD_LINE));
    }

    #[test]
    fn test_only_fill_text_becomes_labels() {
        let mut state = GameState::new(1, 0.0);
        state.overlay = Overlay::PlayAgain;
        let mut buf = PixelBuf::new(64, 48);
        let labels = rasterize(&build_scene(&state), &mut buf);
        let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["0", "Game Over!", "Final Score: 0", "<space> to Play Again"]
        );
        assert!(labels.iter().all(|l| (l.row as usize) < 24));
    }
}
