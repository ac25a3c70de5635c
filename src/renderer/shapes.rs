//! Shape generation for 2D primitives
//!
//! Output stays in game pixels; the pipeline maps to clip space.

use glam::Vec2;

use super::font;
use super::scene::{Color, DrawCmd, Rect};
use super::vertex::Vertex;

/// Thickness of `DrawCmd::Line` in game pixels
pub const LINE_WIDTH: f32 = 2.0;

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, color: Color) -> [Vertex; 6] {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.right(), rect.bottom());
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// A thick line as a quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> [Vertex; 6] {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Vertices for a line of bitmap text
pub fn text(text: &str, pos: Vec2, scale: f32, color: Color) -> Vec<Vertex> {
    let rects = font::glyph_rects(text, pos, scale);
    let mut vertices = Vec::with_capacity(rects.len() * 6);
    for r in &rects {
        vertices.extend_from_slice(&rect(r, color));
    }
    vertices
}

/// Flatten a draw list into a clear color and a triangle list
pub fn tessellate(cmds: &[DrawCmd]) -> (Option<Color>, Vec<Vertex>) {
    let mut clear = None;
    let mut vertices = Vec::new();

    for cmd in cmds {
        match cmd {
            DrawCmd::Clear(color) => {
                clear = Some(*color);
                vertices.clear();
            }
            DrawCmd::Line { from, to, color } => {
                vertices.extend_from_slice(&line(*from, *to, LINE_WIDTH, *color));
            }
            DrawCmd::FillRect { rect: r, color } => {
                vertices.extend_from_slice(&rect(r, *color));
            }
            DrawCmd::Text {
                pos,
                text: s,
                scale,
                color,
                ..
            } => {
                vertices.extend(text(s, *pos, *scale, *color));
            }
        }
    }

    (clear, vertices)
}
