//! Rendering module
//!
//! `scene` turns the game state into a backend-neutral draw list. The web
//! shell draws it with the wgpu pipeline, the terminal shell with `raster`.

pub mod font;
pub mod pipeline;
pub mod raster;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use raster::{Label, PixelBuf, Rgb, Viewport, rasterize};
pub use scene::{Color, DrawCmd, Rect, TextPass, build_scene};
pub use vertex::Vertex;
