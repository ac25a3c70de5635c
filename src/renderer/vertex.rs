//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const SKY: [f32; 4] = rgb(0, 153, 219);
    pub const CLOUD_LINE: [f32; 4] = rgb(255, 238, 229);
    pub const GROUND: [f32; 4] = rgb(67, 189, 53);
    pub const PIPE: [f32; 4] = rgb(167, 255, 25);
    pub const PLAYER: [f32; 4] = rgb(254, 231, 97);
    pub const TEXT: [f32; 4] = rgb(255, 255, 255);
    pub const TEXT_OUTLINE: [f32; 4] = rgb(20, 30, 40);

    /// Back to 8-bit channels, for the terminal
    pub fn to_rgb8(color: [f32; 4]) -> (u8, u8, u8) {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(color[0]), channel(color[1]), channel(color[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::desc().array_stride, 24);
    }

    #[test]
    fn test_palette_round_trips_to_rgb8() {
        assert_eq!(colors::to_rgb8(colors::SKY), (0, 153, 219));
        assert_eq!(colors::to_rgb8(colors::PIPE), (167, 255, 25));
        assert_eq!(colors::to_rgb8(colors::PLAYER), (254, 231, 97));
    }
}
