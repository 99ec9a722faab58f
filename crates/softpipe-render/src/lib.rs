//! Software emulation of a triangle rendering pipeline on a 2D surface.
//!
//! Each frame the [`Renderer`] clears the surface, refreshes the camera,
//! then for every face of every object runs the material's vertex shader
//! on its three vertices and its fragment shader once, and strokes or fills
//! the resulting triangle.

pub mod camera;
pub mod color;
pub mod config;
pub mod geometry;
pub mod material;
pub mod object;
pub mod renderer;
pub mod scene;
pub mod shader;
pub mod surface;
pub mod viewport;

// Re-export main types
pub use camera::{Camera, OrthographicCamera, PerspectiveCamera};
pub use color::Color;
pub use config::RendererConfig;
pub use geometry::{Geometry, Vertex};
pub use material::Material;
pub use object::Mesh;
pub use renderer::{FrameStats, Renderer};
pub use scene::Scene;
pub use shader::{
    BasicFragmentShader, BasicVertexShader, FragmentContext, FragmentShader, Uniforms,
    VertexAttributes, VertexContext, VertexShader,
};
pub use surface::{DrawCommand, PathScope, RecordingSurface, Surface, SvgSurface};
pub use viewport::Viewport;
