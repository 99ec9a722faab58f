use crate::color::Color;
use crate::shader::{BasicFragmentShader, BasicVertexShader, FragmentShader, VertexShader};
use std::fmt;
use std::sync::Arc;

/// Surface appearance of a drawable: base color, fill mode, and shader pair.
///
/// Cloning is cheap; shaders are shared.
#[derive(Clone)]
pub struct Material {
    pub color: Color,
    /// Stroke face outlines instead of filling them.
    pub wireframe: bool,
    pub vertex_shader: Arc<dyn VertexShader>,
    pub fragment_shader: Arc<dyn FragmentShader>,
}

impl Material {
    /// Solid fill with the default shaders.
    pub fn basic(color: Color) -> Self {
        Self {
            color,
            wireframe: false,
            vertex_shader: Arc::new(BasicVertexShader),
            fragment_shader: Arc::new(BasicFragmentShader),
        }
    }

    /// Outline-only with the default shaders.
    pub fn wireframe(color: Color) -> Self {
        Self {
            wireframe: true,
            ..Self::basic(color)
        }
    }

    pub fn with_vertex_shader(mut self, shader: impl VertexShader + 'static) -> Self {
        self.vertex_shader = Arc::new(shader);
        self
    }

    pub fn with_fragment_shader(mut self, shader: impl FragmentShader + 'static) -> Self {
        self.fragment_shader = Arc::new(shader);
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::basic(Color::WHITE)
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Material")
            .field("color", &self.color)
            .field("wireframe", &self.wireframe)
            .finish_non_exhaustive()
    }
}
