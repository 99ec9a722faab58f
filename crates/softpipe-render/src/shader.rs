//! Programmable stages of the pipeline.
//!
//! A vertex shader maps one object-local position to normalized device
//! coordinates; a fragment shader picks a single color for a whole face.
//! Both receive a fresh, immutable context per call, built by the renderer,
//! so no shader can reach renderer state or retain anything between calls.

use crate::color::Color;
use softpipe_math::{DMat4, Point3};

/// Values constant across every invocation of one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniforms {
    pub model_view: DMat4,
    pub projection: DMat4,
    pub color: Color,
}

/// Per-vertex inputs. Always a copy of the stored vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAttributes {
    pub position: Point3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexContext {
    pub attributes: VertexAttributes,
    pub uniforms: Uniforms,
}

/// Fragment inputs carry uniforms only; nothing is interpolated across a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentContext {
    pub uniforms: Uniforms,
}

pub trait VertexShader: Send + Sync {
    /// Return the vertex position in normalized device coordinates.
    fn shade(&self, ctx: &VertexContext) -> Point3;
}

pub trait FragmentShader: Send + Sync {
    /// Return the color for the entire face.
    fn shade(&self, ctx: &FragmentContext) -> Color;
}

impl<F> VertexShader for F
where
    F: Fn(&VertexContext) -> Point3 + Send + Sync,
{
    fn shade(&self, ctx: &VertexContext) -> Point3 {
        self(ctx)
    }
}

impl<F> FragmentShader for F
where
    F: Fn(&FragmentContext) -> Color + Send + Sync,
{
    fn shade(&self, ctx: &FragmentContext) -> Color {
        self(ctx)
    }
}

/// `projection * model_view * position`, with the perspective divide.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicVertexShader;

impl VertexShader for BasicVertexShader {
    fn shade(&self, ctx: &VertexContext) -> Point3 {
        let u = &ctx.uniforms;
        (u.projection * u.model_view).project_point3(ctx.attributes.position)
    }
}

/// Returns the material color unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFragmentShader;

impl FragmentShader for BasicFragmentShader {
    fn shade(&self, ctx: &FragmentContext) -> Color {
        ctx.uniforms.color
    }
}
