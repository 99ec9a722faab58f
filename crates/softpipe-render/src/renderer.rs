//! Per-frame drawing loop.
//!
//! A frame runs Clear, then Camera-Update, then one Draw per scene child in
//! order. There is no depth test: later children paint over earlier ones.

use crate::camera::Camera;
use crate::color::Color;
use crate::config::RendererConfig;
use crate::object::Mesh;
use crate::scene::Scene;
use crate::shader::{FragmentContext, Uniforms, VertexAttributes, VertexContext};
use crate::surface::{PathScope, Surface};
use crate::viewport::Viewport;
use log::{debug, warn};
use softpipe_math::DMat4;

/// Counters for the most recent frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub objects: usize,
    pub faces_drawn: usize,
    /// Faces with an out-of-range index, or whose projected points are not finite.
    pub faces_skipped: usize,
}

/// Draws scenes onto a [`Surface`].
///
/// Call [`resize`](Renderer::resize) at startup and whenever the host
/// surface changes size; until then the previous viewport stays in effect.
/// If `render` runs before any `resize`, the viewport is taken from the
/// surface size at that moment.
pub struct Renderer<S: Surface> {
    surface: S,
    config: RendererConfig,
    viewport: Option<Viewport>,
    last_frame: FrameStats,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, RendererConfig::default())
    }

    pub fn with_config(surface: S, config: RendererConfig) -> Self {
        Self {
            surface,
            config,
            viewport: None,
            last_frame: FrameStats::default(),
        }
    }

    pub fn clear_color(&self) -> Color {
        self.config.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.config.clear_color = color;
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    /// Recompute the NDC-to-pixel mapping from the surface's current size.
    pub fn resize(&mut self) -> Viewport {
        let (width, height) = self.surface.size();
        let viewport = Viewport::from_size(width, height, self.config.line_width);
        debug!("viewport set to {}x{}", width, height);
        self.viewport = Some(viewport);
        viewport
    }

    /// Redraw the whole surface from `scene` as seen by `camera`.
    pub fn render<C: Camera + ?Sized>(&mut self, scene: &Scene, camera: &mut C) {
        let viewport = match self.viewport {
            Some(vp) => {
                if !vp.matches(self.surface.size()) {
                    debug!("stale viewport; call resize() after the surface changes size");
                }
                vp
            }
            None => self.resize(),
        };

        self.surface.clear(self.config.clear_color);

        camera.update_projection_matrix();
        camera.update_matrix_world();
        let view = camera.matrix_world().inverse();
        camera.set_matrix_world_inverse(view);
        let projection = camera.projection_matrix();

        let mut stats = FrameStats {
            objects: scene.len(),
            ..FrameStats::default()
        };
        for mesh in scene.children() {
            self.draw_mesh(mesh, view, projection, &viewport, &mut stats);
        }

        debug!(
            "frame: {} objects, {} faces drawn, {} skipped",
            stats.objects, stats.faces_drawn, stats.faces_skipped
        );
        self.last_frame = stats;
    }

    fn draw_mesh(
        &mut self,
        mesh: &Mesh,
        view: DMat4,
        projection: DMat4,
        viewport: &Viewport,
        stats: &mut FrameStats,
    ) {
        let material = &mesh.material;
        let geometry = &mesh.geometry;
        let uniforms = Uniforms {
            model_view: view * mesh.transform.matrix(),
            projection,
            color: material.color,
        };

        for (face_index, face) in geometry.faces().enumerate() {
            let Some(vertices) = geometry.face_vertices(face) else {
                warn!(
                    "skipping face {} of {} ({}): indices {:?} exceed {} vertices",
                    face_index,
                    mesh.id,
                    mesh.name.as_deref().unwrap_or("unnamed"),
                    face,
                    geometry.vertex_count()
                );
                stats.faces_skipped += 1;
                continue;
            };

            let ndc = vertices.map(|v| {
                material.vertex_shader.shade(&VertexContext {
                    attributes: VertexAttributes { position: v.position },
                    uniforms,
                })
            });
            let color = material.fragment_shader.shade(&FragmentContext { uniforms });
            let points = ndc.map(|p| viewport.to_surface(p));

            let mut path = PathScope::begin(&mut self.surface);
            if !points.iter().all(|p| p.is_finite()) {
                stats.faces_skipped += 1;
                continue;
            }
            path.polygon(&points);
            if material.wireframe {
                path.stroke(color, viewport.line_width);
            } else {
                path.fill(color);
            }
            stats.faces_drawn += 1;
        }
    }
}
