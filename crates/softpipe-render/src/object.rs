use crate::geometry::Geometry;
use crate::material::Material;
use softpipe_core::EntityId;
use softpipe_math::Transform;
use std::sync::Arc;

/// A drawable object: shared geometry and material placed by its own transform.
///
/// The host mutates `transform` between frames; the renderer only reads it.
/// Cloning shares geometry and material but issues a new [`EntityId`], so a
/// clone added to a scene is addressable on its own.
#[derive(Debug)]
pub struct Mesh {
    pub id: EntityId,
    pub name: Option<String>,
    pub geometry: Arc<Geometry>,
    pub material: Arc<Material>,
    pub transform: Transform,
}

impl Mesh {
    pub fn new(geometry: Arc<Geometry>, material: Arc<Material>) -> Self {
        Self {
            id: EntityId::new(),
            name: None,
            geometry,
            material,
            transform: Transform::identity(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

impl Clone for Mesh {
    fn clone(&self) -> Self {
        Self {
            id: EntityId::new(),
            name: self.name.clone(),
            geometry: Arc::clone(&self.geometry),
            material: Arc::clone(&self.material),
            transform: self.transform,
        }
    }
}
