use crate::object::Mesh;
use softpipe_core::EntityId;

/// A flat, ordered list of drawables.
///
/// Child order is draw order. Nothing is depth sorted, so callers who want
/// back-to-front output add objects in that order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    children: Vec<Mesh>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Append a mesh and return its id
    pub fn add(&mut self, mesh: Mesh) -> EntityId {
        let id = mesh.id;
        self.children.push(mesh);
        id
    }

    /// Remove a mesh by id, keeping the order of the rest
    pub fn remove(&mut self, id: EntityId) -> Option<Mesh> {
        let pos = self.children.iter().position(|m| m.id == id)?;
        Some(self.children.remove(pos))
    }

    pub fn get(&self, id: EntityId) -> Option<&Mesh> {
        self.children.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Mesh> {
        self.children.iter_mut().find(|m| m.id == id)
    }

    pub fn children(&self) -> &[Mesh] {
        &self.children
    }

    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Mesh> {
        self.children.iter_mut()
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total face count across all children
    pub fn total_faces(&self) -> usize {
        self.children.iter().map(|m| m.geometry.face_count()).sum()
    }
}
