use softpipe_core::{Result, SoftpipeError, Validate};
use softpipe_math::{DVec3, Point3};

/// A single vertex. Position is the only attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: DVec3::new(x, y, z),
        }
    }
}

impl From<Point3> for Vertex {
    fn from(position: Point3) -> Self {
        Self { position }
    }
}

/// Indexed triangle list in object-local space.
///
/// Every consecutive triple of `indices` is one face.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn from_positions(positions: &[Point3], indices: Vec<u32>) -> Self {
        Self::new(positions.iter().copied().map(Vertex::from).collect(), indices)
    }

    /// Rectangle in the XY plane centered at the origin, split into faces
    /// `[0, 1, 3]` and `[1, 2, 3]`.
    ///
    /// Vertex order: top-left, top-right, bottom-right, bottom-left.
    pub fn plane(width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::new(
            vec![
                Vertex::new(-hw, hh, 0.0),
                Vertex::new(hw, hh, 0.0),
                Vertex::new(hw, -hh, 0.0),
                Vertex::new(-hw, -hh, 0.0),
            ],
            vec![0, 1, 3, 1, 2, 3],
        )
    }

    /// Axis-aligned box centered at the origin: 8 corners, 12 faces.
    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);
        let vertices = vec![
            Vertex::new(-x, -y, z),
            Vertex::new(x, -y, z),
            Vertex::new(x, y, z),
            Vertex::new(-x, y, z),
            Vertex::new(-x, -y, -z),
            Vertex::new(x, -y, -z),
            Vertex::new(x, y, -z),
            Vertex::new(-x, y, -z),
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 1, 2,  0, 2, 3, // front
            5, 4, 7,  5, 7, 6, // back
            4, 0, 3,  4, 3, 7, // left
            1, 5, 6,  1, 6, 2, // right
            3, 2, 6,  3, 6, 7, // top
            4, 5, 1,  4, 1, 0, // bottom
        ];
        Self::new(vertices, indices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of complete faces. A trailing partial triple is not counted.
    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Index triples, one per complete face.
    pub fn faces(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|f| [f[0], f[1], f[2]])
    }

    /// Look up the three vertices of a face, or `None` if any index is out of range.
    pub fn face_vertices(&self, face: [u32; 3]) -> Option<[Vertex; 3]> {
        let get = |i: u32| self.vertices.get(i as usize).copied();
        Some([get(face[0])?, get(face[1])?, get(face[2])?])
    }
}

impl Validate for Geometry {
    fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(SoftpipeError::malformed(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        for (face, tri) in self.faces().enumerate() {
            if let Some(&bad) = tri.iter().find(|&&i| i as usize >= self.vertices.len()) {
                return Err(SoftpipeError::malformed(format!(
                    "face {} references vertex {} but only {} exist",
                    face,
                    bad,
                    self.vertices.len()
                )));
            }
        }
        Ok(())
    }
}
