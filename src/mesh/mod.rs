//! Mesh buffers and geometry assembly

mod combine;
mod obj;
mod tube;

pub use combine::combine;
pub use obj::write_obj;
pub use tube::build_tube;

use glam::Vec3;

/// Flat triangle mesh: positions, per-vertex normals, u16 indices
///
/// The whole mesh is rebuilt per change; there is no incremental patching
/// and no identity carried across rebuilds. Indices are u16 for GPU
/// compatibility, which bounds a mesh at 65 535 vertices.
#[derive(Debug, Clone, Default)]
pub struct BodyMesh {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals as [x, y, z]
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices, three per triangle
    pub indices: Vec<u16>,
}

impl BodyMesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with a zero normal, returning its index
    pub fn add_vertex(&mut self, position: Vec3) -> u16 {
        let index = self.positions.len() as u16;
        self.positions.push([position.x, position.y, position.z]);
        self.normals.push([0.0, 0.0, 0.0]);
        index
    }

    /// Add a triangle using three vertex indices
    pub fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Recompute per-vertex normals from the triangle set
    ///
    /// Accumulates each face's cross-product normal onto its three vertices,
    /// then normalizes. Vertices shared between faces through the index
    /// buffer get smooth normals; unreferenced vertices keep a zero normal.
    pub fn recalculate_normals(&mut self) {
        let mut accumulated = vec![Vec3::ZERO; self.positions.len()];

        for chunk in self.indices.chunks(3) {
            if chunk.len() != 3 {
                continue;
            }
            let p0 = Vec3::from(self.positions[chunk[0] as usize]);
            let p1 = Vec3::from(self.positions[chunk[1] as usize]);
            let p2 = Vec3::from(self.positions[chunk[2] as usize]);

            let face_normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();
            for &index in chunk {
                accumulated[index as usize] += face_normal;
            }
        }

        for (normal, sum) in self.normals.iter_mut().zip(accumulated) {
            let n = sum.normalize_or_zero();
            *normal = [n.x, n.y, n.z];
        }
    }
}
