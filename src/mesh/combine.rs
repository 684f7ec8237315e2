//! Mesh combining
//!
//! Merges the per-limb tube meshes into the single body mesh handed to the
//! host. Limb geometry is already expressed in the shared mesh-local space,
//! so combination is pure buffer concatenation with index offsetting.

use crate::error::RigError;
use crate::mesh::BodyMesh;

/// Combine multiple meshes into one
///
/// Vertex buffers are concatenated in input order and each mesh's indices
/// are offset by the cumulative vertex count of the meshes before it. No
/// spatial transform is applied.
pub fn combine(meshes: &[BodyMesh]) -> Result<BodyMesh, RigError> {
    let total_vertices: usize = meshes.iter().map(BodyMesh::vertex_count).sum();
    let total_indices: usize = meshes.iter().map(|m| m.indices.len()).sum();

    if total_vertices > u16::MAX as usize {
        return Err(RigError::TooManyVertices {
            count: total_vertices,
        });
    }

    let mut result = BodyMesh::new();
    result.positions.reserve(total_vertices);
    result.normals.reserve(total_vertices);
    result.indices.reserve(total_indices);

    for mesh in meshes {
        if mesh.positions.is_empty() {
            continue;
        }

        let vertex_offset = result.positions.len() as u16;
        result.positions.extend_from_slice(&mesh.positions);
        result.normals.extend_from_slice(&mesh.normals);

        for &index in &mesh.indices {
            result.indices.push(vertex_offset + index);
        }
    }

    Ok(result)
}
