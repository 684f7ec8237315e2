//! Tube stitching
//!
//! Connects the consecutive cross-section rings of one limb chain into a
//! closed-seam triangulated tube.

use glam::Vec3;

use crate::error::RigError;
use crate::mesh::BodyMesh;

/// Stitch a sequence of rings (already in mesh-local space) into a tube
///
/// All rings must share the first ring's point count D; ring `k` occupies
/// vertex indices `[k*D, k*D + D)`. Each pair of consecutive rings
/// contributes two triangles per point, with the seam closed by wrapping the
/// last point back to the first. Normals are recomputed from the final
/// triangle set.
///
/// Callers are expected to skip chains with fewer than two rings; a mismatch
/// in ring sizes or an oversized vertex buffer is a hard error for the limb.
pub fn build_tube(rings: &[Vec<Vec3>]) -> Result<BodyMesh, RigError> {
    let divisions = rings.first().map(Vec::len).unwrap_or(0);

    for (ring_index, ring) in rings.iter().enumerate() {
        if ring.len() != divisions {
            return Err(RigError::RingSizeMismatch {
                ring: ring_index,
                expected: divisions,
                found: ring.len(),
            });
        }
    }

    let vertex_count = rings.len() * divisions;
    if vertex_count > u16::MAX as usize {
        return Err(RigError::TooManyVertices {
            count: vertex_count,
        });
    }

    let mut mesh = BodyMesh::new();

    for ring in rings {
        for &point in ring {
            mesh.add_vertex(point);
        }
    }

    for ring_index in 0..rings.len().saturating_sub(1) {
        let start_current = (ring_index * divisions) as u16;
        let start_next = start_current + divisions as u16;

        for i in 0..divisions as u16 {
            let next_i = (i + 1) % divisions as u16;
            mesh.add_triangle(start_current + i, start_next + i, start_next + next_i);
            mesh.add_triangle(start_current + i, start_next + next_i, start_current + next_i);
        }
    }

    mesh.recalculate_normals();
    Ok(mesh)
}
