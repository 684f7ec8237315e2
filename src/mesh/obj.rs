//! Wavefront OBJ export
//!
//! Debug affordance for inspecting generated body meshes in external
//! viewers. Not a runtime asset path.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::mesh::BodyMesh;

/// Write a mesh as a Wavefront OBJ file
///
/// Emits `v` and `vn` lines in buffer order followed by `f` lines with
/// 1-based `v//vn` references.
pub fn write_obj(mesh: &BodyMesh, path: &Path, object_name: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "o {object_name}")?;

    for position in &mesh.positions {
        writeln!(writer, "v {} {} {}", position[0], position[1], position[2])?;
    }
    for normal in &mesh.normals {
        writeln!(writer, "vn {} {} {}", normal[0], normal[1], normal[2])?;
    }

    for triangle in mesh.indices.chunks(3) {
        if triangle.len() != 3 {
            continue;
        }
        let (a, b, c) = (
            triangle[0] as usize + 1,
            triangle[1] as usize + 1,
            triangle[2] as usize + 1,
        );
        writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }

    writer.flush()
}
