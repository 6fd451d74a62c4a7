//! Wavefront OBJ export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use quad_mesh::{QuadMesh, VertexUV};

/// Write a quad mesh as OBJ
///
/// OBJ texture space has its origin at the bottom-left, so V is flipped on
/// the way out. All faces share the +Z normal.
pub fn write_obj<W: Write>(
    out: &mut W,
    mesh: &QuadMesh<VertexUV>,
    name: &str,
) -> io::Result<()> {
    writeln!(out, "# quad-gen")?;
    writeln!(out, "o {}", name)?;

    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        writeln!(out, "v {} {} {}", x, y, z)?;
    }
    for vertex in &mesh.vertices {
        let [u, v] = vertex.uv;
        writeln!(out, "vt {} {}", u, 1.0 - v)?;
    }
    writeln!(out, "vn 0 0 1")?;

    for tri in mesh.indices.chunks_exact(3) {
        // OBJ indices are 1-based
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| u32::from(i) + 1);
        writeln!(out, "f {a}/{a}/1 {b}/{b}/1 {c}/{c}/1")?;
    }

    Ok(())
}

/// Write a quad mesh to an OBJ file at `path`
pub fn write_obj_file(mesh: &QuadMesh<VertexUV>, path: &Path, name: &str) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(&mut out, mesh, name)?;
    out.flush()
}
