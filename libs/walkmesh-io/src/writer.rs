//! # Walkmesh File Writer
//!
//! Encodes a [`WalkMeshes`] collection into the chunked walkmesh format
//! decoded by [`crate::reader`].
//!
//! All sub-meshes share one position, normal, and triangle array; each
//! sub-mesh's triangle indices are offset by its vertex base so the index
//! table can slice the shared arrays back apart. Meshes are written in
//! lexicographic name order so output is deterministic.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::Vec3;

use crate::chunk::{self, IndexEntry, MAGIC_NORMALS, MAGIC_POSITIONS};
use crate::collection::WalkMeshes;
use crate::error::WalkFileResult;

/// Saves a walkmesh collection to a file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_walkmeshes<P: AsRef<Path>>(path: P, meshes: &WalkMeshes) -> WalkFileResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_walkmeshes(&mut writer, meshes)?;
    writer.flush()?;
    Ok(())
}

/// Encodes a walkmesh collection into any byte sink.
///
/// # Errors
///
/// Returns an error if the sink rejects a write.
pub fn write_walkmeshes<W: Write>(mut writer: W, meshes: &WalkMeshes) -> WalkFileResult<()> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut triangles: Vec<[u32; 3]> = Vec::new();
    let mut names: Vec<u8> = Vec::new();
    let mut index: Vec<IndexEntry> = Vec::new();

    for name in meshes.names() {
        // names() only returns contained keys.
        let Some(mesh) = meshes.get(name) else { continue };

        let name_begin = names.len() as u32;
        names.extend_from_slice(name.as_bytes());

        let vertex_begin = positions.len() as u32;
        positions.extend_from_slice(mesh.positions());
        normals.extend_from_slice(mesh.normals());

        let triangle_begin = triangles.len() as u32;
        for tri in mesh.triangles() {
            triangles.push([
                tri[0] + vertex_begin,
                tri[1] + vertex_begin,
                tri[2] + vertex_begin,
            ]);
        }

        index.push(IndexEntry {
            name_begin,
            name_end: names.len() as u32,
            vertex_begin,
            vertex_end: positions.len() as u32,
            triangle_begin,
            triangle_end: triangles.len() as u32,
        });
    }

    chunk::write_vec3_chunk(&mut writer, MAGIC_POSITIONS, &positions)?;
    chunk::write_vec3_chunk(&mut writer, MAGIC_NORMALS, &normals)?;
    chunk::write_triangle_chunk(&mut writer, &triangles)?;
    chunk::write_name_chunk(&mut writer, &names)?;
    chunk::write_index_chunk(&mut writer, &index)?;
    Ok(())
}
