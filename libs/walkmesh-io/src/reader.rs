//! # Walkmesh File Reader
//!
//! Decodes a chunked walkmesh file into a named [`WalkMeshes`] collection.
//!
//! The file carries five chunks in fixed order (positions, normals,
//! triangles, name bytes, index table); each index entry slices the shared
//! arrays into one named sub-mesh. Triangle indices are validated against
//! their sub-mesh's vertex range and then rebased to start at 0.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use walkmesh::WalkMesh;

use crate::chunk::{self, MAGIC_NORMALS, MAGIC_POSITIONS};
use crate::collection::WalkMeshes;
use crate::error::{WalkFileError, WalkFileResult};

/// Loads a walkmesh collection from a file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or if the stream fails
/// any of the checks documented on [`read_walkmeshes`].
pub fn load_walkmeshes<P: AsRef<Path>>(path: P) -> WalkFileResult<WalkMeshes> {
    let file = File::open(path)?;
    read_walkmeshes(BufReader::new(file))
}

/// Decodes a walkmesh collection from any byte stream.
///
/// Trailing bytes after the index chunk are tolerated with a warning on
/// stderr, matching the forgiving behavior expected of asset pipelines.
///
/// # Errors
///
/// - Chunk-level failures: wrong magic, misaligned payload, truncation.
/// - [`WalkFileError::MismatchedAttributes`] if the position and normal
///   chunks differ in record count.
/// - Range failures for any index entry whose name/vertex/triangle ranges
///   do not fit the decoded chunks.
/// - [`WalkFileError::InvalidTriangle`] if a triangle references vertices
///   outside its own sub-mesh's vertex range.
/// - [`WalkFileError::DuplicateName`] if two entries share a name.
/// - [`WalkFileError::Mesh`] if a decoded sub-mesh fails walkmesh
///   construction (duplicate directed edge, inconsistent normals).
pub fn read_walkmeshes<R: Read>(mut reader: R) -> WalkFileResult<WalkMeshes> {
    let positions = chunk::read_vec3_chunk(&mut reader, MAGIC_POSITIONS)?;
    let normals = chunk::read_vec3_chunk(&mut reader, MAGIC_NORMALS)?;
    let triangles = chunk::read_triangle_chunk(&mut reader)?;
    let names = chunk::read_name_chunk(&mut reader)?;
    let index = chunk::read_index_chunk(&mut reader)?;

    let mut trailing = Vec::new();
    reader.read_to_end(&mut trailing)?;
    if !trailing.is_empty() {
        eprintln!(
            "WARNING: {} bytes of trailing data in walkmesh stream",
            trailing.len()
        );
    }

    if positions.len() != normals.len() {
        return Err(WalkFileError::MismatchedAttributes {
            positions: positions.len(),
            normals: normals.len(),
        });
    }

    let mut meshes = WalkMeshes::new();
    for (entry_index, entry) in index.iter().enumerate() {
        if !(entry.name_begin <= entry.name_end && entry.name_end as usize <= names.len()) {
            return Err(WalkFileError::InvalidNameRange {
                entry: entry_index,
                begin: entry.name_begin,
                end: entry.name_end,
            });
        }
        if !(entry.vertex_begin <= entry.vertex_end
            && entry.vertex_end as usize <= positions.len())
        {
            return Err(WalkFileError::InvalidVertexRange {
                entry: entry_index,
                begin: entry.vertex_begin,
                end: entry.vertex_end,
            });
        }
        if !(entry.triangle_begin <= entry.triangle_end
            && entry.triangle_end as usize <= triangles.len())
        {
            return Err(WalkFileError::InvalidTriangleRange {
                entry: entry_index,
                begin: entry.triangle_begin,
                end: entry.triangle_end,
            });
        }

        let name_bytes = &names[entry.name_begin as usize..entry.name_end as usize];
        let name = std::str::from_utf8(name_bytes)
            .map_err(|_| WalkFileError::InvalidName { entry: entry_index })?;

        let vertex_range = entry.vertex_begin as usize..entry.vertex_end as usize;
        let sub_positions = positions[vertex_range.clone()].to_vec();
        let sub_normals = normals[vertex_range].to_vec();

        // Validate against the sub-mesh's vertex range, then rebase the
        // indices to start at 0.
        let mut sub_triangles =
            Vec::with_capacity((entry.triangle_end - entry.triangle_begin) as usize);
        for ti in entry.triangle_begin as usize..entry.triangle_end as usize {
            let tri = triangles[ti];
            if tri
                .iter()
                .any(|&v| v < entry.vertex_begin || v >= entry.vertex_end)
            {
                return Err(WalkFileError::InvalidTriangle { triangle: ti });
            }
            sub_triangles.push([
                tri[0] - entry.vertex_begin,
                tri[1] - entry.vertex_begin,
                tri[2] - entry.vertex_begin,
            ]);
        }

        let mesh = WalkMesh::new(sub_positions, sub_normals, sub_triangles)?;
        meshes.insert(name, mesh)?;
    }

    Ok(meshes)
}
