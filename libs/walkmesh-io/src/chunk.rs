//! Chunk codec for the walkmesh binary format.
//!
//! A walkmesh file is a sequence of chunks, each laid out as:
//!
//! ```text
//! UINT8[4]  – Magic tag identifying the chunk
//! UINT32    – Payload byte length (little-endian)
//! UINT8[n]  – Payload: a packed array of fixed-size records
//! ```
//!
//! All multi-byte values are little-endian. Record layouts:
//!
//! ```text
//! "p..." / "n..."  REAL32[3]  – position / normal per vertex
//! "tri0"           UINT32[3]  – vertex indices per triangle
//! "str0"           UINT8      – raw name bytes, sliced by the index
//! "idxA"           UINT32[6]  – name_begin, name_end, vertex_begin,
//!                               vertex_end, triangle_begin, triangle_end
//! ```

use std::io::{Read, Write};

use glam::Vec3;

use crate::error::{WalkFileError, WalkFileResult};

/// Magic tag of the vertex position chunk.
pub const MAGIC_POSITIONS: [u8; 4] = *b"p...";

/// Magic tag of the vertex normal chunk.
pub const MAGIC_NORMALS: [u8; 4] = *b"n...";

/// Magic tag of the triangle index chunk.
pub const MAGIC_TRIANGLES: [u8; 4] = *b"tri0";

/// Magic tag of the name byte chunk.
pub const MAGIC_NAMES: [u8; 4] = *b"str0";

/// Magic tag of the index table chunk.
pub const MAGIC_INDEX: [u8; 4] = *b"idxA";

/// Bytes per encoded position or normal (3 x f32).
pub(crate) const VEC3_SIZE: usize = 12;

/// Bytes per encoded triangle (3 x u32).
pub(crate) const TRIANGLE_SIZE: usize = 12;

/// Bytes per encoded index entry (6 x u32).
pub(crate) const INDEX_ENTRY_SIZE: usize = 24;

/// One record of the index table: the sub-ranges of the shared arrays that
/// make up a single named mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IndexEntry {
    pub name_begin: u32,
    pub name_end: u32,
    pub vertex_begin: u32,
    pub vertex_end: u32,
    pub triangle_begin: u32,
    pub triangle_end: u32,
}

// =============================================================================
// LOW-LEVEL CHUNK FRAMING
// =============================================================================

/// Reads one chunk, verifying its magic and record alignment, and returns
/// the raw payload bytes.
fn read_chunk<R: Read>(
    reader: &mut R,
    magic: [u8; 4],
    record_size: usize,
) -> WalkFileResult<Vec<u8>> {
    let mut found = [0u8; 4];
    reader.read_exact(&mut found)?;
    if found != magic {
        return Err(WalkFileError::BadMagic { expected: magic, found });
    }

    let mut length_bytes = [0u8; 4];
    reader.read_exact(&mut length_bytes)?;
    let length = u32::from_le_bytes(length_bytes);
    if length as usize % record_size != 0 {
        return Err(WalkFileError::MisalignedChunk { magic, length, record_size });
    }

    let mut payload = vec![0u8; length as usize];
    reader.read_exact(&mut payload)?;
    Ok(payload)
}

/// Writes one chunk: magic, payload byte length, payload.
fn write_chunk<W: Write>(writer: &mut W, magic: [u8; 4], payload: &[u8]) -> WalkFileResult<()> {
    writer.write_all(&magic)?;
    writer.write_all(&(payload.len() as u32).to_le_bytes())?;
    writer.write_all(payload)?;
    Ok(())
}

#[inline]
fn f32_at(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

// =============================================================================
// TYPED RECORD CODECS
// =============================================================================

/// Reads a chunk of packed `Vec3` records.
pub(crate) fn read_vec3_chunk<R: Read>(
    reader: &mut R,
    magic: [u8; 4],
) -> WalkFileResult<Vec<Vec3>> {
    let payload = read_chunk(reader, magic, VEC3_SIZE)?;
    Ok(payload
        .chunks_exact(VEC3_SIZE)
        .map(|rec| Vec3::new(f32_at(rec, 0), f32_at(rec, 4), f32_at(rec, 8)))
        .collect())
}

/// Reads the triangle chunk of packed `[u32; 3]` records.
pub(crate) fn read_triangle_chunk<R: Read>(reader: &mut R) -> WalkFileResult<Vec<[u32; 3]>> {
    let payload = read_chunk(reader, MAGIC_TRIANGLES, TRIANGLE_SIZE)?;
    Ok(payload
        .chunks_exact(TRIANGLE_SIZE)
        .map(|rec| [u32_at(rec, 0), u32_at(rec, 4), u32_at(rec, 8)])
        .collect())
}

/// Reads the raw name byte chunk.
pub(crate) fn read_name_chunk<R: Read>(reader: &mut R) -> WalkFileResult<Vec<u8>> {
    read_chunk(reader, MAGIC_NAMES, 1)
}

/// Reads the index table chunk.
pub(crate) fn read_index_chunk<R: Read>(reader: &mut R) -> WalkFileResult<Vec<IndexEntry>> {
    let payload = read_chunk(reader, MAGIC_INDEX, INDEX_ENTRY_SIZE)?;
    Ok(payload
        .chunks_exact(INDEX_ENTRY_SIZE)
        .map(|rec| IndexEntry {
            name_begin: u32_at(rec, 0),
            name_end: u32_at(rec, 4),
            vertex_begin: u32_at(rec, 8),
            vertex_end: u32_at(rec, 12),
            triangle_begin: u32_at(rec, 16),
            triangle_end: u32_at(rec, 20),
        })
        .collect())
}

/// Writes a chunk of packed `Vec3` records.
pub(crate) fn write_vec3_chunk<W: Write>(
    writer: &mut W,
    magic: [u8; 4],
    records: &[Vec3],
) -> WalkFileResult<()> {
    let mut payload = Vec::with_capacity(records.len() * VEC3_SIZE);
    for v in records {
        payload.extend_from_slice(&v.x.to_le_bytes());
        payload.extend_from_slice(&v.y.to_le_bytes());
        payload.extend_from_slice(&v.z.to_le_bytes());
    }
    write_chunk(writer, magic, &payload)
}

/// Writes the triangle chunk.
pub(crate) fn write_triangle_chunk<W: Write>(
    writer: &mut W,
    records: &[[u32; 3]],
) -> WalkFileResult<()> {
    let mut payload = Vec::with_capacity(records.len() * TRIANGLE_SIZE);
    for tri in records {
        for index in tri {
            payload.extend_from_slice(&index.to_le_bytes());
        }
    }
    write_chunk(writer, MAGIC_TRIANGLES, &payload)
}

/// Writes the raw name byte chunk.
pub(crate) fn write_name_chunk<W: Write>(writer: &mut W, names: &[u8]) -> WalkFileResult<()> {
    write_chunk(writer, MAGIC_NAMES, names)
}

/// Writes the index table chunk.
pub(crate) fn write_index_chunk<W: Write>(
    writer: &mut W,
    entries: &[IndexEntry],
) -> WalkFileResult<()> {
    let mut payload = Vec::with_capacity(entries.len() * INDEX_ENTRY_SIZE);
    for e in entries {
        for field in [
            e.name_begin,
            e.name_end,
            e.vertex_begin,
            e.vertex_end,
            e.triangle_begin,
            e.triangle_end,
        ] {
            payload.extend_from_slice(&field.to_le_bytes());
        }
    }
    write_chunk(writer, MAGIC_INDEX, &payload)
}

// =============================================================================
// TESTS
// =============================================================================
