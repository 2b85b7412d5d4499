//! # Error Types
//!
//! Error types for walkmesh file decoding and named-collection lookups.
//!
//! ## Error Policy
//!
//! Every malformed-file condition is a distinct variant so a loader can
//! report exactly what is wrong with an asset. [`WalkFileError::MeshNotFound`]
//! is the one *recoverable* per-call failure: asking the collection for a
//! name it does not contain.

use thiserror::Error;
use walkmesh::WalkMeshError;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors from reading, writing, or querying walkmesh collections.
#[derive(Error, Debug)]
pub enum WalkFileError {
    /// Underlying I/O failure (includes truncated chunks as
    /// `UnexpectedEof`).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A chunk header carried an unexpected magic tag.
    #[error("Bad chunk magic: expected {expected:?}, found {found:?}")]
    BadMagic {
        /// The magic tag required at this position in the file.
        expected: [u8; 4],
        /// The magic tag actually present.
        found: [u8; 4],
    },

    /// A chunk's byte length is not a whole number of records.
    #[error("Chunk {magic:?} length {length} is not a multiple of record size {record_size}")]
    MisalignedChunk {
        /// Magic tag of the offending chunk.
        magic: [u8; 4],
        /// Byte length declared by the chunk header.
        length: u32,
        /// Size in bytes of one record of this chunk.
        record_size: usize,
    },

    /// The position and normal chunks decode to different lengths.
    #[error("Mismatched position and normal counts: {positions} vs {normals}")]
    MismatchedAttributes {
        /// Number of decoded vertex positions.
        positions: usize,
        /// Number of decoded vertex normals.
        normals: usize,
    },

    /// An index entry's name range does not fit the name chunk.
    #[error("Invalid name range {begin}..{end} in index entry {entry}")]
    InvalidNameRange {
        /// Index of the offending entry in the index chunk.
        entry: usize,
        /// Range start byte.
        begin: u32,
        /// Range end byte.
        end: u32,
    },

    /// An index entry's name bytes are not valid UTF-8.
    #[error("Name of index entry {entry} is not valid UTF-8")]
    InvalidName {
        /// Index of the offending entry in the index chunk.
        entry: usize,
    },

    /// An index entry's vertex range does not fit the vertex chunks.
    #[error("Invalid vertex range {begin}..{end} in index entry {entry}")]
    InvalidVertexRange {
        /// Index of the offending entry in the index chunk.
        entry: usize,
        /// Range start vertex.
        begin: u32,
        /// Range end vertex.
        end: u32,
    },

    /// An index entry's triangle range does not fit the triangle chunk.
    #[error("Invalid triangle range {begin}..{end} in index entry {entry}")]
    InvalidTriangleRange {
        /// Index of the offending entry in the index chunk.
        entry: usize,
        /// Range start triangle.
        begin: u32,
        /// Range end triangle.
        end: u32,
    },

    /// A triangle references vertices outside its sub-mesh's vertex range.
    #[error("Triangle {triangle} references vertices outside its sub-mesh range")]
    InvalidTriangle {
        /// Index of the offending triangle in the triangle chunk.
        triangle: usize,
    },

    /// Two index entries (or two inserts) use the same mesh name.
    #[error("Duplicate walkmesh name '{name}'")]
    DuplicateName {
        /// The name that already exists in the collection.
        name: String,
    },

    /// A decoded sub-mesh failed walkmesh construction.
    #[error("Malformed walkmesh geometry: {0}")]
    Mesh(#[from] WalkMeshError),

    /// The collection has no mesh under the requested name.
    #[error("Walkmesh '{name}' not found")]
    MeshNotFound {
        /// The name that was looked up.
        name: String,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for walkmesh file operations.
pub type WalkFileResult<T> = Result<T, WalkFileError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = WalkFileError::MeshNotFound { name: "lobby".to_string() };
        assert!(err.to_string().contains("'lobby'"));

        let err = WalkFileError::MismatchedAttributes { positions: 8, normals: 6 };
        assert!(err.to_string().contains("8 vs 6"));
    }

    /// Test construction errors convert into file errors.
    #[test]
    fn test_mesh_error_conversion() {
        let inner = WalkMeshError::DuplicateEdge { from: 1, to: 2 };
        let err = WalkFileError::from(inner);
        assert!(err.to_string().contains("Malformed walkmesh geometry"));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WalkFileError>();
    }
}
