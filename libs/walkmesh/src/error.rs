//! # Error Types
//!
//! Construction-time error types for walkmesh building.
//!
//! ## Error Policy
//!
//! Only mesh *construction* is fallible. A [`WalkMesh`](crate::WalkMesh)
//! that fails validation never exists, so the walking operations take the
//! mesh invariants for granted and treat their own preconditions as
//! assertion-checked programmer contracts, not recoverable errors.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors detected while building a walkmesh.
///
/// Every variant describes a malformed input mesh; none of them are
/// recoverable by the caller beyond fixing the mesh data itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkMeshError {
    /// Vertex positions and vertex normals must be parallel arrays.
    #[error("Mismatched attribute counts: {positions} positions vs {normals} normals")]
    MismatchedAttributes {
        /// Number of vertex positions supplied.
        positions: usize,
        /// Number of vertex normals supplied.
        normals: usize,
    },

    /// A triangle references a vertex index outside the vertex array.
    #[error("Triangle {triangle} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfBounds {
        /// Index of the offending triangle.
        triangle: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Two triangles contain the same directed edge.
    ///
    /// Each directed edge may belong to exactly one triangle; a collision
    /// means the mesh is not a consistently oriented manifold.
    #[error("Directed edge ({from}, {to}) appears in more than one triangle")]
    DuplicateEdge {
        /// Edge start vertex index.
        from: u32,
        /// Edge end vertex index.
        to: u32,
    },

    /// A triangle's geometric normal points away from a stored vertex normal.
    ///
    /// The winding-derived outward normal must have a strictly positive dot
    /// product with the stored normal of each of the triangle's vertices.
    #[error("Triangle {triangle} geometric normal disagrees with stored normal of vertex {vertex}")]
    InconsistentNormal {
        /// Index of the offending triangle.
        triangle: usize,
        /// Vertex whose stored normal disagrees.
        vertex: u32,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for walkmesh construction.
pub type WalkMeshResult<T> = Result<T, WalkMeshError>;

// =============================================================================
// TESTS
// =============================================================================
