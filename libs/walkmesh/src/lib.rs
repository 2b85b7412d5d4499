//! # Walkmesh
//!
//! Navigation-mesh walking core. Given a triangulated surface mesh with
//! per-vertex normals, this crate locates the mesh point nearest an
//! arbitrary 3D point and simulates constrained movement of an agent
//! confined to the mesh surface, including crossing between adjacent
//! triangles with correct surface-normal reorientation.
//!
//! ## Architecture
//!
//! ```text
//! geometry (barycentric projection)
//!       ↓
//! adjacency (directed edge → third vertex)
//!       ↓
//! mesh (validated immutable WalkMesh)
//!       ↓
//! walk (nearest_walk_point / walk_in_triangle / cross_edge)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use walkmesh::WalkMesh;
//!
//! let mesh = WalkMesh::new(
//!     vec![Vec3::ZERO, Vec3::X, Vec3::Y],
//!     vec![Vec3::Z; 3],
//!     vec![[0, 1, 2]],
//! )?;
//!
//! // Drop an agent onto the surface and take a small step.
//! let at = mesh.nearest_walk_point(Vec3::new(0.3, 0.3, 1.0));
//! let (at, time) = mesh.walk_in_triangle(&at, Vec3::new(0.1, 0.0, 0.0));
//! assert_eq!(time, 1.0);
//! assert_eq!(at.indices, [0, 1, 2]);
//! # Ok::<(), walkmesh::WalkMeshError>(())
//! ```
//!
//! All operations are synchronous and pure over immutable mesh data; a
//! constructed [`WalkMesh`] can be shared read-only across threads without
//! locking.

pub mod adjacency;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod walk;

pub use adjacency::EdgeAdjacency;
pub use error::{WalkMeshError, WalkMeshResult};
pub use mesh::WalkMesh;
pub use walk::WalkPoint;
