//! # Walkmesh IO
//!
//! Chunked binary file format and named collection for walkmeshes.
//!
//! ## Architecture
//!
//! ```text
//! chunk (magic + length + packed records)
//!       ↓
//! reader / writer (five fixed chunks, range validation, index rebasing)
//!       ↓
//! collection (name → WalkMesh, recoverable not-found lookups)
//! ```
//!
//! ## File Layout
//!
//! ```text
//! "p..."  REAL32[3] per vertex   – positions, shared by all meshes
//! "n..."  REAL32[3] per vertex   – normals, parallel to positions
//! "tri0"  UINT32[3] per triangle – triangles, indices into shared vertices
//! "str0"  UINT8 per byte         – concatenated mesh name bytes
//! "idxA"  UINT32[6] per mesh     – name/vertex/triangle sub-ranges
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use std::io::Cursor;
//! use walkmesh::WalkMesh;
//! use walkmesh_io::WalkMeshes;
//!
//! let mesh = WalkMesh::new(
//!     vec![Vec3::ZERO, Vec3::X, Vec3::Y],
//!     vec![Vec3::Z; 3],
//!     vec![[0, 1, 2]],
//! )
//! .unwrap();
//!
//! let mut meshes = WalkMeshes::new();
//! meshes.insert("lobby", mesh).unwrap();
//!
//! let mut buffer = Vec::new();
//! meshes.to_writer(&mut buffer).unwrap();
//!
//! let reloaded = WalkMeshes::from_reader(Cursor::new(buffer)).unwrap();
//! assert_eq!(reloaded.lookup("lobby").unwrap().triangle_count(), 1);
//! ```

pub mod chunk;
pub mod collection;
pub mod error;
pub mod reader;
pub mod writer;

pub use collection::WalkMeshes;
pub use error::{WalkFileError, WalkFileResult};
pub use reader::{load_walkmeshes, read_walkmeshes};
pub use writer::{save_walkmeshes, write_walkmeshes};
