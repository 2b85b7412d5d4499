//! # Named Walkmesh Collection
//!
//! Immutable-after-load registry mapping mesh names to [`WalkMesh`] values.
//! Populated once, either programmatically or by the file reader; lookups
//! of absent names are the system's only recoverable per-call failure.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::Path;

use walkmesh::WalkMesh;

use crate::error::{WalkFileError, WalkFileResult};
use crate::{reader, writer};

/// A named collection of walkmeshes.
///
/// ## Example
///
/// ```rust
/// use glam::Vec3;
/// use walkmesh::WalkMesh;
/// use walkmesh_io::WalkMeshes;
///
/// let mesh = WalkMesh::new(
///     vec![Vec3::ZERO, Vec3::X, Vec3::Y],
///     vec![Vec3::Z; 3],
///     vec![[0, 1, 2]],
/// )
/// .unwrap();
///
/// let mut meshes = WalkMeshes::new();
/// meshes.insert("lobby", mesh).unwrap();
/// assert!(meshes.lookup("lobby").is_ok());
/// assert!(meshes.lookup("attic").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WalkMeshes {
    /// Mesh name -> mesh.
    meshes: HashMap<String, WalkMesh>,
}

impl WalkMeshes {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a collection from a walkmesh file on disk.
    ///
    /// # Errors
    ///
    /// Any [`WalkFileError`] raised while opening, decoding, or validating
    /// the file.
    pub fn load<P: AsRef<Path>>(path: P) -> WalkFileResult<Self> {
        reader::load_walkmeshes(path)
    }

    /// Decodes a collection from any byte stream.
    pub fn from_reader<R: Read>(reader: R) -> WalkFileResult<Self> {
        reader::read_walkmeshes(reader)
    }

    /// Saves the collection to a walkmesh file on disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> WalkFileResult<()> {
        writer::save_walkmeshes(path, self)
    }

    /// Encodes the collection into any byte sink.
    pub fn to_writer<W: Write>(&self, writer: W) -> WalkFileResult<()> {
        writer::write_walkmeshes(writer, self)
    }

    /// Adds a mesh under `name`.
    ///
    /// # Errors
    ///
    /// [`WalkFileError::DuplicateName`] if the name is already taken; the
    /// existing mesh is left in place.
    pub fn insert(&mut self, name: impl Into<String>, mesh: WalkMesh) -> WalkFileResult<()> {
        let name = name.into();
        if self.meshes.contains_key(&name) {
            return Err(WalkFileError::DuplicateName { name });
        }
        self.meshes.insert(name, mesh);
        Ok(())
    }

    /// Looks up a mesh by name.
    ///
    /// # Errors
    ///
    /// [`WalkFileError::MeshNotFound`] if no mesh was loaded under `name`.
    pub fn lookup(&self, name: &str) -> WalkFileResult<&WalkMesh> {
        self.meshes
            .get(name)
            .ok_or_else(|| WalkFileError::MeshNotFound { name: name.to_string() })
    }

    /// Looks up a mesh by name without an error value.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&WalkMesh> {
        self.meshes.get(name)
    }

    /// Returns the number of meshes in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns true if the collection holds no meshes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Returns all mesh names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.meshes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over `(name, mesh)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WalkMesh)> {
        self.meshes.iter().map(|(name, mesh)| (name.as_str(), mesh))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn triangle_mesh() -> WalkMesh {
        WalkMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![Vec3::Z; 3],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut meshes = WalkMeshes::new();
        meshes.insert("lobby", triangle_mesh()).unwrap();

        assert_eq!(meshes.len(), 1);
        let found = meshes.lookup("lobby").unwrap();
        assert_eq!(found.triangle_count(), 1);
    }

    #[test]
    fn test_lookup_absent_name_fails() {
        let meshes = WalkMeshes::new();
        let result = meshes.lookup("attic");
        assert!(matches!(
            result,
            Err(WalkFileError::MeshNotFound { ref name }) if name == "attic"
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut meshes = WalkMeshes::new();
        meshes.insert("lobby", triangle_mesh()).unwrap();
        let result = meshes.insert("lobby", triangle_mesh());
        assert!(matches!(result, Err(WalkFileError::DuplicateName { .. })));
        // The original mesh survives the rejected insert.
        assert_eq!(meshes.len(), 1);
    }

    #[test]
    fn test_names_are_sorted() {
        let mut meshes = WalkMeshes::new();
        meshes.insert("b", triangle_mesh()).unwrap();
        meshes.insert("a", triangle_mesh()).unwrap();
        meshes.insert("c", triangle_mesh()).unwrap();
        assert_eq!(meshes.names(), vec!["a", "b", "c"]);
    }
}
