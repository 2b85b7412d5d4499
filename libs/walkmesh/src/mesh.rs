//! # Walkmesh Data Structure
//!
//! Immutable triangulated walking surface: vertex positions, per-vertex
//! normals, wound triangles, and the directed-edge adjacency index.
//!
//! All invariants are checked once at construction; a [`WalkMesh`] value
//! that exists is valid, never mutated, and safe to share read-only across
//! threads.

use glam::Vec3;

use crate::adjacency::EdgeAdjacency;
use crate::error::{WalkMeshError, WalkMeshResult};
use crate::geometry::triangle_normal;
use crate::walk::WalkPoint;

/// An immutable triangle mesh an agent can walk on.
///
/// Construction validates that:
/// - positions and normals are parallel arrays of the same length,
/// - every triangle index is a valid vertex index,
/// - no directed edge belongs to two triangles (oriented manifold),
/// - each triangle's winding-derived outward normal agrees in sign with the
///   stored normal of each of its vertices.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use walkmesh::WalkMesh;
///
/// let mesh = WalkMesh::new(
///     vec![Vec3::ZERO, Vec3::X, Vec3::Y],
///     vec![Vec3::Z; 3],
///     vec![[0, 1, 2]],
/// )
/// .unwrap();
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct WalkMesh {
    /// Vertex positions.
    positions: Vec<Vec3>,
    /// Per-vertex normals, parallel to `positions`.
    normals: Vec<Vec3>,
    /// Triangles as vertex-index triples in consistent winding order.
    triangles: Vec<[u32; 3]>,
    /// Directed-edge adjacency, built once from `triangles`.
    adjacency: EdgeAdjacency,
}

impl WalkMesh {
    /// Builds a walkmesh from parallel vertex arrays and a triangle list.
    ///
    /// # Errors
    ///
    /// - [`WalkMeshError::MismatchedAttributes`] if `positions` and
    ///   `normals` differ in length.
    /// - [`WalkMeshError::IndexOutOfBounds`] if a triangle references a
    ///   nonexistent vertex.
    /// - [`WalkMeshError::DuplicateEdge`] if two triangles contain the same
    ///   directed edge.
    /// - [`WalkMeshError::InconsistentNormal`] if a triangle's geometric
    ///   normal has a non-positive dot product with a stored vertex normal.
    ///
    /// An empty triangle list is accepted; the walking queries, not
    /// construction, require a non-empty mesh.
    pub fn new(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        triangles: Vec<[u32; 3]>,
    ) -> WalkMeshResult<Self> {
        if positions.len() != normals.len() {
            return Err(WalkMeshError::MismatchedAttributes {
                positions: positions.len(),
                normals: normals.len(),
            });
        }

        for (ti, tri) in triangles.iter().enumerate() {
            for &index in tri {
                if index as usize >= positions.len() {
                    return Err(WalkMeshError::IndexOutOfBounds {
                        triangle: ti,
                        index,
                        vertex_count: positions.len(),
                    });
                }
            }
        }

        let adjacency = EdgeAdjacency::build(&triangles)?;

        // Stored vertex normals must agree with the winding-derived outward
        // normal of every triangle touching them.
        for (ti, &[x, y, z]) in triangles.iter().enumerate() {
            let out = triangle_normal(
                positions[x as usize],
                positions[y as usize],
                positions[z as usize],
            );
            for vertex in [x, y, z] {
                if out.dot(normals[vertex as usize]) <= 0.0 {
                    return Err(WalkMeshError::InconsistentNormal { triangle: ti, vertex });
                }
            }
        }

        Ok(Self {
            positions,
            normals,
            triangles,
            adjacency,
        })
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Returns the per-vertex normals.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Returns the triangle index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the directed-edge adjacency index.
    #[inline]
    pub fn adjacency(&self) -> &EdgeAdjacency {
        &self.adjacency
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the position of the vertex at `index`.
    #[inline]
    pub fn position(&self, index: u32) -> Vec3 {
        self.positions[index as usize]
    }

    /// Returns the stored normal of the vertex at `index`.
    #[inline]
    pub fn normal(&self, index: u32) -> Vec3 {
        self.normals[index as usize]
    }

    /// Returns the three vertex positions of a triangle index triple.
    #[inline]
    pub(crate) fn triangle_positions(&self, tri: [u32; 3]) -> (Vec3, Vec3, Vec3) {
        (
            self.position(tri[0]),
            self.position(tri[1]),
            self.position(tri[2]),
        )
    }

    /// Reconstructs the world-space position of a walk point.
    ///
    /// The weighted sum of the walk point's triangle vertex positions.
    pub fn world_point(&self, at: &WalkPoint) -> Vec3 {
        let (a, b, c) = self.triangle_positions(at.indices);
        a * at.weights.x + b * at.weights.y + c * at.weights.z
    }

    /// Reconstructs the smooth world-space surface normal of a walk point.
    ///
    /// The normalized weighted sum of the triangle's stored vertex normals;
    /// useful for orienting an agent standing at the walk point.
    pub fn world_normal(&self, at: &WalkPoint) -> Vec3 {
        let n = self.normal(at.indices[0]) * at.weights.x
            + self.normal(at.indices[1]) * at.weights.y
            + self.normal(at.indices[2]) * at.weights.z;
        n.normalize()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{DISTANCE_EPSILON, WEIGHT_EPSILON};

    fn unit_triangle_mesh() -> WalkMesh {
        WalkMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![Vec3::Z; 3],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_construct_valid_mesh() {
        let mesh = unit_triangle_mesh();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.is_empty());
        assert_eq!(mesh.adjacency().len(), 3);
    }

    #[test]
    fn test_construct_empty_mesh() {
        let mesh = WalkMesh::new(vec![], vec![], vec![]).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn test_mismatched_attributes_rejected() {
        let result = WalkMesh::new(vec![Vec3::ZERO, Vec3::X], vec![Vec3::Z], vec![]);
        assert!(matches!(
            result,
            Err(WalkMeshError::MismatchedAttributes { positions: 2, normals: 1 })
        ));
    }

    #[test]
    fn test_out_of_bounds_index_rejected() {
        let result = WalkMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![Vec3::Z; 3],
            vec![[0, 1, 3]],
        );
        assert!(matches!(
            result,
            Err(WalkMeshError::IndexOutOfBounds { triangle: 0, index: 3, .. })
        ));
    }

    #[test]
    fn test_duplicate_directed_edge_rejected() {
        // (0, 1) appears in both triangles with the same orientation.
        let result = WalkMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(0.5, -1.0, 0.0)],
            vec![Vec3::Z; 4],
            vec![[0, 1, 2], [0, 1, 3]],
        );
        assert!(matches!(result, Err(WalkMeshError::DuplicateEdge { .. })));
    }

    #[test]
    fn test_inconsistent_normal_rejected() {
        // Stored normal of vertex 1 points away from the face normal (+Z).
        let result = WalkMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![Vec3::Z, -Vec3::Z, Vec3::Z],
            vec![[0, 1, 2]],
        );
        assert!(matches!(
            result,
            Err(WalkMeshError::InconsistentNormal { triangle: 0, vertex: 1 })
        ));
    }

    #[test]
    fn test_perpendicular_normal_rejected() {
        // A dot product of exactly zero is not "strictly positive".
        let result = WalkMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![Vec3::Z, Vec3::X, Vec3::Z],
            vec![[0, 1, 2]],
        );
        assert!(matches!(
            result,
            Err(WalkMeshError::InconsistentNormal { triangle: 0, vertex: 1 })
        ));
    }

    #[test]
    fn test_world_point_reconstruction() {
        let mesh = unit_triangle_mesh();
        let at = WalkPoint::new([0, 1, 2], Vec3::new(0.25, 0.25, 0.5));
        let world = mesh.world_point(&at);
        assert!(world.abs_diff_eq(Vec3::new(0.25, 0.5, 0.0), DISTANCE_EPSILON));
    }

    #[test]
    fn test_world_normal_is_unit_length() {
        // Fold two unit-normal contributions; the blend must renormalize.
        let mesh = WalkMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![
                Vec3::Z,
                Vec3::new(0.6, 0.0, 0.8),
                Vec3::Z,
            ],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let at = WalkPoint::new([0, 1, 2], Vec3::new(0.5, 0.5, 0.0));
        let n = mesh.world_normal(&at);
        assert!((n.length() - 1.0).abs() < WEIGHT_EPSILON);
    }
}
