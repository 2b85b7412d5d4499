//! # Surface Walking
//!
//! The walking operations over a [`WalkMesh`]: nearest-point queries,
//! straight-line movement confined to a single triangle, and edge crossing
//! into an adjacent triangle with surface-normal reorientation.
//!
//! ## Walk Points
//!
//! A position on the surface is a [`WalkPoint`]: a triangle (three vertex
//! indices) plus barycentric weights summing to 1. Walk points are small
//! `Copy` values; every operation returns a new one and never mutates its
//! input.
//!
//! ## Driving an Agent
//!
//! A navigation driver moves an agent one step per tick by calling
//! [`WalkMesh::walk_in_triangle`], and while the returned time is below 1,
//! [`WalkMesh::cross_edge`] followed by another `walk_in_triangle` with the
//! unconsumed remainder of the step (rotated by the returned quaternion).
//! A `None` from `cross_edge` is a boundary edge: a wall that halts motion.

use glam::{Quat, Vec3};

use crate::geometry::{barycentric_weights, triangle_normal};
use crate::mesh::WalkMesh;

// =============================================================================
// WALK POINT
// =============================================================================

/// A position on a walkmesh surface.
///
/// Identified by the containing triangle's vertex indices and the
/// barycentric weights of the point within that triangle. When the point
/// lies inside or on the triangle's boundary, every weight is in `[0, 1]`
/// and the three sum to 1. A weight of exactly 0 means the point lies on
/// the edge opposite that slot; two zero weights mean the point is at a
/// vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkPoint {
    /// Vertex indices of the containing triangle, in winding order.
    pub indices: [u32; 3],
    /// Barycentric weights, one per slot of `indices`, summing to 1.
    pub weights: Vec3,
}

impl WalkPoint {
    /// Creates a walk point from a triangle and barycentric weights.
    #[inline]
    pub fn new(indices: [u32; 3], weights: Vec3) -> Self {
        Self { indices, weights }
    }
}

// =============================================================================
// WALKING OPERATIONS
// =============================================================================

impl WalkMesh {
    /// Finds the walk point nearest to an arbitrary world-space point.
    ///
    /// Scans every triangle: if the point's plane projection lands inside
    /// the triangle (all weights non-negative), the projection itself is
    /// the candidate; otherwise the closest point on each of the three
    /// boundary segments is. The candidate with the strictly smallest
    /// squared distance wins; ties keep the first candidate in stored
    /// triangle order.
    ///
    /// # Panics
    ///
    /// Panics if the mesh has no triangles; querying an empty mesh is a
    /// caller contract violation.
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
    ///
    /// let at = mesh.nearest_walk_point(Vec3::new(0.25, 0.25, 3.0));
    /// assert_eq!(at.indices, [0, 1, 2]);
    /// ```
    pub fn nearest_walk_point(&self, world_point: Vec3) -> WalkPoint {
        assert!(
            !self.is_empty(),
            "nearest_walk_point called on a walkmesh with no triangles"
        );

        let mut closest = WalkPoint::new([0, 0, 0], Vec3::ZERO);
        let mut closest_dis2 = f32::INFINITY;

        for &tri in self.triangles() {
            let (a, b, c) = self.triangle_positions(tri);

            // Barycentric coordinates of the closest point in the plane of
            // (a, b, c).
            let coords = barycentric_weights(a, b, c, world_point);

            if coords.x >= 0.0 && coords.y >= 0.0 && coords.z >= 0.0 {
                // Projection lands inside the triangle; measure against the
                // reconstructed (projected) point.
                let projected = a * coords.x + b * coords.y + c * coords.z;
                let dis2 = world_point.distance_squared(projected);
                if dis2 < closest_dis2 {
                    closest_dis2 = dis2;
                    closest = WalkPoint::new(tri, coords);
                }
            } else {
                // Projection falls outside; the closest surface point lies
                // on one of the three boundary segments.
                let [x, y, z] = tri;
                for (ai, bi, ci) in [(x, y, z), (y, z, x), (z, x, y)] {
                    let a = self.position(ai);
                    let b = self.position(bi);

                    // Clamped scalar projection onto segment a-b.
                    let along = (world_point - a).dot(b - a);
                    let max = (b - a).dot(b - a);
                    let (pt, coords) = if along < 0.0 {
                        (a, Vec3::new(1.0, 0.0, 0.0))
                    } else if along > max {
                        (b, Vec3::new(0.0, 1.0, 0.0))
                    } else {
                        let amt = along / max;
                        (a.lerp(b, amt), Vec3::new(1.0 - amt, amt, 0.0))
                    };

                    let dis2 = world_point.distance_squared(pt);
                    if dis2 < closest_dis2 {
                        closest_dis2 = dis2;
                        closest = WalkPoint::new([ai, bi, ci], coords);
                    }
                }
            }
        }

        debug_assert!(closest
            .indices
            .iter()
            .all(|&index| (index as usize) < self.vertex_count()));
        closest
    }

    /// Walks from `start` along `step` within the starting triangle.
    ///
    /// Returns the reached walk point and the fraction of `step` consumed,
    /// in `(0, 1]`. A time of 1 means the full step stayed inside the
    /// triangle. A time below 1 means the walk stopped on an edge; the
    /// returned walk point is relabeled so the crossed edge's endpoints
    /// occupy slots 0 and 1 and `weights.z` is exactly 0, ready for
    /// [`WalkMesh::cross_edge`].
    ///
    /// `start` must lie within or on the boundary of its triangle; a start
    /// already past the boundary in the step direction violates the
    /// positive-time invariant and panics.
    pub fn walk_in_triangle(&self, start: &WalkPoint, step: Vec3) -> (WalkPoint, f32) {
        let (a, b, c) = self.triangle_positions(start.indices);

        // Barycentric weights of the step destination against the same
        // triangle's plane; components can be negative outside it.
        let dest = self.world_point(start) + step;
        let dest_bary = barycentric_weights(a, b, c, dest);

        // The first coordinate to reach zero decides which edge is exited.
        let mut min_time = f32::INFINITY;
        let mut exit_slot = usize::MAX;
        {
            let mut consider = |slot: usize, start_w: f32, dest_w: f32| {
                if dest_w > 0.0 {
                    return;
                }
                let time = -start_w / (dest_w - start_w);
                if time < min_time {
                    min_time = time;
                    exit_slot = slot;
                }
            };
            consider(0, start.weights.x, dest_bary.x);
            consider(1, start.weights.y, dest_bary.y);
            consider(2, start.weights.z, dest_bary.z);
        }

        let time = min_time.min(1.0);
        assert!(time > 0.0, "walk started past the triangle boundary");

        let weights = start.weights + (dest_bary - start.weights) * time;
        let [x, y, z] = start.indices;

        // Relabel so the zeroed slot lands in position 2; the crossed edge
        // is then always (indices[1], indices[0]) for cross_edge.
        let end = match exit_slot {
            0 => WalkPoint::new([y, z, x], Vec3::new(weights.y, weights.z, 0.0)),
            1 => WalkPoint::new([z, x, y], Vec3::new(weights.z, weights.x, 0.0)),
            2 => WalkPoint::new([x, y, z], Vec3::new(weights.x, weights.y, 0.0)),
            // No edge crossed within one full step.
            _ => WalkPoint::new(start.indices, weights),
        };

        (end, time)
    }

    /// Crosses the edge a walk point is resting on into the twin triangle.
    ///
    /// `start` must lie exactly on the edge between its triangle's first
    /// two vertices (`weights.z == 0`, the postcondition of an
    /// edge-crossing [`WalkMesh::walk_in_triangle`] result).
    ///
    /// Returns the same surface point expressed in the twin triangle, with
    /// weights recomputed against the twin's vertices to absorb any
    /// floating-point plane mismatch, and the rotation carrying the old
    /// triangle's outward normal onto the new one's. An agent applies that
    /// rotation to its orientation (and to the unconsumed remainder of its
    /// step) so its facing stays fixed relative to the local surface.
    ///
    /// Returns `None` when the edge has no twin triangle: a mesh boundary.
    /// The caller treats the edge as a wall and keeps its walk point
    /// unchanged, with no rotation.
    ///
    /// # Panics
    ///
    /// Panics if `start.weights.z` is not exactly zero.
    pub fn cross_edge(&self, start: &WalkPoint) -> Option<(WalkPoint, Quat)> {
        assert!(
            start.weights.z == 0.0,
            "cross_edge requires a walk point exactly on its first edge"
        );

        // The walk point rests on its triangle's directed edge
        // (indices[0], indices[1]); the twin holds the reversed edge.
        let twin = self.adjacency().twin_triangle(start.indices[0], start.indices[1])?;

        // Same world point, re-expressed against the twin's plane.
        let (a, b, c) = self.triangle_positions(twin);
        let end = WalkPoint::new(twin, barycentric_weights(a, b, c, self.world_point(start)));

        let (a0, b0, c0) = self.triangle_positions(start.indices);
        let old_normal = triangle_normal(a0, b0, c0);
        let new_normal = triangle_normal(a, b, c);
        let rotation = Quat::from_rotation_arc(old_normal, new_normal);

        Some((end, rotation))
    }
}

// =============================================================================
// TESTS
// =============================================================================
