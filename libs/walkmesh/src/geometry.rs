//! # Barycentric Geometry
//!
//! Pure geometric helpers shared by mesh validation and the walking
//! operations: plane projection into barycentric weights, and winding-order
//! triangle normals.
//!
//! ## Conventions
//!
//! A triangle `(a, b, c)` is wound so that its outward normal is
//! `cross(b - a, c - a)`. Barycentric weights `(u, v, w)` are stored per
//! vertex in the same order and always sum to 1; they are *not* clamped to
//! the triangle, so a projection outside the triangle yields negative
//! weights.

use glam::Vec3;

/// Projects `pt` onto the plane of triangle `(a, b, c)` and returns the
/// barycentric weights of the projected point.
///
/// Solves the 2D linear system against the basis vectors `b - a` and
/// `c - a` via Cramer's rule. No bounds checking is performed: weights may
/// be negative or exceed 1 when the projection falls outside the triangle.
///
/// Degenerate (zero-area) triangles divide by zero. Non-degeneracy is a
/// caller precondition, not defended against here.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use walkmesh::geometry::barycentric_weights;
///
/// let a = Vec3::new(0.0, 0.0, 0.0);
/// let b = Vec3::new(1.0, 0.0, 0.0);
/// let c = Vec3::new(0.0, 1.0, 0.0);
///
/// // The first vertex carries full weight for itself.
/// let at_a = barycentric_weights(a, b, c, a);
/// assert!((at_a - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
/// ```
pub fn barycentric_weights(a: Vec3, b: Vec3, c: Vec3, pt: Vec3) -> Vec3 {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = pt - a;

    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);

    let denom = d00 * d11 - d01 * d01;
    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    let u = 1.0 - v - w;

    Vec3::new(u, v, w)
}

/// Computes the outward unit normal of triangle `(a, b, c)`.
///
/// Returns the normalized cross product of edges `(b - a)` and `(c - a)`,
/// so the direction follows the triangle's winding order.
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize()
}

// =============================================================================
// TESTS
// =============================================================================
