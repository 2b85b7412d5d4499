//! # Configuration Constants
//!
//! Centralized constants for the walkmesh pipeline. Floating-point
//! comparison tolerances used by the core and io crates are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//!
//! Note that the walking core itself compares barycentric weights exactly
//! (a weight of zero means "on the edge", not "near the edge"); the
//! tolerances below are for reconstructed world-space quantities and for
//! test assertions, where accumulated floating-point error is expected.

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for comparing barycentric weights and weight sums.
///
/// Barycentric weights are recomputed from world positions when crossing
/// between triangles, so two representations of the same surface point can
/// differ by accumulated floating-point error. Weight comparisons that must
/// tolerate that error use this value.
///
/// # Example
///
/// ```rust
/// use config::constants::WEIGHT_EPSILON;
///
/// fn weights_sum_to_one(weights: [f32; 3]) -> bool {
///     let sum: f32 = weights.iter().sum();
///     (sum - 1.0).abs() < WEIGHT_EPSILON
/// }
///
/// assert!(weights_sum_to_one([0.2, 0.3, 0.5]));
/// ```
pub const WEIGHT_EPSILON: f32 = 1e-5;

/// Epsilon for comparing reconstructed world-space positions.
///
/// Larger than [`WEIGHT_EPSILON`] because a world position is a weighted
/// sum of vertex positions, which scales the weight error by the mesh's
/// coordinate magnitudes.
///
/// # Example
///
/// ```rust
/// use config::constants::DISTANCE_EPSILON;
///
/// fn positions_match(a: [f32; 3], b: [f32; 3]) -> bool {
///     let d2: f32 = a.iter().zip(&b).map(|(x, y)| (x - y) * (x - y)).sum();
///     d2.sqrt() < DISTANCE_EPSILON
/// }
///
/// assert!(positions_match([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]));
/// ```
pub const DISTANCE_EPSILON: f32 = 1e-4;
