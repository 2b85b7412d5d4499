//! Integration tests driving an agent across the walkmesh the way a
//! navigation driver does: walk within a triangle, cross the reached edge,
//! feed the unconsumed remainder of the step back in, and stop at walls.

use approx::assert_abs_diff_eq;
use config::constants::{DISTANCE_EPSILON, WEIGHT_EPSILON};
use glam::Vec3;
use walkmesh::geometry::triangle_normal;
use walkmesh::{WalkMesh, WalkPoint};

/// Moves an agent along `step`, crossing edges until the step is consumed
/// or a boundary edge blocks it.
///
/// Returns the final walk point, whether a wall stopped the agent, and the
/// total surface distance walked.
fn drive(mesh: &WalkMesh, mut at: WalkPoint, step: Vec3) -> (WalkPoint, bool, f32) {
    let mut remain = step;
    let mut walked = 0.0;
    loop {
        let (end, time) = mesh.walk_in_triangle(&at, remain);
        walked += remain.length() * time;
        at = end;
        if time >= 1.0 {
            return (at, false, walked);
        }
        remain *= 1.0 - time;
        match mesh.cross_edge(&at) {
            Some((next, rotation)) => {
                at = next;
                // Keep the remainder fixed relative to the new surface.
                remain = rotation * remain;
            }
            None => return (at, true, walked),
        }
    }
}

/// Two coplanar triangles sharing edge (0, 1).
fn flat_strip() -> WalkMesh {
    WalkMesh::new(
        vec![
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            Vec3::new(0.5, -1.0, 0.0),
        ],
        vec![Vec3::Z; 4],
        vec![[0, 1, 2], [1, 0, 3]],
    )
    .unwrap()
}

/// Two triangles sharing edge (0, 1), the second folded up out of plane.
fn folded_strip() -> WalkMesh {
    WalkMesh::new(
        vec![
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            Vec3::new(0.5, -1.0, 0.5),
        ],
        vec![Vec3::Z; 4],
        vec![[0, 1, 2], [1, 0, 3]],
    )
    .unwrap()
}

#[test]
fn step_consumed_within_one_triangle() {
    let mesh = flat_strip();
    let at = mesh.nearest_walk_point(Vec3::new(0.2, 0.3, 0.0));
    let (end, blocked, walked) = drive(&mesh, at, Vec3::new(0.1, 0.1, 0.0));

    assert!(!blocked);
    assert_abs_diff_eq!(walked, Vec3::new(0.1, 0.1, 0.0).length(), epsilon = WEIGHT_EPSILON);
    assert!(mesh
        .world_point(&end)
        .abs_diff_eq(Vec3::new(0.3, 0.4, 0.0), DISTANCE_EPSILON));
}

#[test]
fn step_crosses_coplanar_edge_and_hits_wall() {
    let mesh = flat_strip();
    let at = mesh.nearest_walk_point(Vec3::new(0.3, 0.25, 0.0));

    // One unit straight down: crosses the shared edge at (0.3, 0), runs
    // through the second triangle, and stops on its boundary edge (0, 3).
    let (end, blocked, walked) = drive(&mesh, at, Vec3::new(0.0, -1.0, 0.0));

    assert!(blocked);
    assert_eq!(end.indices, [0, 3, 1]);
    assert_eq!(end.weights.z, 0.0);
    assert!(mesh
        .world_point(&end)
        .abs_diff_eq(Vec3::new(0.3, -0.6, 0.0), DISTANCE_EPSILON));
    // 0.25 in the first triangle, then 0.8 of the remaining 0.75.
    assert_abs_diff_eq!(walked, 0.85, epsilon = 1e-4);
}

#[test]
fn step_crosses_fold_and_follows_surface() {
    let mesh = folded_strip();
    let at = mesh.nearest_walk_point(Vec3::new(0.3, 0.25, 0.0));

    let (end, blocked, walked) = drive(&mesh, at, Vec3::new(0.0, -0.5, 0.0));

    assert!(!blocked);
    assert_eq!(end.indices, [1, 0, 3]);

    // Walking bends around the fold but consumes the full step length.
    assert_abs_diff_eq!(walked, 0.5, epsilon = 1e-4);

    // Weights describe a point strictly inside the second triangle.
    let sum = end.weights.x + end.weights.y + end.weights.z;
    assert_abs_diff_eq!(sum, 1.0, epsilon = WEIGHT_EPSILON);
    assert!(end.weights.min_element() > 0.0);

    // The end point lies on the folded triangle's plane, a quarter step
    // past the crossing point on the shared edge.
    let world = mesh.world_point(&end);
    let plane_normal = triangle_normal(mesh.position(1), mesh.position(0), mesh.position(3));
    assert_abs_diff_eq!(
        (world - mesh.position(1)).dot(plane_normal),
        0.0,
        epsilon = DISTANCE_EPSILON
    );
    let crossing = Vec3::new(0.3, 0.0, 0.0);
    assert_abs_diff_eq!(world.distance(crossing), 0.25, epsilon = 1e-4);

    // The smooth surface normal interpolates the stored vertex normals.
    assert!(mesh.world_normal(&end).abs_diff_eq(Vec3::Z, WEIGHT_EPSILON));
}

#[test]
fn wall_halts_agent_exactly_on_boundary_edge() {
    let mesh = WalkMesh::new(
        vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        vec![Vec3::Z; 3],
        vec![[0, 1, 2]],
    )
    .unwrap();
    let at = mesh.nearest_walk_point(Vec3::new(0.25, 0.25, 0.0));

    let (end, blocked, walked) = drive(&mesh, at, Vec3::new(0.0, -2.0, 0.0));

    assert!(blocked);
    assert_eq!(end.weights.z, 0.0);
    assert!(walked < 2.0);
    assert!(mesh
        .world_point(&end)
        .abs_diff_eq(Vec3::new(0.25, 0.0, 0.0), DISTANCE_EPSILON));
}
