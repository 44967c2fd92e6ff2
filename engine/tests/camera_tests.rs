//! Camera Tests - Orientation, Basis Vectors, and Movement
//!
//! Integration tests for the fly camera: spherical direction derivation,
//! look handling, delta-time-scaled movement, and matrix construction.

use glam::{Mat4, Vec3};
use shooter_engine::camera::FlyCamera;
use shooter_engine::camera::fly_controller::{ASPECT_RATIO, MOUSE_SPEED, MOVE_SPEED};
use shooter_engine::input::MovementKeys;

const EPSILON: f32 = 1e-4;

// ============================================================================
// Orientation
// ============================================================================

#[test]
fn test_initial_orientation_looks_into_the_arena() {
    let camera = FlyCamera::new();
    let forward = camera.forward();
    // The start pose aims up and to the side, back toward the origin.
    assert!(forward.x > 0.0);
    assert!(forward.y > 0.0);
    assert!(forward.z > 0.0);
    assert!((forward.length() - 1.0).abs() < EPSILON);
}

#[test]
fn test_look_sensitivity_is_005_radians_per_pixel() {
    let mut camera = FlyCamera::new();
    let yaw_before = camera.yaw;
    camera.apply_look(1.0, 0.0);
    assert!((yaw_before - camera.yaw - MOUSE_SPEED).abs() < EPSILON);
}

#[test]
fn test_look_accumulates_over_frames() {
    let mut a = FlyCamera::new();
    let mut b = FlyCamera::new();
    // One big delta vs. the same motion split across frames.
    a.apply_look(10.0, 6.0);
    for _ in 0..5 {
        b.apply_look(2.0, 1.2);
    }
    assert!((a.yaw - b.yaw).abs() < EPSILON);
    assert!((a.pitch - b.pitch).abs() < EPSILON);
}

#[test]
fn test_pitch_is_unrestricted() {
    let mut camera = FlyCamera::new();
    camera.apply_look(0.0, -1000.0);
    // 1000 px at 0.05 rad/px pushes pitch far past a right angle.
    assert!(camera.pitch > std::f32::consts::PI);
}

// ============================================================================
// Basis vectors
// ============================================================================

#[test]
fn test_basis_is_orthonormal_everywhere() {
    let mut camera = FlyCamera::new();
    for (dx, dy) in [(0.0, 0.0), (3.0, -2.0), (17.0, 5.0), (-8.0, 11.0)] {
        camera.apply_look(dx, dy);
        let forward = camera.forward();
        let side = camera.side();
        let up = camera.up();
        assert!((forward.length() - 1.0).abs() < EPSILON);
        assert!((side.length() - 1.0).abs() < EPSILON);
        assert!(up.dot(forward).abs() < EPSILON);
        assert!(up.dot(side).abs() < EPSILON);
    }
}

#[test]
fn test_side_stays_horizontal_under_pitch() {
    let mut camera = FlyCamera::new();
    camera.apply_look(0.0, -40.0);
    assert_eq!(camera.side().y, 0.0);
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn test_forward_speed_is_five_units_per_second() {
    let mut camera = FlyCamera::new();
    let start = camera.position;
    let keys = MovementKeys {
        forward: true,
        ..Default::default()
    };
    camera.apply_movement(&keys, 1.0);
    assert!(((camera.position - start).length() - MOVE_SPEED).abs() < EPSILON);
}

#[test]
fn test_movement_follows_current_facing() {
    let mut camera = FlyCamera::new();
    camera.yaw = 0.0;
    camera.pitch = 0.0;
    camera.position = Vec3::ZERO;
    camera.apply_look(-(std::f32::consts::FRAC_PI_2 / 0.05), 0.0); // yaw += pi/2
    let keys = MovementKeys {
        forward: true,
        ..Default::default()
    };
    camera.apply_movement(&keys, 1.0);
    // Facing +X after the quarter turn.
    assert!((camera.position - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-2);
}

#[test]
fn test_strafe_ignores_pitch() {
    let mut camera = FlyCamera::new();
    camera.position = Vec3::ZERO;
    camera.yaw = 0.0;
    camera.pitch = 1.0;
    let keys = MovementKeys {
        left: true,
        ..Default::default()
    };
    camera.apply_movement(&keys, 1.0);
    assert!(camera.position.y.abs() < EPSILON);
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn test_view_projection_composes() {
    let camera = FlyCamera::new();
    let view_proj = camera.projection_matrix() * camera.view_matrix();
    assert_ne!(view_proj, Mat4::IDENTITY);
    // A point straight ahead of the camera projects to the screen center.
    let ahead = camera.position + camera.forward() * 10.0;
    let clip = view_proj * ahead.extend(1.0);
    assert!((clip.x / clip.w).abs() < 1e-3);
    assert!((clip.y / clip.w).abs() < 1e-3);
}

#[test]
fn test_projection_aspect_is_fixed_four_thirds() {
    let camera = FlyCamera::new();
    let proj = camera.projection_matrix();
    assert!((proj.y_axis.y / proj.x_axis.x - ASPECT_RATIO).abs() < EPSILON);
}

#[test]
fn test_near_and_far_planes_clip() {
    let camera = FlyCamera::new();
    let view_proj = camera.projection_matrix() * camera.view_matrix();
    // Inside the range: w-positive, depth within [0, 1].
    let mid = camera.position + camera.forward() * 50.0;
    let clip = view_proj * mid.extend(1.0);
    let depth = clip.z / clip.w;
    assert!(depth >= 0.0 && depth <= 1.0);
    // Beyond the far plane the depth leaves the range.
    let beyond = camera.position + camera.forward() * 150.0;
    let clip = view_proj * beyond.extend(1.0);
    assert!(clip.z / clip.w > 1.0);
}
