//! Sphere collision primitives
//!
//! Distance-based sphere-sphere contact tests. No external physics
//! dependencies - two centers and two radii are all the simulation needs.

use glam::Vec3;

/// Euclidean distance between two sphere centers.
#[inline]
pub fn sphere_distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// Test whether two spheres are in contact.
///
/// Boundary-inclusive: spheres exactly touching (center distance equal to
/// the sum of the radii) count as a contact.
///
/// # Arguments
///
/// * `a_center`, `a_radius` - First sphere
/// * `b_center`, `b_radius` - Second sphere
#[inline]
pub fn sphere_contact(a_center: Vec3, a_radius: f32, b_center: Vec3, b_radius: f32) -> bool {
    sphere_distance(a_center, b_center) <= a_radius + b_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_spheres_touch() {
        let a = Vec3::ZERO;
        let b = Vec3::new(0.0, 0.0, 1.9);
        assert!(sphere_contact(a, 0.5, b, 1.5));
    }

    #[test]
    fn test_separated_spheres_do_not_touch() {
        let a = Vec3::ZERO;
        let b = Vec3::new(0.0, 0.0, 2.1);
        assert!(!sphere_contact(a, 0.5, b, 1.5));
    }

    #[test]
    fn test_exact_boundary_counts_as_contact() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 0.0, 0.0);
        assert!(sphere_contact(a, 0.5, b, 1.5));
    }

    #[test]
    fn test_contact_is_symmetric() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(2.0, 2.5, 3.0);
        assert_eq!(
            sphere_contact(a, 0.5, b, 1.5),
            sphere_contact(b, 1.5, a, 0.5)
        );
    }

    #[test]
    fn test_distance_matches_glam() {
        let a = Vec3::new(0.0, 3.0, 0.0);
        let b = Vec3::new(4.0, 0.0, 0.0);
        assert!((sphere_distance(a, b) - 5.0).abs() < 1e-6);
    }
}
