//! Shared Types Module
//!
//! Contains the vertex type, mesh structure, and the procedural mesh
//! generators for the two entity shapes the game draws.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

// ============================================================================
// GPU VERTEX TYPES
// ============================================================================

/// Vertex for entity meshes
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

// ============================================================================
// MESH STRUCTURE
// ============================================================================

/// A mesh with vertices and indices
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn merge(&mut self, other: &Mesh) {
        let base_idx = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base_idx));
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MESH GENERATION PRIMITIVES
// ============================================================================

/// Generate an axis-aligned box mesh centered at the origin of its local frame
pub fn generate_box(center: Vec3, half_extents: Vec3, color: [f32; 4]) -> Mesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);

    let corners = [
        Vec3::new(-hx, -hy, -hz),
        Vec3::new(hx, -hy, -hz),
        Vec3::new(hx, hy, -hz),
        Vec3::new(-hx, hy, -hz),
        Vec3::new(-hx, -hy, hz),
        Vec3::new(hx, -hy, hz),
        Vec3::new(hx, hy, hz),
        Vec3::new(-hx, hy, hz),
    ];

    let faces = [
        ([0, 1, 2, 3], Vec3::new(0.0, 0.0, -1.0)),
        ([5, 4, 7, 6], Vec3::new(0.0, 0.0, 1.0)),
        ([4, 0, 3, 7], Vec3::new(-1.0, 0.0, 0.0)),
        ([1, 5, 6, 2], Vec3::new(1.0, 0.0, 0.0)),
        ([3, 2, 6, 7], Vec3::new(0.0, 1.0, 0.0)),
        ([4, 5, 1, 0], Vec3::new(0.0, -1.0, 0.0)),
    ];

    for (face_indices, normal) in &faces {
        let base = vertices.len() as u32;
        for &i in face_indices {
            let pos = center + corners[i];
            vertices.push(Vertex {
                position: [pos.x, pos.y, pos.z],
                normal: [normal.x, normal.y, normal.z],
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh { vertices, indices }
}

/// Generate a sphere mesh for projectiles
pub fn generate_sphere(center: Vec3, radius: f32, color: [f32; 4], segments: u32) -> Mesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for lat in 0..=segments {
        let theta = (lat as f32) * std::f32::consts::PI / (segments as f32);
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for lon in 0..=segments {
            let phi = (lon as f32) * 2.0 * std::f32::consts::PI / (segments as f32);
            let sin_phi = phi.sin();
            let cos_phi = phi.cos();

            let x = sin_theta * cos_phi;
            let y = cos_theta;
            let z = sin_theta * sin_phi;

            let pos = center + Vec3::new(x, y, z) * radius;
            vertices.push(Vertex {
                position: [pos.x, pos.y, pos.z],
                normal: [x, y, z],
                color,
            });
        }
    }

    for lat in 0..segments {
        for lon in 0..segments {
            let first = lat * (segments + 1) + lon;
            let second = first + segments + 1;

            indices.push(first);
            indices.push(second);
            indices.push(first + 1);

            indices.push(second);
            indices.push(second + 1);
            indices.push(first + 1);
        }
    }

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size_matches_pipeline_stride() {
        assert_eq!(std::mem::size_of::<Vertex>(), 40);
    }

    #[test]
    fn test_box_has_24_vertices_36_indices() {
        let mesh = generate_box(Vec3::ZERO, Vec3::splat(1.0), [1.0; 4]);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn test_box_vertices_within_half_extents() {
        let half = Vec3::new(1.5, 1.5, 1.5);
        let mesh = generate_box(Vec3::ZERO, half, [1.0; 4]);
        for v in &mesh.vertices {
            assert!(v.position[0].abs() <= half.x + 1e-6);
            assert!(v.position[1].abs() <= half.y + 1e-6);
            assert!(v.position[2].abs() <= half.z + 1e-6);
        }
    }

    #[test]
    fn test_sphere_vertices_on_radius() {
        let mesh = generate_sphere(Vec3::ZERO, 0.5, [1.0; 4], 8);
        for v in &mesh.vertices {
            let len = Vec3::from(v.position).length();
            assert!((len - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_mesh_merge_offsets_indices() {
        let mut mesh = generate_box(Vec3::ZERO, Vec3::ONE, [1.0; 4]);
        let base_vertices = mesh.vertices.len() as u32;
        let other = generate_box(Vec3::ONE, Vec3::ONE, [1.0; 4]);
        mesh.merge(&other);
        assert_eq!(mesh.vertices.len() as u32, base_vertices * 2);
        // Indices of the merged half point past the original vertices.
        assert!(mesh.indices[36..].iter().all(|&i| i >= base_vertices));
    }
}
