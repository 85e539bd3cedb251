use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Vertex layout shared with `scene.wgsl` (locations 0 and 1).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

// Corners of a regular tetrahedron inscribed in the unit cube, projected onto
// the unit sphere.
const CORNERS: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
];

// Counter-clockwise when seen from outside.
const FACES: [[usize; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];

pub const VERTEX_COUNT: u32 = (FACES.len() * 3) as u32;

pub fn corners(radius: f32) -> [Vec3; 4] {
    CORNERS.map(|c| Vec3::from(c).normalize() * radius)
}

/// Non-indexed, flat-shaded mesh: one normal per face.
pub fn mesh(radius: f32) -> Vec<MeshVertex> {
    let corners = corners(radius);
    let mut out = Vec::with_capacity(VERTEX_COUNT as usize);
    for face in FACES {
        let [a, b, c] = face.map(|i| corners[i]);
        let normal = (b - a).cross(c - a).normalize();
        for p in [a, b, c] {
            out.push(MeshVertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
    }
    out
}
