//! Owned render state for the viewport: the group of primitives and its spin.
//!
//! Built once when the viewport mounts and advanced once per rendered frame by
//! the frame loop. Nothing else mutates it.

use crate::config::DemoConfig;
use crate::placement::{Placement, PlacementList};
use crate::store::{read_placements, ScratchStore};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};
use std::f64::consts::TAU;

/// One opaque tetrahedron in the group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primitive {
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub color: [f32; 3],
}

impl Primitive {
    fn from_placement(p: &Placement, color: [f32; 3]) -> Self {
        Self {
            position: Vec3::from(p.position),
            rotation: Vec3::from(p.rotation),
            color,
        }
    }

    pub fn local_matrix(&self) -> Mat4 {
        let q = Quat::from_rotation_x(self.rotation.x)
            * Quat::from_rotation_y(self.rotation.y)
            * Quat::from_rotation_z(self.rotation.z);
        Mat4::from_rotation_translation(q, self.position)
    }
}

/// Per-instance data uploaded to the GPU (locations 2..=6 in `scene.wgsl`).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

#[derive(Clone, Debug)]
pub struct SceneState {
    primitives: Vec<Primitive>,
    spin_per_frame: f32,
    // Group angle is `frames * spin_per_frame`, never accumulated.
    frames: u64,
}

impl SceneState {
    pub fn mount(placements: &PlacementList, config: &DemoConfig) -> Self {
        let primitives = placements
            .iter()
            .map(|p| Primitive::from_placement(p, config.color))
            .collect::<Vec<_>>();
        log::info!("[scene] mounted {} primitives", primitives.len());
        Self {
            primitives,
            spin_per_frame: config.spin_per_frame,
            frames: 0,
        }
    }

    /// Read placements back from the scratch store. Missing or malformed
    /// entries give an empty scene.
    pub fn from_store<S: ScratchStore + ?Sized>(store: &S, config: &DemoConfig) -> Self {
        Self::mount(&read_placements(store), config)
    }

    /// Advance one rendered frame. Only the group turns.
    pub fn tick(&mut self) {
        self.frames += 1;
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Unwrapped group angle in radians: `frames * spin_per_frame`.
    pub fn group_rotation_y(&self) -> f64 {
        self.frames as f64 * f64::from(self.spin_per_frame)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.group_rotation_y().rem_euclid(TAU) as f32)
    }

    pub fn model_matrix(&self, index: usize) -> Option<Mat4> {
        self.primitives
            .get(index)
            .map(|p| self.group_matrix() * p.local_matrix())
    }

    pub fn instances(&self) -> Vec<SceneInstance> {
        let group = self.group_matrix();
        self.primitives
            .iter()
            .map(|p| SceneInstance {
                model: (group * p.local_matrix()).to_cols_array_2d(),
                color: [p.color[0], p.color[1], p.color[2], 1.0],
            })
            .collect()
    }
}
