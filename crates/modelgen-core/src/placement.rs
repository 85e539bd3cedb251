//! Where each primitive of a generated model sits and how it is oriented.

use std::f32::consts::FRAC_PI_2;

/// A (position, Euler rotation) pair. Rotation is in radians, XYZ order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

impl Placement {
    pub const fn new(position: [f32; 3], rotation: [f32; 3]) -> Self {
        Self { position, rotation }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementList {
    items: Vec<Placement>,
}

impl PlacementList {
    pub fn new(items: Vec<Placement>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Pair stored positions with stored rotations.
    ///
    /// The list follows `positions`: a missing rotation becomes the zero
    /// rotation and surplus rotations are dropped.
    pub fn from_parts(positions: &[[f32; 3]], rotations: &[[f32; 3]]) -> Self {
        if positions.len() != rotations.len() {
            log::warn!(
                "[placement] length mismatch positions={} rotations={}",
                positions.len(),
                rotations.len()
            );
        }
        let items = positions
            .iter()
            .enumerate()
            .map(|(i, p)| Placement::new(*p, rotations.get(i).copied().unwrap_or_default()))
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Placement] {
        &self.items
    }

    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.items.iter().map(|p| p.position).collect()
    }

    pub fn rotations(&self) -> Vec<[f32; 3]> {
        self.items.iter().map(|p| p.rotation).collect()
    }
}

impl<'a> IntoIterator for &'a PlacementList {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The two fixed placements every generation produces: two tetrahedra at the
/// origin, the second turned a quarter turn about Y.
pub const FIXED_PLACEMENTS: [Placement; 2] = [
    Placement::new([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
    Placement::new([0.0, 0.0, 0.0], [0.0, FRAC_PI_2, 0.0]),
];

/// Stand-in generator. The prompt does not influence the result.
pub fn generate_placements(prompt: &str) -> PlacementList {
    log::debug!("[placement] generating for prompt of {} chars", prompt.chars().count());
    PlacementList::new(FIXED_PLACEMENTS.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rotations_default_to_zero() {
        let list =
            PlacementList::from_parts(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]], &[[0.5, 0.0, 0.0]]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0].rotation, [0.5, 0.0, 0.0]);
        assert_eq!(list.as_slice()[1].rotation, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn surplus_rotations_are_ignored() {
        let list = PlacementList::from_parts(&[[1.0, 0.0, 0.0]], &[[0.0; 3], [1.0, 1.0, 1.0]]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn prompt_does_not_change_output() {
        assert_eq!(generate_placements(""), generate_placements("a green crystal"));
    }
}
