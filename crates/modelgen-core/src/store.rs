//! Key-value scratch store used to hand placements from the submit handler to
//! the viewport.
//!
//! Each placement column is stored under its own key as a JSON array of
//! 3-element numeric arrays. Reads are forgiving: anything missing or
//! malformed produces an empty list.

use crate::constants::{POSITIONS_KEY, ROTATIONS_KEY};
use crate::placement::PlacementList;
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("scratch store has no entry for `{0}`")]
    Missing(&'static str),
    #[error("scratch store entry `{key}` is not a list of 3-vectors: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode `{key}`: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("scratch store rejected write to `{key}`: {reason}")]
    Write { key: String, reason: String },
}

pub trait ScratchStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str);

    fn clear_placements(&mut self) {
        self.remove(POSITIONS_KEY);
        self.remove(ROTATIONS_KEY);
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScratchStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl<S: ScratchStore + ?Sized> ScratchStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}

pub fn write_placements<S: ScratchStore + ?Sized>(
    store: &mut S,
    list: &PlacementList,
) -> Result<(), StoreError> {
    let positions = serde_json::to_string(&list.positions()).map_err(|source| StoreError::Encode {
        key: POSITIONS_KEY,
        source,
    })?;
    let rotations = serde_json::to_string(&list.rotations()).map_err(|source| StoreError::Encode {
        key: ROTATIONS_KEY,
        source,
    })?;
    store.set(POSITIONS_KEY, &positions)?;
    store.set(ROTATIONS_KEY, &rotations)?;
    log::debug!("[store] wrote {} placements", list.len());
    Ok(())
}

fn read_column<S: ScratchStore + ?Sized>(
    store: &S,
    key: &'static str,
) -> Result<Vec<[f32; 3]>, StoreError> {
    let raw = store.get(key).ok_or(StoreError::Missing(key))?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Malformed { key, source })
}

pub fn try_read_placements<S: ScratchStore + ?Sized>(
    store: &S,
) -> Result<PlacementList, StoreError> {
    let positions = read_column(store, POSITIONS_KEY)?;
    // Rotations are optional; an unset rotation is the identity orientation.
    let rotations = match read_column(store, ROTATIONS_KEY) {
        Err(StoreError::Missing(_)) => Vec::new(),
        other => other?,
    };
    Ok(PlacementList::from_parts(&positions, &rotations))
}

/// Recoverable read: failures are logged and yield an empty list.
pub fn read_placements<S: ScratchStore + ?Sized>(store: &S) -> PlacementList {
    match try_read_placements(store) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[store] {}; rendering an empty scene", e);
            PlacementList::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_positions_is_reported() {
        let store = MemoryStore::new();
        assert!(matches!(
            try_read_placements(&store),
            Err(StoreError::Missing(POSITIONS_KEY))
        ));
    }

    #[test]
    fn javascript_style_integers_parse() {
        let mut store = MemoryStore::new();
        store.set(POSITIONS_KEY, "[[0,0,0],[1,2,3]]").unwrap();
        store.set(ROTATIONS_KEY, "[[0,0,0],[0,1.5708,0]]").unwrap();
        let list = try_read_placements(&store).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[1].position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn malformed_rotations_are_reported() {
        let mut store = MemoryStore::new();
        store.set(POSITIONS_KEY, "[[0,0,0]]").unwrap();
        store.set(ROTATIONS_KEY, "{\"y\": 1}").unwrap();
        assert!(matches!(
            try_read_placements(&store),
            Err(StoreError::Malformed { key: ROTATIONS_KEY, .. })
        ));
    }
}
