// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size registry: identifier ↔ index ↔ resolved value.
//!
//! The registry is rebuilt wholesale from every resolution pass. Nothing from a
//! previous pass survives a [`SizeRegistry::register`] call, so identifiers
//! that are no longer part of the size list stop resolving immediately.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::types::{DetentId, ResolvedSize};

/// Lookup table for the sizes produced by the last resolution pass.
#[derive(Clone, Debug, Default)]
pub struct SizeRegistry {
    sizes: Vec<ResolvedSize>,
    by_id: BTreeMap<DetentId, usize>,
}

impl SizeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every entry with `resolved`, returning what changed.
    ///
    /// When two entries share an identifier, identifier lookup finds the later
    /// one; both remain reachable by index.
    pub fn register(&mut self, mut resolved: Vec<ResolvedSize>) -> Damage {
        resolved.sort_by_key(|s| s.index);

        let mut by_id = BTreeMap::new();
        for (pos, size) in resolved.iter().enumerate() {
            by_id.insert(size.id.clone(), pos);
        }

        let mut dmg = Damage::default();
        for (id, &pos) in &by_id {
            let new = &resolved[pos];
            match self.lookup(id.as_str()) {
                None => dmg.added.push(id.clone()),
                Some(old) if old != new => dmg.changed.push((old.clone(), new.clone())),
                Some(_) => {}
            }
        }
        for id in self.by_id.keys() {
            if !by_id.contains_key(id) {
                dmg.removed.push(id.clone());
            }
        }

        self.sizes = resolved;
        self.by_id = by_id;
        dmg
    }

    /// Find the size bound to `id`.
    pub fn lookup(&self, id: &str) -> Option<&ResolvedSize> {
        self.by_id.get(id).map(|&pos| &self.sizes[pos])
    }

    /// Find the size at list position `index`.
    pub fn by_index(&self, index: usize) -> Option<&ResolvedSize> {
        self.sizes
            .binary_search_by_key(&index, |s| s.index)
            .ok()
            .map(|pos| &self.sizes[pos])
    }

    /// Clamp `index` to the registered range. `None` when the registry is empty.
    pub fn clamp_index(&self, index: usize) -> Option<usize> {
        let last = self.sizes.last()?;
        Some(index.min(last.index))
    }

    /// Number of registered sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The largest index.
    pub fn last(&self) -> Option<&ResolvedSize> {
        self.sizes.last()
    }

    /// Sizes in index order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedSize> + '_ {
        self.sizes.iter()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.sizes.clear();
        self.by_id.clear();
    }
}

/// Difference between two consecutive [`SizeRegistry::register`] calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// Identifiers that were not registered before.
    pub added: Vec<DetentId>,
    /// Identifiers that are gone.
    pub removed: Vec<DetentId>,
    /// Entries whose index or value moved: (old, new).
    pub changed: Vec<(ResolvedSize, ResolvedSize)>,
}

impl Damage {
    /// True if the registry is unchanged.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
