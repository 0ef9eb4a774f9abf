// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide map from sheet names to handles.
//!
//! ## Lifecycle
//!
//! [`Sheets`](crate::sheets::Sheets) registers a sheet's name on mount and on
//! every options update. The last registration for a name wins. Entries are not
//! removed on unmount: a name keeps pointing at its last handle, and addressing
//! it after the sheet is gone fails as an unknown handle. Hosts that reuse
//! names across short-lived sheets can call [`unregister`] explicitly.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::SheetError;
use crate::types::SheetHandle;

/// Name → handle map with last-writer-wins semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameRegistry {
    handles: BTreeMap<String, SheetHandle>,
}

impl NameRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            handles: BTreeMap::new(),
        }
    }

    /// Point `name` at `handle`, returning the handle it replaced.
    pub fn register(&mut self, name: &str, handle: SheetHandle) -> Option<SheetHandle> {
        self.handles.insert(name.to_owned(), handle)
    }

    /// Look up the handle for `name`.
    pub fn resolve(&self, name: &str) -> Result<SheetHandle, SheetError> {
        self.handles
            .get(name)
            .copied()
            .ok_or_else(|| SheetError::UnresolvedReference {
                name: name.to_owned(),
            })
    }

    /// Remove `name` if it still points at `handle`.
    pub fn unregister(&mut self, name: &str, handle: SheetHandle) -> bool {
        if self.handles.get(name) == Some(&handle) {
            self.handles.remove(name);
            true
        } else {
            false
        }
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// True if no names are registered.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

static GLOBAL: Mutex<NameRegistry> = Mutex::new(NameRegistry::new());

fn global() -> MutexGuard<'static, NameRegistry> {
    // Poisoning is ignored: every operation leaves the map consistent.
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Register `name` → `handle` in the process-wide registry.
pub fn register(name: &str, handle: SheetHandle) -> Option<SheetHandle> {
    global().register(name, handle)
}

/// Resolve `name` through the process-wide registry.
pub fn resolve(name: &str) -> Result<SheetHandle, SheetError> {
    global().resolve(name)
}

/// Remove `name` from the process-wide registry if it still points at `handle`.
pub fn unregister(name: &str, handle: SheetHandle) -> bool {
    global().unregister(name, handle)
}
