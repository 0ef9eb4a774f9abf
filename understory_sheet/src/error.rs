// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy.
//!
//! Nothing here crosses into the host application: the fire-and-forget entry
//! points log these and degrade to a no-op. The `try_*` variants return them
//! for callers that want to react.

use thiserror::Error;

use crate::types::SheetHandle;

/// Why a sheet operation had no effect.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SheetError {
    /// No sheet is registered under this name.
    #[error("could not get a sheet handle for {name:?}; check the name prop")]
    UnresolvedReference {
        /// Name that was looked up.
        name: String,
    },
    /// The handle does not belong to a mounted sheet.
    #[error("no sheet is mounted for handle {0}")]
    UnknownHandle(SheetHandle),
    /// The sheet has no resolved sizes because no container size was reported yet.
    #[error("sheet has no resolved sizes yet; report a container size first")]
    NotLaidOut,
    /// A size index outside the registered range.
    #[error("size index {requested} is out of range for {len} sizes")]
    OutOfRangeIndex {
        /// Index that was asked for.
        requested: usize,
        /// Number of registered sizes.
        len: usize,
    },
    /// A detent identifier that is not in the registry.
    #[error("detent {0:?} is not registered")]
    UnknownIdentifier(String),
}
