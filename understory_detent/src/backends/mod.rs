// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform backends.
//!
//! - `capable`: custom detents and platform-resolved keyword values.
//! - `fallback`: only the system medium and large detents exist.
//!
//! [`AnyPlatform`] picks one from a [`Capabilities`] value so the choice is made
//! once, not at every resolution.

pub mod capable;
pub mod fallback;

use crate::platform::{Capabilities, DetentPlatform};
use crate::types::Keyword;

pub use capable::CapablePlatform;
pub use fallback::FallbackPlatform;

/// Either backend, selected by capability.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnyPlatform {
    /// Custom detents available.
    Capable(CapablePlatform),
    /// Medium and large only.
    Fallback(FallbackPlatform),
}

impl AnyPlatform {
    /// Select a backend for the given capabilities.
    ///
    /// The returned backend reports exactly the supported subset of `caps`.
    pub fn from_capabilities(caps: Capabilities) -> Self {
        if !caps.contains(Capabilities::CUSTOM_DETENTS) {
            return Self::Fallback(FallbackPlatform);
        }
        let platform = CapablePlatform::default();
        if caps.contains(Capabilities::SYSTEM_DETENT_VALUES) {
            Self::Capable(platform)
        } else {
            Self::Capable(platform.without_system_values())
        }
    }
}

impl Default for AnyPlatform {
    fn default() -> Self {
        Self::Capable(CapablePlatform::default())
    }
}

impl DetentPlatform for AnyPlatform {
    fn capabilities(&self) -> Capabilities {
        match self {
            Self::Capable(p) => p.capabilities(),
            Self::Fallback(p) => p.capabilities(),
        }
    }

    fn system_value(&self, keyword: Keyword, extent: f64) -> f64 {
        match self {
            Self::Capable(p) => p.system_value(keyword, extent),
            Self::Fallback(p) => p.system_value(keyword, extent),
        }
    }
}
