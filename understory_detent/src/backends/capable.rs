// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend for platforms with custom detents.

use crate::platform::{BASELINE_LARGE, BASELINE_MEDIUM, Capabilities, DetentPlatform};
use crate::types::Keyword;

/// Fraction of the container extent used for `small`.
pub const SMALL_FRACTION: f64 = 0.25;

/// Custom-detent backend.
///
/// `medium` and `large` resolve to the platform's own values, modeled here as
/// fractions of the container extent. The defaults match the baseline system
/// detents. A platform that reports no values of its own uses
/// [`without_system_values`](Self::without_system_values), and the fractions
/// are then ignored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CapablePlatform {
    /// Fraction of the extent for `medium`.
    pub medium_fraction: f64,
    /// Fraction of the extent for `large`.
    pub large_fraction: f64,
    /// Whether the fractions are reported by the platform.
    pub system_values: bool,
}

impl CapablePlatform {
    /// A backend with explicit system fractions.
    pub const fn new(medium_fraction: f64, large_fraction: f64) -> Self {
        Self {
            medium_fraction,
            large_fraction,
            system_values: true,
        }
    }

    /// The same backend, with keyword heights left to the baseline fractions.
    pub const fn without_system_values(mut self) -> Self {
        self.system_values = false;
        self
    }
}

impl Default for CapablePlatform {
    fn default() -> Self {
        Self::new(BASELINE_MEDIUM, BASELINE_LARGE)
    }
}

impl DetentPlatform for CapablePlatform {
    fn capabilities(&self) -> Capabilities {
        if self.system_values {
            Capabilities::CUSTOM_DETENTS | Capabilities::SYSTEM_DETENT_VALUES
        } else {
            Capabilities::CUSTOM_DETENTS
        }
    }

    fn system_value(&self, keyword: Keyword, extent: f64) -> f64 {
        match keyword {
            Keyword::Small => SMALL_FRACTION * extent,
            Keyword::Medium => self.medium_fraction * extent,
            Keyword::Large => self.large_fraction * extent,
        }
    }
}
