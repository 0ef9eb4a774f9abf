// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform detent primitive used by the [`engine`](crate::engine).

use bitflags::bitflags;

use crate::types::Keyword;

bitflags! {
    /// What the presenting platform can do with detents.
    ///
    /// Resolve this once at startup and pick a backend with
    /// [`AnyPlatform::from_capabilities`](crate::backends::AnyPlatform::from_capabilities).
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Arbitrary heights are honored (absolute, percent, auto, and `small`).
        const CUSTOM_DETENTS = 1 << 0;
        /// The platform reports its own resolved values for `medium` and `large`.
        ///
        /// Without it those keywords use [`BASELINE_MEDIUM`] and [`BASELINE_LARGE`].
        const SYSTEM_DETENT_VALUES = 1 << 1;
    }
}

/// Fraction of the extent for `medium` when the platform reports no value.
pub const BASELINE_MEDIUM: f64 = 0.5;

/// Fraction of the extent for `large` when the platform reports no value.
pub const BASELINE_LARGE: f64 = 1.0;

/// Detent backend abstraction used by [`resolve_all`](crate::engine::resolve_all).
pub trait DetentPlatform {
    /// Capabilities of this backend.
    fn capabilities(&self) -> Capabilities;

    /// Height of a keyword detent for a container of the given extent, before capping.
    fn system_value(&self, keyword: Keyword, extent: f64) -> f64;

    /// Whether non-keyword sizes get their own height.
    ///
    /// When false the engine resolves them as the medium detent.
    fn supports_custom(&self) -> bool {
        self.capabilities().contains(Capabilities::CUSTOM_DETENTS)
    }

    /// Height of a keyword detent as used by the engine.
    ///
    /// `medium` and `large` come from [`system_value`](Self::system_value) only
    /// when [`Capabilities::SYSTEM_DETENT_VALUES`] is set.
    fn keyword_value(&self, keyword: Keyword, extent: f64) -> f64 {
        let reported = self
            .capabilities()
            .contains(Capabilities::SYSTEM_DETENT_VALUES);
        match keyword {
            Keyword::Medium if !reported => BASELINE_MEDIUM * extent,
            Keyword::Large if !reported => BASELINE_LARGE * extent,
            _ => self.system_value(keyword, extent),
        }
    }
}

impl<P: DetentPlatform + ?Sized> DetentPlatform for &P {
    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn system_value(&self, keyword: Keyword, extent: f64) -> f64 {
        (**self).system_value(keyword, extent)
    }
}
