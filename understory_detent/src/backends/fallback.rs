// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Degraded backend for platforms without custom detents.

use crate::platform::{Capabilities, DetentPlatform};
use crate::types::Keyword;

/// Backend where only the system `medium` and `large` detents exist.
///
/// `small` and every non-keyword size land on the medium detent (half the
/// extent); `large` is the full extent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FallbackPlatform;

impl DetentPlatform for FallbackPlatform {
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }

    fn system_value(&self, keyword: Keyword, extent: f64) -> f64 {
        match keyword {
            Keyword::Large => extent,
            Keyword::Small | Keyword::Medium => extent / 2.0,
        }
    }
}
