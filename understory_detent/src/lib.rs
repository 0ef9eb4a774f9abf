// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_detent --heading-base-level=0

//! Understory Detent: size resolution for bottom sheets.
//!
//! A sheet rests at one of up to three detents. Hosts describe them with a
//! dynamically typed list (`[240, "50%", "large"]`); this crate turns that list
//! into concrete pixel heights for the current container and keeps a stable
//! identifier for each entry so drag callbacks can be mapped back to a size.
//!
//! - [`parse`] and [`rules`] convert raw entries into [`SizeSpec`] rules. Parsing never fails.
//! - [`resolve_all`] computes heights for a container extent, an optional measured
//!   content height, and an optional cap.
//! - [`SizeRegistry`] stores the last pass and answers identifier and index lookups.
//!
//! Platform differences live behind [`DetentPlatform`]. Two backends are provided:
//! [`CapablePlatform`] (custom detents) and [`FallbackPlatform`] (system medium and
//! large only). Pick one from [`Capabilities`] with [`AnyPlatform::from_capabilities`].
//!
//! # Example
//!
//! ```rust
//! use understory_detent::{AnyPlatform, ResolveInputs, SizeRegistry, resolve_all, rules};
//!
//! let set = rules(&["medium".into(), "large".into()]);
//! let platform = AnyPlatform::default();
//!
//! let mut registry = SizeRegistry::new();
//! let _ = registry.register(resolve_all(&platform, &set.rules, &ResolveInputs::new(800.0)));
//! assert_eq!(registry.lookup("medium").map(|s| s.value), Some(400.0));
//!
//! // Rotation: same identifiers, new values.
//! let damage = registry.register(resolve_all(&platform, &set.rules, &ResolveInputs::new(390.0)));
//! assert_eq!(damage.changed.len(), 2);
//! assert_eq!(registry.lookup("large").map(|s| s.value), Some(390.0));
//! ```
//!
//! ### Float semantics
//!
//! Heights are `f64` pixels already scaled by the host. Negative or `NaN`
//! extents count as zero, and every resolved value lies in `0..=min(extent, cap)`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod backends;
pub mod engine;
pub mod parse;
pub mod platform;
pub mod registry;
pub mod types;

pub use backends::{AnyPlatform, CapablePlatform, FallbackPlatform};
pub use engine::{ResolveInputs, Resolver, resolve_all, resolve_one};
pub use parse::{RuleSet, SizeRule, default_rules, identifier, is_recognized, parse, rules};
pub use platform::{BASELINE_LARGE, BASELINE_MEDIUM, Capabilities, DetentPlatform};
pub use registry::{Damage, SizeRegistry};
pub use types::{DetentId, Keyword, MAX_SIZES, RawSize, ResolvedSize, SizeSpec};
