// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detent resolution.
//!
//! ## Overview
//!
//! [`resolve_all`] maps every rule to a concrete height for one set of
//! [`ResolveInputs`]. It is pure: the same platform, rules, and inputs always
//! produce the same output, so it can be rerun on every layout pass.
//!
//! ## Formulas
//!
//! With `ceiling = min(extent, max_height)`:
//!
//! - keywords: the platform's system value;
//! - `Absolute(v)`: `v`;
//! - `Percent(f)`: `f * extent`;
//! - `Auto`: the content height, or `extent / 2` while it is unknown.
//!
//! Each result is then limited to `ceiling` and floored at zero. Backends
//! without custom detents resolve every non-keyword rule as `medium`.

use alloc::vec::Vec;

use crate::backends::AnyPlatform;
use crate::parse::{RuleSet, SizeRule, default_rules};
use crate::platform::DetentPlatform;
use crate::types::{Keyword, MAX_SIZES, ResolvedSize, SizeSpec};

/// Everything outside the rule list that a resolution pass depends on.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ResolveInputs {
    /// Maximum height available to the sheet.
    pub container_extent: f64,
    /// Measured content height for `auto`, if known.
    pub content_height: Option<f64>,
    /// Global height cap.
    pub max_height: Option<f64>,
}

impl ResolveInputs {
    /// Inputs for a container of the given extent, with no content height or cap.
    pub const fn new(container_extent: f64) -> Self {
        Self {
            container_extent,
            content_height: None,
            max_height: None,
        }
    }

    /// Set the measured content height.
    pub const fn with_content_height(mut self, height: Option<f64>) -> Self {
        self.content_height = height;
        self
    }

    /// Set the height cap.
    pub const fn with_max_height(mut self, cap: Option<f64>) -> Self {
        self.max_height = cap;
        self
    }

    /// The usable extent: negative or `NaN` extents count as zero.
    pub fn extent(&self) -> f64 {
        non_negative(self.container_extent)
    }

    /// Upper bound for every resolved value.
    pub fn ceiling(&self) -> f64 {
        cap(self.extent(), self.max_height)
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}

fn cap(v: f64, max_height: Option<f64>) -> f64 {
    match max_height {
        Some(m) => v.min(m),
        None => v,
    }
}

/// Resolve a single rule.
pub fn resolve_one<P: DetentPlatform + ?Sized>(
    platform: &P,
    spec: SizeSpec,
    inputs: &ResolveInputs,
) -> f64 {
    let extent = inputs.extent();
    let medium = || platform.keyword_value(Keyword::Medium, extent);
    let raw = if platform.supports_custom() {
        match spec {
            SizeSpec::Keyword(kw) => platform.keyword_value(kw, extent),
            SizeSpec::Absolute(v) | SizeSpec::Percent(v) if !v.is_finite() => medium(),
            SizeSpec::Absolute(v) => v,
            SizeSpec::Percent(f) => f * extent,
            SizeSpec::Auto => inputs
                .content_height
                .filter(|h| h.is_finite())
                .unwrap_or(extent / 2.0),
        }
    } else {
        match spec {
            SizeSpec::Keyword(kw) => platform.keyword_value(kw, extent),
            _ => medium(),
        }
    };
    non_negative(raw.min(inputs.ceiling()))
}

/// Resolve every rule for one set of inputs.
///
/// An empty rule list resolves as `[medium, large]`; rules past
/// [`MAX_SIZES`] are ignored.
///
/// ```
/// use understory_detent::{CapablePlatform, ResolveInputs, resolve_all, rules};
///
/// let set = rules(&["30%".into(), "75%".into()]);
/// let inputs = ResolveInputs::new(1000.0).with_max_height(Some(600.0));
/// let resolved = resolve_all(&CapablePlatform::default(), &set.rules, &inputs);
/// let values: Vec<f64> = resolved.iter().map(|r| r.value).collect();
/// assert_eq!(values, [300.0, 600.0]);
/// ```
pub fn resolve_all<P: DetentPlatform + ?Sized>(
    platform: &P,
    rules: &[SizeRule],
    inputs: &ResolveInputs,
) -> Vec<ResolvedSize> {
    let defaults;
    let rules = if rules.is_empty() {
        defaults = default_rules();
        &defaults[..]
    } else {
        &rules[..rules.len().min(MAX_SIZES)]
    };

    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| ResolvedSize {
            index,
            id: rule.id.clone(),
            value: resolve_one(platform, rule.spec, inputs),
        })
        .collect()
}

/// A platform bound to the current rule list.
#[derive(Clone, Debug)]
pub struct Resolver<P: DetentPlatform = AnyPlatform> {
    platform: P,
    rules: Vec<SizeRule>,
}

impl<P: DetentPlatform> Resolver<P> {
    /// Create a resolver with the default `[medium, large]` rules.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            rules: default_rules(),
        }
    }

    /// The backend in use.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Current rules.
    pub fn rules(&self) -> &[SizeRule] {
        &self.rules
    }

    /// Replace the rules with a parsed rule set.
    pub fn set_rules(&mut self, set: RuleSet) {
        self.rules = set.rules;
    }

    /// Resolve the current rules.
    pub fn resolve(&self, inputs: &ResolveInputs) -> Vec<ResolvedSize> {
        resolve_all(&self.platform, &self.rules, inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{CapablePlatform, FallbackPlatform};
    use crate::parse::rules;
    use crate::types::RawSize;

    fn values<P: DetentPlatform>(p: &P, raw: &[RawSize], inputs: ResolveInputs) -> Vec<f64> {
        resolve_all(p, &rules(raw).rules, &inputs)
            .into_iter()
            .map(|r| r.value)
            .collect()
    }

    #[test]
    fn medium_large_on_800() {
        let p = CapablePlatform::default();
        let set = rules(&["medium".into(), "large".into()]);
        let out = resolve_all(&p, &set.rules, &ResolveInputs::new(800.0));
        assert_eq!(out.len(), 2);
        assert_eq!((out[0].index, out[0].id.as_str(), out[0].value), (0, "medium", 400.0));
        assert_eq!((out[1].index, out[1].id.as_str(), out[1].value), (1, "large", 800.0));
    }

    #[test]
    fn percent_is_capped() {
        let p = CapablePlatform::default();
        let inputs = ResolveInputs::new(1000.0).with_max_height(Some(600.0));
        assert_eq!(values(&p, &["30%".into(), "75%".into()], inputs), [300.0, 600.0]);
    }

    #[test]
    fn auto_uses_content_height_or_half() {
        let p = CapablePlatform::default();
        let known = ResolveInputs::new(900.0).with_content_height(Some(220.0));
        assert_eq!(values(&p, &["auto".into()], known), [220.0]);
        assert_eq!(values(&p, &["auto".into()], ResolveInputs::new(900.0)), [450.0]);
        // Content taller than the container is limited to the extent.
        let tall = ResolveInputs::new(900.0).with_content_height(Some(5000.0));
        assert_eq!(values(&p, &["auto".into()], tall), [900.0]);
    }

    #[test]
    fn absolute_limited_by_extent_and_cap() {
        let p = CapablePlatform::default();
        let raw = [RawSize::Number(300.0), RawSize::Number(2000.0), RawSize::Number(-5.0)];
        assert_eq!(values(&p, &raw, ResolveInputs::new(800.0)), [300.0, 800.0, 0.0]);
        let capped = ResolveInputs::new(800.0).with_max_height(Some(250.0));
        assert_eq!(values(&p, &raw, capped), [250.0, 250.0, 0.0]);
    }

    #[test]
    fn non_finite_sizes_resolve_as_medium() {
        let p = CapablePlatform::default();
        let raw = [RawSize::Number(f64::NAN), RawSize::Number(f64::INFINITY)];
        assert_eq!(values(&p, &raw, ResolveInputs::new(800.0)), [400.0, 400.0]);

        let inputs = ResolveInputs::new(800.0);
        assert_eq!(resolve_one(&p, SizeSpec::Absolute(f64::NAN), &inputs), 400.0);
        assert_eq!(resolve_one(&p, SizeSpec::Percent(f64::NAN), &inputs), 400.0);

        let nan_content = ResolveInputs::new(800.0).with_content_height(Some(f64::NAN));
        assert_eq!(values(&p, &["auto".into()], nan_content), [400.0]);
    }

    #[test]
    fn keywords_follow_reported_values() {
        let raw: [RawSize; 2] = ["medium".into(), "large".into()];
        let reported = CapablePlatform::new(0.6, 0.9);
        assert_eq!(values(&reported, &raw, ResolveInputs::new(1000.0)), [600.0, 900.0]);
        let baseline = reported.without_system_values();
        assert_eq!(values(&baseline, &raw, ResolveInputs::new(1000.0)), [500.0, 1000.0]);
    }

    #[test]
    fn small_is_a_quarter() {
        let p = CapablePlatform::default();
        assert_eq!(values(&p, &["small".into()], ResolveInputs::new(800.0)), [200.0]);
    }

    #[test]
    fn overscaled_percent_clamps_to_extent() {
        let p = CapablePlatform::default();
        assert_eq!(values(&p, &["250%".into()], ResolveInputs::new(400.0)), [400.0]);
    }

    #[test]
    fn fallback_resolves_custom_sizes_as_medium() {
        let p = FallbackPlatform;
        let raw = [RawSize::from("small"), RawSize::from(120.0), RawSize::from("large")];
        assert_eq!(values(&p, &raw, ResolveInputs::new(600.0)), [300.0, 300.0, 600.0]);
        let out = resolve_all(&p, &rules(&raw).rules, &ResolveInputs::new(600.0));
        assert_eq!(out[1].id.as_str(), "custom-120");
        let capped = ResolveInputs::new(600.0).with_max_height(Some(500.0));
        assert_eq!(values(&p, &raw, capped), [300.0, 300.0, 500.0]);
    }

    #[test]
    fn degenerate_extents_resolve_to_zero() {
        let p = CapablePlatform::default();
        assert_eq!(values(&p, &["large".into()], ResolveInputs::new(-10.0)), [0.0]);
        assert_eq!(values(&p, &["large".into()], ResolveInputs::new(f64::NAN)), [0.0]);
        let negative_cap = ResolveInputs::new(800.0).with_max_height(Some(-1.0));
        assert_eq!(values(&p, &["medium".into()], negative_cap), [0.0]);
    }

    #[test]
    fn empty_rules_resolve_as_defaults() {
        let p = CapablePlatform::default();
        let inputs = ResolveInputs::new(800.0);
        assert_eq!(resolve_all(&p, &[], &inputs), resolve_all(&p, &default_rules(), &inputs));
    }

    #[test]
    fn resolver_keeps_rules_between_passes() {
        let mut resolver = Resolver::new(AnyPlatform::default());
        resolver.set_rules(rules(&["small".into(), "auto".into()]));
        let a = resolver.resolve(&ResolveInputs::new(800.0));
        let b = resolver.resolve(&ResolveInputs::new(400.0));
        let ids = |v: &[ResolvedSize]| v.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(a[0].value, 200.0);
        assert_eq!(b[0].value, 100.0);
        assert_eq!(resolver.rules().len(), 2);
    }
}
