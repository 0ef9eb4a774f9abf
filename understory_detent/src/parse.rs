// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size specification parsing.
//!
//! Turns dynamically typed host entries into [`SizeSpec`] values and stable
//! [`DetentId`]s. Parsing is total: an entry that cannot be understood falls
//! back to [`Keyword::Medium`] so a typo never breaks rendering.
//!
//! Precedence:
//! 1. numbers become [`SizeSpec::Absolute`];
//! 2. `"small"`, `"medium"`, `"large"` become [`SizeSpec::Keyword`];
//! 3. `"auto"` becomes [`SizeSpec::Auto`];
//! 4. text that reads as a positive number once `%` signs are removed becomes
//!    [`SizeSpec::Percent`] (`"75%"` is `0.75`);
//! 5. anything else becomes `Keyword(Medium)`.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{DetentId, Keyword, MAX_SIZES, RawSize, SizeSpec};

/// Parse one raw size entry.
///
/// ```
/// use understory_detent::{Keyword, RawSize, SizeSpec, parse};
///
/// assert_eq!(parse(&RawSize::from(320.0)), SizeSpec::Absolute(320.0));
/// assert_eq!(parse(&RawSize::from("large")), SizeSpec::Keyword(Keyword::Large));
/// assert_eq!(parse(&RawSize::from("75%")), SizeSpec::Percent(0.75));
/// assert_eq!(parse(&RawSize::from("tall")), SizeSpec::Keyword(Keyword::Medium));
/// ```
pub fn parse(raw: &RawSize) -> SizeSpec {
    parse_checked(raw).0
}

/// Whether `raw` is understood without falling back to the default.
pub fn is_recognized(raw: &RawSize) -> bool {
    parse_checked(raw).1
}

fn parse_checked(raw: &RawSize) -> (SizeSpec, bool) {
    const FALLBACK: SizeSpec = SizeSpec::Keyword(Keyword::Medium);
    match raw {
        RawSize::Number(v) if v.is_finite() => (SizeSpec::Absolute(*v), true),
        RawSize::Number(_) => (FALLBACK, false),
        RawSize::Text(text) => {
            if let Some(kw) = Keyword::from_name(text) {
                (SizeSpec::Keyword(kw), true)
            } else if text == "auto" {
                (SizeSpec::Auto, true)
            } else if let Some(fraction) = percent(text) {
                (SizeSpec::Percent(fraction), true)
            } else {
                (FALLBACK, false)
            }
        }
        RawSize::Unsupported => (FALLBACK, false),
    }
}

fn percent(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(|c| *c != '%').collect();
    let value: f64 = digits.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then(|| value / 100.0)
}

/// Derive the stable identifier for a raw entry.
///
/// Exact keywords keep their name; everything else is prefixed with `custom-`.
///
/// ```
/// use understory_detent::{RawSize, identifier};
///
/// assert_eq!(identifier(&RawSize::from("medium")).as_str(), "medium");
/// assert_eq!(identifier(&RawSize::from(300.0)).as_str(), "custom-300");
/// assert_eq!(identifier(&RawSize::from("75%")).as_str(), "custom-75%");
/// ```
pub fn identifier(raw: &RawSize) -> DetentId {
    match raw {
        RawSize::Text(text) if Keyword::from_name(text).is_some() => DetentId::new(text.clone()),
        RawSize::Text(text) => DetentId::new(format!("custom-{text}")),
        RawSize::Number(v) => DetentId::new(format!("custom-{v}")),
        RawSize::Unsupported => DetentId::new("custom-unsupported"),
    }
}

/// A parsed entry paired with its identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeRule {
    /// How the height is computed.
    pub spec: SizeSpec,
    /// Stable key for the resolved value.
    pub id: DetentId,
}

impl SizeRule {
    /// Parse a raw entry into a rule.
    pub fn from_raw(raw: &RawSize) -> Self {
        Self {
            spec: parse(raw),
            id: identifier(raw),
        }
    }

    /// A keyword rule.
    pub fn keyword(kw: Keyword) -> Self {
        Self {
            spec: SizeSpec::Keyword(kw),
            id: DetentId::new(kw.as_str()),
        }
    }
}

/// Result of turning a whole size list into rules, plus what was discarded on the way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleSet {
    /// At most [`MAX_SIZES`] rules, in list order.
    pub rules: Vec<SizeRule>,
    /// Entries past [`MAX_SIZES`] that were ignored.
    pub truncated: usize,
    /// Entries of an unsupported type that were dropped.
    pub skipped: usize,
    /// Entries that fell back to `Keyword(Medium)`.
    pub fallbacks: usize,
    /// True when the list was empty and `[medium, large]` was substituted.
    pub defaulted: bool,
}

/// Build the rule set for a raw size list.
///
/// Only the first [`MAX_SIZES`] entries are considered; unsupported entries
/// among them are dropped. If nothing is left, `[medium, large]` is used.
pub fn rules(raw: &[RawSize]) -> RuleSet {
    let kept = raw.len().min(MAX_SIZES);
    let mut set = RuleSet {
        truncated: raw.len() - kept,
        ..RuleSet::default()
    };

    for entry in &raw[..kept] {
        if matches!(entry, RawSize::Unsupported) {
            set.skipped += 1;
            continue;
        }
        if !is_recognized(entry) {
            set.fallbacks += 1;
        }
        set.rules.push(SizeRule::from_raw(entry));
    }

    if set.rules.is_empty() {
        set.defaulted = true;
        set.rules = default_rules();
    }
    set
}

/// The `[medium, large]` list used when no sizes are given.
pub fn default_rules() -> Vec<SizeRule> {
    alloc::vec![
        SizeRule::keyword(Keyword::Medium),
        SizeRule::keyword(Keyword::Large)
    ]
}
