// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core value types: raw host sizes, parsed size specs, identifiers, and resolved sizes.

use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

/// Maximum number of sizes a sheet supports (collapsed, half-expanded, expanded).
pub const MAX_SIZES: usize = 3;

/// Platform-defined size keywords.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// A quarter of the container extent.
    Small,
    /// The platform's half-height detent.
    Medium,
    /// The platform's full-height detent.
    Large,
}

impl Keyword {
    /// The keyword as it appears in a size list.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Match an exact keyword string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }
}

/// One entry of a size list exactly as the host framework handed it over.
///
/// Host props are dynamically typed: a size is a number, a string, or (by
/// mistake) something else. [`Unsupported`](RawSize::Unsupported) captures the
/// last case so a single bad entry never fails the whole list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawSize {
    /// Absolute height in already-scaled pixels.
    Number(f64),
    /// Keyword, `"auto"`, or a percentage such as `"75%"`.
    Text(String),
    /// Any other value type (bool, null, object, ...).
    #[cfg_attr(feature = "serde", serde(skip))]
    Unsupported,
}

#[cfg(feature = "serde")]
impl RawSize {
    /// Deserialize a size list, mapping values of unsupported types to
    /// [`RawSize::Unsupported`] instead of failing.
    pub fn deserialize_list<'de, D>(deserializer: D) -> Result<alloc::vec::Vec<Self>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Lenient {
            Size(RawSize),
            Other(
                #[allow(dead_code, reason = "only the variant matters")] serde::de::IgnoredAny,
            ),
        }

        let items: alloc::vec::Vec<Lenient> = serde::Deserialize::deserialize(deserializer)?;
        Ok(items
            .into_iter()
            .map(|item| match item {
                Lenient::Size(size) => size,
                Lenient::Other(_) => Self::Unsupported,
            })
            .collect())
    }
}

impl From<f64> for RawSize {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawSize {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for RawSize {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Keyword> for RawSize {
    fn from(value: Keyword) -> Self {
        Self::Text(String::from(value.as_str()))
    }
}

/// A parsed size entry: the closed set of ways a detent height can be described.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SizeSpec {
    /// Platform keyword.
    Keyword(Keyword),
    /// Exact height in pixels.
    Absolute(f64),
    /// Fraction of the container extent (`0.75` for `"75%"`). May exceed `1.0`.
    Percent(f64),
    /// Fit the measured content height.
    Auto,
}

/// Stable string key binding a size entry to its resolved value.
///
/// Derived purely from the raw entry, so the same entry keeps the same
/// identifier across resolution passes. Platform drag callbacks report it back.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DetentId(String);

impl DetentId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DetentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DetentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A size spec resolved against a container at one point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSize {
    /// Position in the original size list.
    pub index: usize,
    /// Identifier of the originating entry.
    pub id: DetentId,
    /// Resolved height in pixels.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_names_round_trip() {
        for kw in [Keyword::Small, Keyword::Medium, Keyword::Large] {
            assert_eq!(Keyword::from_name(kw.as_str()), Some(kw));
        }
        assert_eq!(Keyword::from_name("Medium"), None);
        assert_eq!(Keyword::from_name(" large"), None);
    }

    #[test]
    fn detent_id_borrows_as_str() {
        let id = DetentId::new("custom-75%");
        let s: &str = id.borrow();
        assert_eq!(s, "custom-75%");
        assert_eq!(alloc::format!("{id}"), "custom-75%");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn lenient_list_keeps_unsupported_entries() {
        let mut de = serde_json::Deserializer::from_str(r#"[320, "75%", null, true, {}, "auto", 12.5]"#);
        let sizes = RawSize::deserialize_list(&mut de).expect("a JSON array");
        assert_eq!(
            sizes,
            alloc::vec![
                RawSize::Number(320.0),
                RawSize::from("75%"),
                RawSize::Unsupported,
                RawSize::Unsupported,
                RawSize::Unsupported,
                RawSize::from("auto"),
                RawSize::Number(12.5),
            ]
        );

        let mut de = serde_json::Deserializer::from_str(r#"{ "sizes": [] }"#);
        assert!(RawSize::deserialize_list(&mut de).is_err());
    }
}
