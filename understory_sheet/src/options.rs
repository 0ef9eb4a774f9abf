// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet options (host props) and the platform configuration derived from them.

use understory_detent::{DetentId, Keyword, RawSize, SizeRegistry};

/// Per-sheet options supplied by the host on mount and on every update.
///
/// With the `serde` feature these deserialize from `camelCase` props:
///
/// ```ignore
/// { "sizes": ["auto", "large"], "maxHeight": 600, "name": "settings", "dimmedIndex": 1 }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SheetOptions {
    /// Up to three sizes. Defaults to `[medium, large]`.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "RawSize::deserialize_list")
    )]
    pub sizes: Vec<RawSize>,
    /// Cap applied to every resolved size.
    pub max_height: Option<f64>,
    /// Name for addressing the sheet through the process-wide name registry.
    pub name: Option<String>,
    /// Whether the user may swipe the sheet away.
    pub dismissible: bool,
    /// Whether the content behind the sheet is dimmed.
    pub dimmed: bool,
    /// Size index at which dimming starts.
    pub dimmed_index: Option<usize>,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            sizes: vec![Keyword::Medium.into(), Keyword::Large.into()],
            max_height: None,
            name: None,
            dismissible: true,
            dimmed: true,
            dimmed_index: None,
        }
    }
}

impl SheetOptions {
    /// Default options with the given sizes.
    pub fn with_sizes<I, S>(sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RawSize>,
    {
        Self {
            sizes: sizes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the height cap.
    pub fn max_height(mut self, cap: f64) -> Self {
        self.max_height = Some(cap);
        self
    }

    /// Set the sheet name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set whether the user may swipe the sheet away.
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Set dimming and the index it starts at.
    pub fn dimmed(mut self, dimmed: bool, dimmed_index: Option<usize>) -> Self {
        self.dimmed = dimmed;
        self.dimmed_index = dimmed_index;
        self
    }

    /// Identifier of the largest detent that leaves the background undimmed.
    ///
    /// Not dimmed: the last detent. Dimmed from index `i > 0`: detent `i - 1`.
    /// Dimmed from the start: none.
    pub fn largest_undimmed(&self, registry: &SizeRegistry) -> Option<DetentId> {
        if !self.dimmed {
            return registry.last().map(|s| s.id.clone());
        }
        let start = self.dimmed_index.filter(|&i| i > 0)?;
        let index = registry.clamp_index(start - 1)?;
        registry.by_index(index).map(|s| s.id.clone())
    }
}

/// Detent setup pushed to the platform after each resolution pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetConfiguration {
    /// Detents in size-list order.
    pub detents: Vec<(DetentId, f64)>,
    /// Whether user dismissal is allowed.
    pub dismissible: bool,
    /// See [`SheetOptions::largest_undimmed`].
    pub largest_undimmed: Option<DetentId>,
}

impl SheetConfiguration {
    /// Build the configuration for the current registry.
    pub fn new(options: &SheetOptions, registry: &SizeRegistry) -> Self {
        Self {
            detents: registry.iter().map(|s| (s.id.clone(), s.value)).collect(),
            dismissible: options.dismissible,
            largest_undimmed: options.largest_undimmed(registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_detent::{AnyPlatform, ResolveInputs, resolve_all, rules};

    fn registry(raw: &[RawSize]) -> SizeRegistry {
        let mut reg = SizeRegistry::new();
        let resolved = resolve_all(
            &AnyPlatform::default(),
            &rules(raw).rules,
            &ResolveInputs::new(800.0),
        );
        let _ = reg.register(resolved);
        reg
    }

    #[test]
    fn defaults() {
        let o = SheetOptions::default();
        assert_eq!(o.sizes, vec![RawSize::from("medium"), RawSize::from("large")]);
        assert!(o.dismissible && o.dimmed);
        assert_eq!(o.max_height, None);
    }

    #[test]
    fn undimmed_detent() {
        let reg = registry(&["small".into(), "medium".into(), "large".into()]);
        let id = |o: &SheetOptions| o.largest_undimmed(&reg).map(|d| d.to_string());

        assert_eq!(id(&SheetOptions::default()), None);
        assert_eq!(id(&SheetOptions::default().dimmed(false, None)), Some("large".into()));
        assert_eq!(id(&SheetOptions::default().dimmed(true, Some(0))), None);
        assert_eq!(id(&SheetOptions::default().dimmed(true, Some(2))), Some("medium".into()));
        assert_eq!(id(&SheetOptions::default().dimmed(true, Some(9))), Some("large".into()));
    }

    #[test]
    fn configuration_mirrors_registry() {
        let reg = registry(&["medium".into(), RawSize::from(300.0)]);
        let options = SheetOptions::default().dismissible(false);
        let config = SheetConfiguration::new(&options, &reg);
        assert_eq!(
            config.detents,
            vec![
                (DetentId::new("medium"), 400.0),
                (DetentId::new("custom-300"), 300.0)
            ]
        );
        assert!(!config.dismissible);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_camel_case_props() {
        let o: SheetOptions = serde_json::from_str(
            r#"{ "sizes": ["auto", 320, true, "80%"], "maxHeight": 600, "name": "settings", "dimmedIndex": 1 }"#,
        )
        .expect("valid props");
        assert_eq!(
            o.sizes,
            vec![
                RawSize::from("auto"),
                RawSize::Number(320.0),
                RawSize::Unsupported,
                RawSize::from("80%")
            ]
        );
        assert_eq!(o.max_height, Some(600.0));
        assert_eq!(o.name.as_deref(), Some("settings"));
        assert_eq!(o.dimmed_index, Some(1));
        assert!(o.dismissible);
    }
}
