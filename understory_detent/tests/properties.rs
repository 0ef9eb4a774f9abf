// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for size parsing, resolution, and the registry.

use proptest::prelude::*;
use understory_detent::{
    AnyPlatform, Capabilities, CapablePlatform, DetentId, FallbackPlatform, RawSize,
    MAX_SIZES, ResolveInputs, SizeRegistry, default_rules, identifier, resolve_all, rules,
};

fn raw_size() -> impl Strategy<Value = RawSize> {
    prop_oneof![
        (-500.0..3000.0f64).prop_map(RawSize::Number),
        Just(RawSize::from("small")),
        Just(RawSize::from("medium")),
        Just(RawSize::from("large")),
        Just(RawSize::from("auto")),
        (1u32..300).prop_map(|p| RawSize::Text(format!("{p}%"))),
        "[a-z%0-9 ]{0,8}".prop_map(RawSize::Text),
        Just(RawSize::Unsupported),
    ]
}

fn inputs() -> impl Strategy<Value = ResolveInputs> {
    (
        0.0..4000.0f64,
        proptest::option::of(0.0..5000.0f64),
        proptest::option::of(0.0..4000.0f64),
    )
        .prop_map(|(extent, content, cap)| {
            ResolveInputs::new(extent)
                .with_content_height(content)
                .with_max_height(cap)
        })
}

fn platform() -> impl Strategy<Value = AnyPlatform> {
    prop_oneof![
        Just(AnyPlatform::Capable(CapablePlatform::default())),
        (0.3..0.7f64, 0.8..1.0f64)
            .prop_map(|(m, l)| AnyPlatform::Capable(CapablePlatform::new(m, l))),
        Just(AnyPlatform::Fallback(FallbackPlatform)),
    ]
}

proptest! {
    /// Same inputs, same output.
    #[test]
    fn resolution_is_deterministic(
        raw in proptest::collection::vec(raw_size(), 0..6),
        p in platform(),
        i in inputs(),
    ) {
        let set = rules(&raw);
        prop_assert_eq!(resolve_all(&p, &set.rules, &i), resolve_all(&p, &set.rules, &i));
    }

    /// Every value lies in `0..=extent` and under the cap.
    #[test]
    fn clamp_law(
        raw in proptest::collection::vec(raw_size(), 0..6),
        p in platform(),
        i in inputs(),
    ) {
        for size in resolve_all(&p, &rules(&raw).rules, &i) {
            prop_assert!(size.value >= 0.0, "{size:?}");
            prop_assert!(size.value <= i.container_extent, "{size:?} > {}", i.container_extent);
            if let Some(cap) = i.max_height {
                prop_assert!(size.value <= cap, "{size:?} > cap {cap}");
            }
        }
    }

    /// Identifiers do not depend on the container.
    #[test]
    fn identifiers_are_stable_across_extents(
        raw in proptest::collection::vec(raw_size(), 1..4),
        a in 0.0..4000.0f64,
        b in 0.0..4000.0f64,
    ) {
        let set = rules(&raw);
        let p = AnyPlatform::default();
        let ids = |extent: f64| -> Vec<DetentId> {
            resolve_all(&p, &set.rules, &ResolveInputs::new(extent))
                .into_iter()
                .map(|s| s.id)
                .collect()
        };
        prop_assert_eq!(ids(a), ids(b));

        // Kept entries carry the identifier of the raw entry they came from.
        let kept: Vec<DetentId> = raw
            .iter()
            .take(MAX_SIZES)
            .filter(|entry| **entry != RawSize::Unsupported)
            .map(identifier)
            .collect();
        let rule_ids: Vec<DetentId> = set.rules.iter().map(|r| r.id.clone()).collect();
        if kept.is_empty() {
            prop_assert!(set.defaulted);
        } else {
            prop_assert_eq!(rule_ids, kept);
        }
    }

    /// Only indices 0..3 are ever produced.
    #[test]
    fn long_lists_are_truncated(
        raw in proptest::collection::vec(raw_size(), 4..10),
        i in inputs(),
    ) {
        let out = resolve_all(&AnyPlatform::default(), &rules(&raw).rules, &i);
        prop_assert!(out.len() <= 3);
        for (pos, size) in out.iter().enumerate() {
            prop_assert_eq!(size.index, pos);
        }
    }

    /// The registry only answers for the last registered pass.
    #[test]
    fn registry_replaces_contents(
        first in proptest::collection::vec(raw_size(), 0..4),
        second in proptest::collection::vec(raw_size(), 0..4),
        i in inputs(),
    ) {
        let p = AnyPlatform::from_capabilities(Capabilities::all());
        let mut reg = SizeRegistry::new();
        let _ = reg.register(resolve_all(&p, &rules(&first).rules, &i));
        let latest = resolve_all(&p, &rules(&second).rules, &i);
        let _ = reg.register(latest.clone());

        let mut expected: Vec<&str> = latest.iter().map(|s| s.id.as_str()).collect();
        expected.sort_unstable();
        expected.dedup();
        let mut actual: Vec<&str> = reg.iter().map(|s| s.id.as_str()).collect();
        actual.sort_unstable();
        actual.dedup();
        prop_assert_eq!(actual, expected);

        for size in resolve_all(&p, &rules(&first).rules, &i) {
            if !latest.iter().any(|s| s.id == size.id) {
                prop_assert!(reg.lookup(size.id.as_str()).is_none());
            }
        }
    }
}

#[test]
fn empty_list_matches_medium_large() {
    let p = AnyPlatform::default();
    for extent in [0.0, 320.0, 800.0, 1366.0] {
        let i = ResolveInputs::new(extent);
        let explicit = rules(&["medium".into(), "large".into()]);
        assert_eq!(resolve_all(&p, &rules(&[]).rules, &i), resolve_all(&p, &explicit.rules, &i));
        assert_eq!(resolve_all(&p, &[], &i), resolve_all(&p, &default_rules(), &i));
    }
}

#[test]
fn five_entries_register_three() {
    let raw: Vec<RawSize> = vec![
        "small".into(),
        "medium".into(),
        "large".into(),
        "auto".into(),
        RawSize::Number(10.0),
    ];
    let set = rules(&raw);
    assert_eq!(set.truncated, 2);
    let mut reg = SizeRegistry::new();
    let _ = reg.register(resolve_all(&AnyPlatform::default(), &set.rules, &ResolveInputs::new(600.0)));
    assert_eq!(reg.len(), 3);
    assert!(reg.lookup("custom-auto").is_none());
    assert!(reg.by_index(3).is_none());
}
