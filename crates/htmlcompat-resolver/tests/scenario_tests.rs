//! Integration tests for the resolvers against the fixture dataset.

use htmlcompat_core::{FeatureKind, TargetRuntime};
use htmlcompat_data::FeatureDatabase;
use htmlcompat_resolver::{
    CompatibilityResolver, DeprecationResolver, MissingDataPolicy, ResolverConfig, TargetFilter,
};
use proptest::prelude::*;

/// Path to the fixture dataset relative to the workspace root
const FIXTURE_PATH: &str = "testing/fixtures/browser-compat/html.json";

fn load_fixture() -> FeatureDatabase {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    let json = std::fs::read_to_string(workspace_root.join(FIXTURE_PATH)).unwrap();
    FeatureDatabase::from_json(&json).unwrap()
}

fn target(runtime: &str, version: &str) -> TargetRuntime {
    TargetRuntime::new(runtime, version)
}

// =============================================================================
// Compatibility
// =============================================================================

#[test]
fn test_dialog_unsupported_in_ie() {
    let db = load_fixture();
    let verdict = CompatibilityResolver::default()
        .resolve_element(&db, "dialog", &[target("ie", "11")])
        .unwrap();

    assert!(!verdict.is_supported());
    assert_eq!(verdict.unsupported_targets(), &[target("ie", "11")]);
}

#[test]
fn test_element_without_data_is_supported_when_fail_open() {
    let db = load_fixture();
    let verdict = CompatibilityResolver::default()
        .resolve_element(&db, "my-element", &[target("ie", "11")])
        .unwrap();

    assert!(verdict.is_supported());
    assert!(verdict.unsupported_targets().is_empty());
}

#[test]
fn test_element_without_data_is_unsupported_when_fail_closed() {
    let db = load_fixture();
    let resolver = CompatibilityResolver::new(&ResolverConfig::fail_closed());
    let targets = [target("ie", "11"), target("chrome", "120")];
    let verdict = resolver.resolve_element(&db, "my-element", &targets).unwrap();

    assert_eq!(verdict.unsupported_targets(), &targets);
}

#[test]
fn test_only_failing_targets_reported_in_input_order() {
    let db = load_fixture();
    let verdict = CompatibilityResolver::default()
        .resolve_element(&db, "dialog", &[target("ie", "11"), target("firefox", "120")])
        .unwrap();
    assert_eq!(verdict.unsupported_targets(), &[target("ie", "11")]);

    let verdict = CompatibilityResolver::default()
        .resolve_element(
            &db,
            "dialog",
            &[target("firefox", "50"), target("chrome", "120"), target("ie", "11")],
        )
        .unwrap();
    assert_eq!(
        verdict.unsupported_targets(),
        &[target("firefox", "50"), target("ie", "11")]
    );
}

#[test]
fn test_provider_aliases() {
    let db = load_fixture();
    let resolver = CompatibilityResolver::default();
    let targets: Vec<TargetRuntime> = ["and_chr 120", "ios_saf 15.2-15.3", "samsung 23"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let verdict = resolver.resolve_element(&db, "dialog", &targets).unwrap();
    assert_eq!(verdict.unsupported_target_names(), vec!["ios_saf 15.2".to_string()]);
}

#[test]
fn test_alternatives_and_preview() {
    let db = load_fixture();
    let resolver = CompatibilityResolver::default();

    // Prefixed safari statement covers 5.1.
    let verdict = resolver.resolve_element(&db, "progress", &[target("safari", "5.1")]).unwrap();
    assert!(verdict.is_supported());

    let verdict = resolver.resolve_element(&db, "progress", &[target("safari", "5")]).unwrap();
    assert!(!verdict.is_supported());

    // "preview" carries no version number and counts as 0.
    let verdict = resolver.resolve_element(&db, "progress", &[target("opera", "100")]).unwrap();
    assert!(verdict.is_supported());
}

#[test]
fn test_attribute_element_scoped_record() {
    let db = load_fixture();
    let verdict = CompatibilityResolver::default()
        .resolve_attribute(&db, "img", "loading", &[target("safari", "15"), target("chrome", "80")])
        .unwrap();

    assert_eq!(verdict.feature().kind(), FeatureKind::ElementAttribute);
    assert_eq!(verdict.unsupported_targets(), &[target("safari", "15")]);
    assert!(verdict.reference_url().unwrap().ends_with("HTML/Element/img#loading"));
}

#[test]
fn test_attribute_global_fallback_never_uses_policy() {
    let db = load_fixture();
    let resolver = CompatibilityResolver::new(&ResolverConfig::fail_closed());

    // `hidden` is not recorded on `section`, but it is a global attribute.
    let verdict = resolver
        .resolve_attribute(&db, "section", "hidden", &[target("ie", "11"), target("ie", "10")])
        .unwrap();

    assert_eq!(verdict.feature().kind(), FeatureKind::GlobalAttribute);
    assert_eq!(verdict.unsupported_targets(), &[target("ie", "10")]);
    assert!(verdict.reference_url().unwrap().ends_with("Global_attributes/hidden"));
}

#[test]
fn test_attribute_on_element_only_present_through_attributes() {
    let db = load_fixture();
    let verdict = CompatibilityResolver::default()
        .resolve_attribute(&db, "portal", "src", &[target("chrome", "80")])
        .unwrap();
    assert!(!verdict.is_supported());
}

#[test]
fn test_ignore_list_before_resolution() {
    let db = load_fixture();
    let targets = [target("ie", "11"), target("firefox", "50")];
    let filter = TargetFilter::from_entries(["ie 11"]).unwrap();

    let verdict = CompatibilityResolver::default()
        .resolve_element(&db, "dialog", &filter.apply(&targets))
        .unwrap();
    assert_eq!(verdict.unsupported_targets(), &[target("firefox", "50")]);
}

#[test]
fn test_config_from_yaml_drives_policy() {
    let db = load_fixture();
    let config = ResolverConfig::from_yaml("missing_data: fail_closed").unwrap();
    assert_eq!(config.missing_data, MissingDataPolicy::FailClosed);

    // `progress` has no `kaios` entry.
    let verdict = CompatibilityResolver::new(&config)
        .resolve_element(&db, "progress", &[target("kaios", "3")])
        .unwrap();
    assert!(!verdict.is_supported());
}

// =============================================================================
// Deprecation
// =============================================================================

#[test]
fn test_center_is_deprecated() {
    let db = load_fixture();
    let verdict = DeprecationResolver::default().resolve_element(&db, "center").unwrap();
    assert!(verdict.is_deprecated());
    assert_eq!(verdict.note(), None);
}

#[test]
fn test_img_align_is_deprecated_through_element_record() {
    let db = load_fixture();
    let verdict = DeprecationResolver::default()
        .resolve_attribute(&db, "img", "align")
        .unwrap();
    assert!(verdict.is_deprecated());
    assert_eq!(verdict.feature().kind(), FeatureKind::ElementAttribute);
}

#[test]
fn test_deprecated_elements_from_fixture() {
    let db = load_fixture();
    let resolver = DeprecationResolver::default();
    for element in ["center", "font", "marquee", "big", "tt", "strike", "acronym", "nobr"] {
        assert!(
            resolver.resolve_element(&db, element).unwrap().is_deprecated(),
            "expected {} to be deprecated",
            element
        );
    }
    for element in ["div", "span", "p", "section", "h1", "button"] {
        assert!(
            !resolver.resolve_element(&db, element).unwrap().is_deprecated(),
            "expected {} to be current",
            element
        );
    }
}

#[test]
fn test_deprecation_note() {
    let db = load_fixture();
    let verdict = DeprecationResolver::default().resolve_element(&db, "nobr").unwrap();
    assert_eq!(verdict.note(), Some("Use the CSS white-space property instead."));
}

#[test]
fn test_deprecated_attributes_from_fixture() {
    let db = load_fixture();
    let resolver = DeprecationResolver::default();
    for (element, attribute) in [("table", "border"), ("table", "bgcolor"), ("div", "align"), ("font", "color")] {
        assert!(resolver.resolve_attribute(&db, element, attribute).unwrap().is_deprecated());
    }
    for (element, attribute) in [("p", "id"), ("button", "type"), ("acronym", "title")] {
        assert!(!resolver.resolve_attribute(&db, element, attribute).unwrap().is_deprecated());
    }
}

// =============================================================================
// Concurrency and determinism
// =============================================================================

#[test]
fn test_parallel_queries_share_one_database() {
    let db = load_fixture();
    let resolver = CompatibilityResolver::default();
    let targets = vec![target("ie", "11"), target("chrome", "120")];

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["dialog", "details", "div", "search"]
            .into_iter()
            .map(|element| {
                let (db, resolver, targets) = (&db, &resolver, &targets);
                scope.spawn(move || resolver.resolve_element(db, element, targets).unwrap().is_supported())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![false, false, true, false]);
}

fn arb_target() -> impl Strategy<Value = TargetRuntime> {
    (
        prop_oneof![
            Just("ie"),
            Just("chrome"),
            Just("firefox"),
            Just("safari"),
            Just("ios_saf"),
            Just("and_chr"),
            Just("kaios"),
        ],
        "[0-9]{1,3}(\\.[0-9]{1,2})?",
    )
        .prop_map(|(runtime, version)| TargetRuntime::new(runtime, version))
}

proptest! {
    #[test]
    fn verdicts_are_deterministic_and_order_preserving(
        targets in prop::collection::vec(arb_target(), 0..8),
        element in prop_oneof![Just("dialog"), Just("details"), Just("div"), Just("unknown-el")],
        fail_closed in any::<bool>(),
    ) {
        let db = load_fixture();
        let config = if fail_closed { ResolverConfig::fail_closed() } else { ResolverConfig::fail_open() };
        let resolver = CompatibilityResolver::new(&config);

        let first = resolver.resolve_element(&db, element, &targets).unwrap();
        let second = resolver.resolve_element(&db, element, &targets).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.is_supported(), first.unsupported_targets().is_empty());

        // Unsupported targets form a subsequence of the input.
        let mut input = targets.iter();
        for failing in first.unsupported_targets() {
            prop_assert!(input.any(|t| t == failing));
        }
    }
}
