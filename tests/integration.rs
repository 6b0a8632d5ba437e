//! Integration tests for cascade-inspector.
//!
//! These exercise the public API from outside the crate: building rule sets
//! from inspector payloads, installing them, and asking declarations whether
//! they are in effect.

use cascade_inspector::protocol::MatchedStylesRecord;
use cascade_inspector::{
    CascadeResolver, DeclarationId, Error, MatchedRuleSet, Origin, ResolverConfig, Rule, ScanMode,
    SharedResolver,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn rule(selector: &str, sheet: &str, pairs: &[(&str, &str)]) -> Rule {
    let mut builder = Rule::builder(selector).stylesheet(sheet);
    for (name, value) in pairs {
        builder = builder.declare(*name, *value);
    }
    builder.build()
}

fn enabled_values(resolver: &CascadeResolver, property: &str) -> Vec<String> {
    resolver
        .matched_rules()
        .declarations()
        .filter(|d| d.name() == property && d.is_enabled(resolver))
        .map(|d| d.value().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Cascade properties
// ---------------------------------------------------------------------------

#[test]
fn test_resolve_twice_returns_same_winner() {
    let mut resolver = CascadeResolver::new();
    resolver.set_matched_rules(MatchedRuleSet::new(vec![
        rule(".a", "1", &[("color", "red"), ("margin", "0")]),
        rule(".b", "1", &[("color", "blue")]),
    ]));

    for property in ["color", "margin", "padding"] {
        assert_eq!(resolver.resolve(property), resolver.resolve(property));
    }
}

#[test]
fn test_new_rule_set_is_never_served_from_old_cache() {
    let mut resolver = CascadeResolver::new();
    resolver.set_matched_rules(MatchedRuleSet::new(vec![rule(".a", "1", &[("color", "red")])]));
    assert_eq!(resolver.resolve("color").unwrap().as_str(), "1/.a#1");

    resolver.set_matched_rules(MatchedRuleSet::new(vec![rule(".a", "1", &[("margin", "0")])]));
    assert!(resolver.resolve("color").is_none());
}

#[test]
fn test_last_declared_in_rule_wins() {
    let mut resolver = CascadeResolver::new();
    resolver.set_matched_rules(MatchedRuleSet::new(vec![rule(
        ".a",
        "1",
        &[("color", "red"), ("color", "blue")],
    )]));
    assert_eq!(enabled_values(&resolver, "color"), vec!["blue"]);
}

#[test]
fn test_first_rule_in_supplied_order_wins_by_default() {
    let mut resolver = CascadeResolver::new();
    resolver.set_matched_rules(MatchedRuleSet::new(vec![
        rule(".one", "1", &[("color", "red")]),
        rule(".two", "1", &[("color", "blue")]),
    ]));

    assert_eq!(resolver.config().scan_mode, ScanMode::FirstMatch);
    assert_eq!(resolver.resolve("color").unwrap().as_str(), "1/.one#1");
    assert_eq!(enabled_values(&resolver, "color"), vec!["red"]);
}

#[test]
fn test_last_match_mode_lets_highest_precedence_win() {
    let mut resolver =
        CascadeResolver::with_config(ResolverConfig::new().with_scan_mode(ScanMode::LastMatch));
    resolver.set_matched_rules(MatchedRuleSet::new(vec![
        rule(".one", "1", &[("color", "red")]),
        rule(".two", "1", &[("color", "blue")]),
    ]));
    assert_eq!(enabled_values(&resolver, "color"), vec!["blue"]);
}

#[test]
fn test_unmatched_property_has_no_winner() {
    let mut resolver = CascadeResolver::new();
    resolver.set_matched_rules(MatchedRuleSet::new(vec![rule(".a", "1", &[("color", "red")])]));

    assert!(resolver.resolve("padding").is_none());
    let id = resolver.matched_rules().get(0).unwrap().style().get(0).unwrap().id().clone();
    assert!(!resolver.is_winning("padding", &id));
}

#[test]
fn test_identifier_format() {
    let rule = rule(".foo", "7", &[("color", "red"), ("margin", "0")]);
    let margin = rule.style().get(1).unwrap();
    assert_eq!(margin.id(), &DeclarationId::new("7", ".foo", 2));
    assert_eq!(margin.id().as_str(), "7/.foo#2");
}

// ---------------------------------------------------------------------------
// Declarations across rule set replacement
// ---------------------------------------------------------------------------

#[test]
fn test_is_enabled_follows_rule_set_replacement() {
    let mut resolver = CascadeResolver::new();
    let first = MatchedRuleSet::new(vec![rule(".a", "1", &[("color", "red")])]);
    let kept = first.get(0).unwrap().style().get(0).unwrap().clone();

    resolver.set_matched_rules(first);
    assert!(kept.is_enabled(&resolver));
    assert!(kept.is_enabled(&resolver));

    resolver.set_matched_rules(MatchedRuleSet::new(vec![rule(".b", "1", &[("color", "blue")])]));
    assert!(!kept.is_enabled(&resolver));
}

#[test]
fn test_declaration_memo_is_per_resolver() {
    let rules = MatchedRuleSet::new(vec![
        rule(".one", "1", &[("color", "red")]),
        rule(".two", "1", &[("color", "blue")]),
    ]);
    let red = rules.get(0).unwrap().style().get(0).unwrap().clone();

    let mut literal = CascadeResolver::new();
    literal.set_matched_rules(rules.clone());
    let mut corrected =
        CascadeResolver::with_config(ResolverConfig::new().with_scan_mode(ScanMode::LastMatch));
    corrected.set_matched_rules(rules);

    assert!(red.is_enabled(&literal));
    assert!(!red.is_enabled(&corrected));
    assert!(red.is_enabled(&literal));
}

// ---------------------------------------------------------------------------
// Inspector payloads
// ---------------------------------------------------------------------------

fn matched_styles_payload() -> String {
    json!({
        "matchedCSSRules": [
            {
                "rule": {
                    "selectorList": { "text": "p" },
                    "origin": "user-agent",
                    "style": { "cssProperties": [
                        { "name": "display", "value": "block" },
                        { "name": "margin", "value": "1em 0" }
                    ] }
                },
                "matchingSelectors": [0]
            },
            {
                "rule": {
                    "styleSheetId": "7",
                    "selectorList": { "text": ".foo" },
                    "origin": "regular",
                    "style": { "cssProperties": [
                        { "name": "color", "value": "red" },
                        { "name": "margin", "value": "0" }
                    ] }
                },
                "matchingSelectors": [0]
            },
            {
                "rule": {
                    "styleSheetId": "7",
                    "selectorList": { "text": ".bar" },
                    "origin": "regular",
                    "style": { "cssProperties": [{ "name": "color", "value": "blue" }] }
                },
                "matchingSelectors": [0]
            }
        ]
    })
    .to_string()
}

#[test]
fn test_payload_to_rule_set() {
    let rules = MatchedStylesRecord::from_json(&matched_styles_payload())
        .unwrap()
        .to_rule_set();

    assert_eq!(rules.len(), 3);
    assert_eq!(rules.get(0).unwrap().origin(), &Origin::UserAgent);
    assert_eq!(rules.get(0).unwrap().stylesheet_id(), "");
    assert_eq!(rules.property_names(), vec!["display", "margin", "color"]);
}

#[test]
fn test_applied_styles_report() {
    let rules = MatchedStylesRecord::from_json(&matched_styles_payload())
        .unwrap()
        .to_rule_set();
    let mut resolver =
        CascadeResolver::with_config(ResolverConfig::new().with_scan_mode(ScanMode::LastMatch));
    resolver.set_matched_rules(rules);

    let report = resolver
        .applied_styles()
        .iter()
        .map(|d| format!("{}: {} [{}]", d.name(), d.value(), d.id()))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(report, @r"
    display: block [/p#1]
    margin: 0 [7/.foo#2]
    color: blue [7/.bar#1]
    ");
}

#[test]
fn test_reversed_payload_in_literal_mode() {
    let rules = MatchedStylesRecord::from_json(&matched_styles_payload())
        .unwrap()
        .to_rule_set()
        .reversed();
    let mut resolver = CascadeResolver::new();
    resolver.set_matched_rules(rules);

    assert_eq!(resolver.resolve("color").unwrap().as_str(), "7/.bar#1");
    assert_eq!(resolver.resolve("margin").unwrap().as_str(), "7/.foo#2");
    assert_eq!(resolver.resolve("display").unwrap().as_str(), "/p#1");
}

#[test]
fn test_malformed_payload_fails_whole_set() {
    let payload = json!([
        { "rule": { "selectorList": { "text": "p" }, "origin": "regular" } }
    ])
    .to_string();
    match MatchedRuleSet::from_json(&payload) {
        Err(Error::Malformed { context, .. }) => assert_eq!(context, "rule match"),
        other => panic!("expected malformed error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Shared resolver
// ---------------------------------------------------------------------------

#[test]
fn test_shared_resolver_across_threads() {
    let shared = SharedResolver::default();
    shared.set_matched_rules(MatchedRuleSet::new(vec![rule(".a", "1", &[("color", "red")])]));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| shared.resolve("color")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap().as_str(), "1/.a#1");
        }
    });
}
