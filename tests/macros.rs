//! Tests for the `rule!` and `matched_rules!` macros.

#![cfg(feature = "macros")]

use cascade_inspector::{matched_rules, rule, CascadeResolver, Origin};
use pretty_assertions::assert_eq;

#[test]
fn test_rule_macro_builds_rule() {
    let rule = rule!(".foo" in "7" { color: red; margin: 0; });
    assert_eq!(rule.selector_text(), ".foo");
    assert_eq!(rule.stylesheet_id(), "7");
    assert_eq!(rule.origin(), &Origin::Regular);

    let margin = rule.style().get(1).unwrap();
    assert_eq!(margin.value(), "0");
    assert_eq!(margin.id().as_str(), "7/.foo#2");
}

#[test]
fn test_rule_macro_values() {
    let rule = rule!(user_agent "body" {
        font-family: Helvetica, sans-serif;
        background: #fff;
        width: 50%;
        padding: 4px 8px;
        color: rgb(1, 2, 3);
        margin: "1em 0";
    });
    let values: Vec<&str> = rule.style().iter().map(|d| d.value()).collect();
    assert_eq!(
        values,
        vec!["Helvetica, sans-serif", "#fff", "50%", "4px 8px", "rgb(1, 2, 3)", "1em 0"]
    );
    assert_eq!(rule.origin(), &Origin::UserAgent);
    assert_eq!(rule.stylesheet_id(), "");
}

#[test]
fn test_matched_rules_macro_feeds_resolver() {
    let rules = matched_rules![
        ".one" in "1" { color: red; },
        ".two" in "1" { color: blue; color: green; },
    ];
    assert_eq!(rules.len(), 2);

    let mut resolver = CascadeResolver::new();
    resolver.set_matched_rules(rules.reversed());
    assert_eq!(resolver.resolve("color").unwrap().as_str(), "1/.two#2");
}

#[test]
fn test_rule_macro_accepts_keyword_words() {
    let rule = rule!("div" {
        box-sizing: border-box;
        position: static;
        align-self: self-start;
        color: #1e3;
    });
    let pairs: Vec<(&str, &str)> = rule.style().iter().map(|d| (d.name(), d.value())).collect();
    assert_eq!(
        pairs,
        vec![
            ("box-sizing", "border-box"),
            ("position", "static"),
            ("align-self", "self-start"),
            ("color", "#1e3"),
        ]
    );
}
