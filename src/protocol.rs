//! Inspector protocol records for matched styles.
//!
//! These mirror the `CSS` domain payloads (`CSSRule`, `RuleMatch`,
//! `getMatchedStylesForNode`) closely enough to decode them with serde.
//! Fields this crate does not use are ignored. The records carry
//! already-parsed property lists; no CSS text is parsed here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::styles::{MatchedRuleSet, Origin, Rule, StyleBlock, StyleDeclaration};

/// One `{ name, value }` entry of `style.cssProperties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssPropertyRecord {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// `style` of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssStyleRecord {
    pub css_properties: Vec<CssPropertyRecord>,
}

/// `selectorList` of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorListRecord {
    pub text: String,
}

/// A `CSSRule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssRuleRecord {
    /// Absent (or null) for user-agent rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_sheet_id: Option<String>,
    pub selector_list: SelectorListRecord,
    pub origin: String,
    pub style: CssStyleRecord,
}

/// A `RuleMatch`: a matched rule plus the indices of the selectors in its
/// selector list that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMatchRecord {
    pub rule: CssRuleRecord,
    #[serde(default)]
    pub matching_selectors: Vec<u32>,
}

/// The part of a `getMatchedStylesForNode` result this crate consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedStylesRecord {
    #[serde(rename = "matchedCSSRules", default)]
    pub matched_css_rules: Vec<RuleMatchRecord>,
}

impl MatchedStylesRecord {
    /// Decode a `getMatchedStylesForNode` result.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::malformed("matched styles", e))
    }

    /// Build the matched rule set, keeping the reported order.
    pub fn to_rule_set(&self) -> MatchedRuleSet {
        MatchedRuleSet::from_rule_matches(&self.matched_css_rules)
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl Rule {
    /// Build a rule from a decoded `CSSRule`. A missing stylesheet id becomes
    /// the empty string.
    pub fn from_record(record: &CssRuleRecord) -> Self {
        let style: StyleBlock = record
            .style
            .css_properties
            .iter()
            .map(|p| StyleDeclaration::new(p.name.as_str(), p.value.as_str()))
            .collect();
        Rule::new(
            Origin::from(record.origin.as_str()),
            record.selector_list.text.as_str(),
            record.style_sheet_id.clone().unwrap_or_default(),
            style,
        )
    }

    /// Decode a `CSSRule` JSON value and build the rule.
    pub fn from_value(value: Value) -> Result<Self> {
        let record: CssRuleRecord =
            serde_json::from_value(value).map_err(|e| Error::malformed("rule", e))?;
        Ok(Self::from_record(&record))
    }
}

impl From<&CssRuleRecord> for Rule {
    fn from(record: &CssRuleRecord) -> Self {
        Rule::from_record(record)
    }
}

impl MatchedRuleSet {
    /// Build a rule set from decoded `RuleMatch` records, keeping their order.
    pub fn from_rule_matches(matches: &[RuleMatchRecord]) -> Self {
        matches.iter().map(|m| Rule::from_record(&m.rule)).collect()
    }

    /// Decode a JSON array of `RuleMatch` records.
    ///
    /// Fails as a whole on the first malformed record.
    pub fn from_json(json: &str) -> Result<Self> {
        let matches: Vec<RuleMatchRecord> =
            serde_json::from_str(json).map_err(|e| Error::malformed("rule match", e))?;
        Ok(Self::from_rule_matches(&matches))
    }

    /// Same as [`from_json`](Self::from_json) for an already-parsed value.
    pub fn from_value(value: Value) -> Result<Self> {
        let matches: Vec<RuleMatchRecord> =
            serde_json::from_value(value).map_err(|e| Error::malformed("rule match", e))?;
        Ok(Self::from_rule_matches(&matches))
    }
}
