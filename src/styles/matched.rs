//! The ordered set of rules that match one inspected element.

use std::collections::{HashMap, HashSet};
use std::slice;

use crate::styles::declaration::StyleDeclaration;
use crate::styles::id::DeclarationId;
use crate::styles::rule::Rule;

/// All rules matching one element, in ascending precedence order.
///
/// # Ordering precondition
///
/// The first rule has the lowest precedence and the last rule the highest,
/// which is how the inspector reports matched rules. The set never reorders
/// its rules on its own; [`reversed`](Self::reversed) is there for callers
/// that resolve in [`ScanMode::FirstMatch`] and want the highest-precedence
/// rule consulted first.
///
/// [`ScanMode::FirstMatch`]: crate::cascade::ScanMode::FirstMatch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedRuleSet {
    rules: Vec<Rule>,
}

impl MatchedRuleSet {
    /// Wrap rules that are already in ascending precedence order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Append a rule with higher precedence than every rule so far.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule matched.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at `index` (0 = lowest precedence).
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Iterate rules in precedence order.
    pub fn iter(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Every declaration of every rule, rule by rule in precedence order.
    pub fn declarations(&self) -> impl Iterator<Item = &StyleDeclaration> + '_ {
        self.rules.iter().flat_map(|rule| rule.style().iter())
    }

    /// Distinct property names, in the order they are first seen.
    pub fn property_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.declarations()
            .map(StyleDeclaration::name)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// First declaration carrying `id`.
    pub fn find(&self, id: &DeclarationId) -> Option<&StyleDeclaration> {
        self.declarations().find(|d| d.id() == id)
    }

    /// Identifiers carried by more than one declaration.
    ///
    /// Collisions happen when two rules share both stylesheet id and selector
    /// text. Each duplicate is listed once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&DeclarationId> {
        let mut counts: HashMap<&DeclarationId, usize> = HashMap::new();
        let mut order = Vec::new();
        for declaration in self.declarations() {
            let count = counts.entry(declaration.id()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(declaration.id());
            }
        }
        order
    }

    /// The same rules in the opposite order.
    pub fn reversed(mut self) -> Self {
        self.rules.reverse();
        self
    }

    /// Unwrap into the underlying rules.
    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}

impl From<Vec<Rule>> for MatchedRuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<Rule> for MatchedRuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MatchedRuleSet {
    type Item = &'a Rule;
    type IntoIter = slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
