//! Winner determination over a matched rule set, memoized per property name.
//!
//! The resolver owns the active [`MatchedRuleSet`] and a cache mapping
//! property name to the identifier of its winning declaration. Installing a
//! new rule set clears the whole cache and starts a new [`Generation`]; cached
//! winners are then recomputed on demand.
//!
//! Resolution for a property:
//!
//! 1. A cached winner is returned as is.
//! 2. Otherwise each rule contributes the last declaration of the property in
//!    its block, if any.
//! 3. The [`ScanMode`] picks which rule's contribution wins: the first rule in
//!    supplied order that has one ([`ScanMode::FirstMatch`]) or the last
//!    ([`ScanMode::LastMatch`]).
//! 4. The winner's identifier and position are cached. When no rule declares
//!    the property nothing is cached and there is no winner.
//!
//! Precedence comes from rule position alone; selector specificity and
//! `!important` are not considered.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::cascade::config::{ResolverConfig, ScanMode};
use crate::styles::{DeclarationId, MatchedRuleSet, StyleDeclaration};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Identifies one installed rule set. Unique across all resolvers in the
/// process, so a declaration memo can never match a different install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    fn next() -> Self {
        Generation(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }
}

/// A cached winner: its identifier and where it sits in the rule set.
///
/// Identifiers may collide between rules, so the position is what locates the
/// declaration the scan actually chose.
#[derive(Debug, Clone)]
struct Winner {
    id: DeclarationId,
    rule: usize,
    index: usize,
}

/// Determines the winning declaration for each property of a matched rule set.
#[derive(Debug)]
pub struct CascadeResolver {
    config: ResolverConfig,
    rules: MatchedRuleSet,
    /// Property name → winning declaration.
    cache: RefCell<HashMap<String, Winner>>,
    generation: Generation,
}

impl Default for CascadeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CascadeResolver {
    /// Create a resolver with the default config and an empty rule set.
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    /// Create a resolver with an explicit config and an empty rule set.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            config,
            rules: MatchedRuleSet::default(),
            cache: RefCell::new(HashMap::new()),
            generation: Generation::next(),
        }
    }

    /// The resolver's configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The active rule set.
    pub fn matched_rules(&self) -> &MatchedRuleSet {
        &self.rules
    }

    /// Generation of the active rule set.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of property names with a cached winner.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Install a new rule set, dropping every cached winner.
    ///
    /// Returns the previously active rule set.
    pub fn set_matched_rules(&mut self, rules: MatchedRuleSet) -> MatchedRuleSet {
        let cache = self.cache.get_mut();
        let cleared = cache.len();
        cache.clear();
        self.generation = Generation::next();

        log::debug!(
            target: "CascadeResolver::SetMatchedRules",
            "Installed {} rules ({:?}), cleared {} cached winners",
            rules.len(),
            self.generation,
            cleared
        );

        if self.config.warn_on_id_collision {
            for id in rules.duplicate_ids() {
                log::warn!(
                    target: "CascadeResolver::IdCollision",
                    "Declaration id `{}` is shared by several declarations",
                    id
                );
            }
        }

        std::mem::replace(&mut self.rules, rules)
    }

    /// Identifier of the winning declaration for `property`, or `None` when no
    /// rule declares it.
    pub fn resolve(&self, property: &str) -> Option<DeclarationId> {
        self.lookup(property).map(|winner| winner.id)
    }

    /// Returns `true` if `id` is the winning declaration for `property`.
    pub fn is_winning(&self, property: &str, id: &DeclarationId) -> bool {
        self.resolve(property).is_some_and(|winner| winner == *id)
    }

    /// The winning declaration for `property`.
    pub fn winning_declaration(&self, property: &str) -> Option<&StyleDeclaration> {
        let winner = self.lookup(property)?;
        self.rules.get(winner.rule)?.style().get(winner.index)
    }

    /// The winner of every property declared anywhere in the rule set, in
    /// first-seen property order.
    pub fn applied_styles(&self) -> Vec<&StyleDeclaration> {
        self.rules
            .property_names()
            .into_iter()
            .filter_map(|name| self.winning_declaration(name))
            .collect()
    }

    /// Cached winner for `property`, scanning and caching on a miss.
    fn lookup(&self, property: &str) -> Option<Winner> {
        if let Some(winner) = self.cache.borrow().get(property) {
            log::trace!(
                target: "CascadeResolver::Resolve",
                "Cache hit: {} -> {}",
                property,
                winner.id
            );
            return Some(winner.clone());
        }

        let Some(winner) = self.find_winner(property) else {
            log::debug!(target: "CascadeResolver::Resolve", "No winner for {}", property);
            return None;
        };

        log::debug!(
            target: "CascadeResolver::Resolve",
            "Resolved {} -> {}",
            property,
            winner.id
        );
        self.cache
            .borrow_mut()
            .insert(property.to_string(), winner.clone());
        Some(winner)
    }

    /// Scan the rule set for `property` without touching the cache.
    fn find_winner(&self, property: &str) -> Option<Winner> {
        let contribution = |(rule_index, rule): (usize, &crate::styles::Rule)| {
            rule.style()
                .iter()
                .enumerate()
                .rev()
                .find(|(_, d)| d.name() == property)
                .map(|(index, d)| Winner {
                    id: d.id().clone(),
                    rule: rule_index,
                    index,
                })
        };
        match self.config.scan_mode {
            ScanMode::FirstMatch => self.rules.iter().enumerate().find_map(contribution),
            ScanMode::LastMatch => self.rules.iter().enumerate().rev().find_map(contribution),
        }
    }
}
