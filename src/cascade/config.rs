//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// How the resolver walks the matched rule set when looking for a winner.
///
/// Within a single rule both modes agree: the last declaration of the
/// property in the block wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanMode {
    /// Stop at the first rule, in supplied order, that declares the property.
    ///
    /// With rules in ascending precedence order this picks the
    /// lowest-precedence rule; feed [`MatchedRuleSet::reversed`] to get
    /// last-rule-wins results in this mode.
    ///
    /// [`MatchedRuleSet::reversed`]: crate::styles::MatchedRuleSet::reversed
    #[default]
    FirstMatch,
    /// Consult every rule and keep the last one, in supplied order, that
    /// declares the property (highest precedence wins).
    LastMatch,
}

/// Configuration for a [`CascadeResolver`](crate::cascade::CascadeResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ResolverConfig {
    /// Rule scan strategy.
    pub scan_mode: ScanMode,
    /// Log a warning when an installed rule set contains colliding
    /// declaration identifiers.
    pub warn_on_id_collision: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            scan_mode: ScanMode::FirstMatch,
            warn_on_id_collision: true,
        }
    }
}

impl ResolverConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan mode (builder).
    pub fn with_scan_mode(mut self, scan_mode: ScanMode) -> Self {
        self.scan_mode = scan_mode;
        self
    }

    /// Enable or disable identifier collision warnings (builder).
    pub fn with_collision_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_id_collision = enabled;
        self
    }
}
