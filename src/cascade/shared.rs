//! Lock-guarded resolver for hosts that query from several threads.
//!
//! Installing a rule set is a clear-then-rebuild-on-demand sequence, so it
//! must never interleave with a resolution. A single mutex serializes both.

use parking_lot::Mutex;

use crate::cascade::config::ResolverConfig;
use crate::cascade::resolver::{CascadeResolver, Generation};
use crate::styles::{DeclarationId, MatchedRuleSet};

/// A [`CascadeResolver`] behind a mutex.
#[derive(Debug, Default)]
pub struct SharedResolver {
    inner: Mutex<CascadeResolver>,
}

impl SharedResolver {
    /// Wrap an existing resolver.
    pub fn new(resolver: CascadeResolver) -> Self {
        Self {
            inner: Mutex::new(resolver),
        }
    }

    /// Create a shared resolver with an explicit config.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self::new(CascadeResolver::with_config(config))
    }

    /// Install a new rule set; see [`CascadeResolver::set_matched_rules`].
    pub fn set_matched_rules(&self, rules: MatchedRuleSet) -> MatchedRuleSet {
        self.inner.lock().set_matched_rules(rules)
    }

    /// Resolve `property`; see [`CascadeResolver::resolve`].
    pub fn resolve(&self, property: &str) -> Option<DeclarationId> {
        self.inner.lock().resolve(property)
    }

    /// Returns `true` if `id` is the winning declaration for `property`.
    pub fn is_winning(&self, property: &str, id: &DeclarationId) -> bool {
        self.inner.lock().is_winning(property, id)
    }

    /// Generation of the active rule set.
    pub fn generation(&self) -> Generation {
        self.inner.lock().generation()
    }

    /// Run `f` with exclusive access to the resolver, e.g. to query several
    /// declarations against one consistent rule set.
    pub fn with<R>(&self, f: impl FnOnce(&CascadeResolver) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Unwrap the resolver.
    pub fn into_inner(self) -> CascadeResolver {
        self.inner.into_inner()
    }
}

impl From<CascadeResolver> for SharedResolver {
    fn from(resolver: CascadeResolver) -> Self {
        Self::new(resolver)
    }
}
