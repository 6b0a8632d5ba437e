//! A single `name: value` pair inside a rule's declaration block.

use std::cell::Cell;

use crate::cascade::resolver::{CascadeResolver, Generation};
use crate::styles::id::DeclarationId;

/// One property declaration of a matched rule, e.g. `color: red`.
///
/// The identifier is assigned when the owning [`Rule`] is constructed. Whether
/// the declaration is in effect is asked of a [`CascadeResolver`] through
/// [`is_enabled`](Self::is_enabled).
///
/// [`Rule`]: crate::styles::Rule
#[derive(Debug, Clone)]
pub struct StyleDeclaration {
    name: String,
    value: String,
    pub(crate) id: DeclarationId,
    /// Last answer of `is_enabled`, tagged with the resolver generation it was
    /// computed against.
    enabled: Cell<Option<(Generation, bool)>>,
}

impl StyleDeclaration {
    /// Create a declaration that is not yet part of a rule.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            id: DeclarationId::default(),
            enabled: Cell::new(None),
        }
    }

    /// Property name, e.g. `"color"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Property value as reported by the inspector, e.g. `"red"`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Stable identifier (`<sheet>/<selector>#<n>`).
    pub fn id(&self) -> &DeclarationId {
        &self.id
    }

    /// Returns `true` if this declaration is the cascade winner for its
    /// property name in the resolver's current rule set.
    ///
    /// The first call resolves the property if the resolver has not done so
    /// yet. The answer is memoized per declaration, but only for the resolver
    /// generation it was computed against: installing a new rule set makes
    /// the next call ask the resolver again.
    pub fn is_enabled(&self, resolver: &CascadeResolver) -> bool {
        let generation = resolver.generation();
        if let Some((computed_for, enabled)) = self.enabled.get() {
            if computed_for == generation {
                return enabled;
            }
        }

        let enabled = self.id.is_assigned() && resolver.is_winning(&self.name, &self.id);
        self.enabled.set(Some((generation, enabled)));
        enabled
    }
}

impl PartialEq for StyleDeclaration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value && self.id == other.id
    }
}

impl Eq for StyleDeclaration {}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for StyleDeclaration {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
