//! Stable declaration identifiers.
//!
//! Every declaration in a rule gets `<stylesheet id>/<selector text>#<ordinal>`,
//! with the ordinal counted from 1 in block order. The same input always yields
//! the same identifiers, so UI layers can correlate a declaration across redraws
//! without relying on object identity.

use std::fmt;

use crate::styles::block::StyleBlock;

/// Deterministic identifier of a declaration within a matched rule set.
///
/// An empty identifier means the declaration has not been placed in a [`Rule`]
/// yet.
///
/// [`Rule`]: crate::styles::Rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclarationId(String);

impl DeclarationId {
    /// Build the identifier of the `ordinal`-th (1-based) declaration of a rule.
    pub fn new(stylesheet_id: &str, selector_text: &str, ordinal: usize) -> Self {
        Self(format!("{stylesheet_id}/{selector_text}#{ordinal}"))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` once the owning rule has assigned this identifier.
    pub fn is_assigned(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeclarationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DeclarationId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DeclarationId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Assign identifiers to every declaration in `block`, in block order.
///
/// No uniqueness check happens here: two rules sharing both stylesheet id and
/// selector text produce colliding identifiers.
pub(crate) fn assign_ids(block: &mut StyleBlock, stylesheet_id: &str, selector_text: &str) {
    for (index, declaration) in block.iter_mut().enumerate() {
        declaration.id = DeclarationId::new(stylesheet_id, selector_text, index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::declaration::StyleDeclaration;

    #[test]
    fn format_matches_sheet_selector_ordinal() {
        let id = DeclarationId::new("7", ".foo", 2);
        assert_eq!(id.as_str(), "7/.foo#2");
        assert_eq!(id.to_string(), "7/.foo#2");
    }

    #[test]
    fn empty_stylesheet_keeps_leading_slash() {
        let id = DeclarationId::new("", "p", 1);
        assert_eq!(id, "/p#1");
    }

    #[test]
    fn default_is_unassigned() {
        assert!(!DeclarationId::default().is_assigned());
        assert!(DeclarationId::new("", "", 1).is_assigned());
    }

    #[test]
    fn assign_ids_counts_from_one() {
        let mut block = StyleBlock::from_pairs([("color", "red"), ("margin", "0"), ("color", "blue")]);
        assign_ids(&mut block, "7", ".foo");

        let ids: Vec<&str> = block.iter().map(|d| d.id().as_str()).collect();
        assert_eq!(ids, vec!["7/.foo#1", "7/.foo#2", "7/.foo#3"]);
    }

    #[test]
    fn assign_ids_overwrites_previous_assignment() {
        let mut block = StyleBlock::new();
        block.push(StyleDeclaration::new("color", "red"));
        assign_ids(&mut block, "1", "a");
        assign_ids(&mut block, "2", "b");
        assert_eq!(block.get(0).unwrap().id(), "2/b#1");
    }
}
