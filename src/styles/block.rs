//! Ordered declaration block of one rule.

use std::slice;

use crate::styles::declaration::StyleDeclaration;

/// The declarations of a single rule, in source declaration order.
///
/// Order matters: when a property is declared more than once in the same
/// block, the later declaration overrides the earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBlock {
    declarations: Vec<StyleDeclaration>,
}

impl StyleBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Build a block from `(name, value)` pairs, keeping their order.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(name, value)| StyleDeclaration::new(name, value))
            .collect()
    }

    /// Append a declaration at the end of the block.
    pub fn push(&mut self, declaration: StyleDeclaration) {
        self.declarations.push(declaration);
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` if the block has no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declaration at `index` (0-based).
    pub fn get(&self, index: usize) -> Option<&StyleDeclaration> {
        self.declarations.get(index)
    }

    /// Iterate declarations in block order.
    pub fn iter(&self) -> slice::Iter<'_, StyleDeclaration> {
        self.declarations.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, StyleDeclaration> {
        self.declarations.iter_mut()
    }

    /// All declarations of `property`, in block order.
    pub fn named<'a>(
        &'a self,
        property: &'a str,
    ) -> impl DoubleEndedIterator<Item = &'a StyleDeclaration> + 'a {
        self.declarations.iter().filter(move |d| d.name() == property)
    }

    /// The declaration of `property` that is in effect within this block:
    /// the last one declared.
    pub fn last_named(&self, property: &str) -> Option<&StyleDeclaration> {
        self.declarations.iter().rev().find(|d| d.name() == property)
    }
}

impl FromIterator<StyleDeclaration> for StyleBlock {
    fn from_iter<I: IntoIterator<Item = StyleDeclaration>>(iter: I) -> Self {
        Self {
            declarations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleBlock {
    type Item = &'a StyleDeclaration;
    type IntoIter = slice::Iter<'a, StyleDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
