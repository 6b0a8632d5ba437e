//! Style data model: matched rules, their declaration blocks, and declarations.
//!
//! Ownership is a strict tree: [`MatchedRuleSet`] → [`Rule`] → [`StyleBlock`] →
//! [`StyleDeclaration`]. Nothing is shared between two rule sets.

pub mod block;
pub mod declaration;
pub mod id;
pub mod matched;
pub mod rule;

pub use block::StyleBlock;
pub use declaration::StyleDeclaration;
pub use id::DeclarationId;
pub use matched::MatchedRuleSet;
pub use rule::{Origin, Rule, RuleBuilder};
