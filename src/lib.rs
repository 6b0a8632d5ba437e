//! # cascade-inspector
//!
//! Decides which declaration is in effect for each property of an inspected
//! element, given the rules an inspector reports as matching it.
//!
//! ## Core Systems
//!
//! - **[`styles`]**: matched rules, declaration blocks, and declarations with
//!   stable `<sheet>/<selector>#<n>` identifiers
//! - **[`cascade`]**: the memoizing [`CascadeResolver`] and its lock-guarded
//!   [`SharedResolver`]
//! - **[`protocol`]**: serde records for inspector `CSS` domain payloads
//! - **[`error`]**: the crate [`Error`] type
//!
//! ## Example
//!
//! ```
//! use cascade_inspector::{CascadeResolver, MatchedRuleSet, Rule};
//!
//! let rules = MatchedRuleSet::new(vec![
//!     Rule::builder(".foo")
//!         .stylesheet("7")
//!         .declare("color", "red")
//!         .declare("color", "blue")
//!         .build(),
//! ]);
//!
//! let mut resolver = CascadeResolver::new();
//! resolver.set_matched_rules(rules);
//!
//! let winner = resolver.resolve("color").unwrap();
//! assert_eq!(winner.as_str(), "7/.foo#2");
//! ```

pub mod cascade;
pub mod error;
pub mod protocol;
pub mod styles;

pub use cascade::{CascadeResolver, Generation, ResolverConfig, ScanMode, SharedResolver};
pub use error::{Error, Result};
pub use styles::{DeclarationId, MatchedRuleSet, Origin, Rule, RuleBuilder, StyleBlock, StyleDeclaration};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use cascade_inspector_macros::{matched_rules, rule};
