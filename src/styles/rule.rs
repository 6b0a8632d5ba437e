//! Matched style rules and their origin.

use std::fmt;

use crate::styles::block::StyleBlock;
use crate::styles::declaration::StyleDeclaration;
use crate::styles::id::assign_ids;

// ---------------------------------------------------------------------------
// Origin
// ---------------------------------------------------------------------------

/// Where a rule comes from, as tagged by the inspector protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Origin {
    /// An author stylesheet (`"regular"`).
    #[default]
    Regular,
    /// The browser's built-in stylesheet (`"user-agent"`). Has no stylesheet id.
    UserAgent,
    /// A user stylesheet (`"user"`).
    User,
    /// Injected by an extension (`"injected"`).
    Injected,
    /// Created through the inspector itself (`"inspector"`).
    Inspector,
    /// Any tag this crate does not know about, kept verbatim.
    Other(String),
}

impl Origin {
    /// The protocol tag for this origin.
    pub fn as_str(&self) -> &str {
        match self {
            Origin::Regular => "regular",
            Origin::UserAgent => "user-agent",
            Origin::User => "user",
            Origin::Injected => "injected",
            Origin::Inspector => "inspector",
            Origin::Other(tag) => tag,
        }
    }
}

impl From<&str> for Origin {
    fn from(tag: &str) -> Self {
        match tag {
            "regular" => Origin::Regular,
            "user-agent" => Origin::UserAgent,
            "user" => Origin::User,
            "injected" => Origin::Injected,
            "inspector" => Origin::Inspector,
            other => Origin::Other(other.to_string()),
        }
    }
}

impl From<String> for Origin {
    fn from(tag: String) -> Self {
        Origin::from(tag.as_str())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A style rule that matched the inspected element.
///
/// Constructing a rule assigns every declaration in its block a stable
/// identifier derived from the stylesheet id, the selector text, and the
/// declaration's 1-based position in the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    origin: Origin,
    selector_text: String,
    stylesheet_id: String,
    style: StyleBlock,
}

impl Rule {
    /// Create a rule and assign identifiers to its declarations.
    ///
    /// Pass an empty `stylesheet_id` when the origin has none (user-agent rules).
    pub fn new(
        origin: Origin,
        selector_text: impl Into<String>,
        stylesheet_id: impl Into<String>,
        mut style: StyleBlock,
    ) -> Self {
        let selector_text = selector_text.into();
        let stylesheet_id = stylesheet_id.into();
        assign_ids(&mut style, &stylesheet_id, &selector_text);
        Self {
            origin,
            selector_text,
            stylesheet_id,
            style,
        }
    }

    /// Start building a rule for `selector_text`.
    pub fn builder(selector_text: impl Into<String>) -> RuleBuilder {
        RuleBuilder::new(selector_text)
    }

    /// Rule origin.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Selector list text, e.g. `".foo, .bar"`.
    pub fn selector_text(&self) -> &str {
        &self.selector_text
    }

    /// Stylesheet id; empty when the origin has none.
    pub fn stylesheet_id(&self) -> &str {
        &self.stylesheet_id
    }

    /// The rule's declaration block.
    pub fn style(&self) -> &StyleBlock {
        &self.style
    }
}

// ---------------------------------------------------------------------------
// RuleBuilder
// ---------------------------------------------------------------------------

/// Fluent construction of a [`Rule`].
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    origin: Origin,
    selector_text: String,
    stylesheet_id: String,
    style: StyleBlock,
}

impl RuleBuilder {
    /// Create a builder for a regular-origin rule with no stylesheet id.
    pub fn new(selector_text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Regular,
            selector_text: selector_text.into(),
            stylesheet_id: String::new(),
            style: StyleBlock::new(),
        }
    }

    /// Set the origin (builder).
    pub fn origin(mut self, origin: impl Into<Origin>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the stylesheet id (builder).
    pub fn stylesheet(mut self, stylesheet_id: impl Into<String>) -> Self {
        self.stylesheet_id = stylesheet_id.into();
        self
    }

    /// Append a declaration (builder).
    pub fn declare(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push(StyleDeclaration::new(name, value));
        self
    }

    /// Finish the rule, assigning declaration identifiers.
    pub fn build(self) -> Rule {
        Rule::new(self.origin, self.selector_text, self.stylesheet_id, self.style)
    }
}
