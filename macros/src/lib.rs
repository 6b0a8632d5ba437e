//! Proc macros for cascade-inspector: `rule!` and `matched_rules!`.
//!
//! This crate is not meant to be used directly; enable the `macros` feature on
//! `cascade-inspector`.

use proc_macro::TokenStream;

mod rule_macro;

/// Build a single `cascade_inspector::Rule`.
///
/// # Syntax
///
/// ```ignore
/// [origin] "selector" [in "stylesheet-id"] { name: value; ... }
/// ```
///
/// - `origin` is one of `regular` (default), `user_agent`, `user`, `injected`,
///   `inspector`.
/// - Values are written as CSS tokens: keywords, numbers with units, `50%`,
///   `#fff`, commas, and function calls. A string literal is spliced
///   verbatim, for values Rust cannot tokenize such as `"1em"`.
///
/// # Example
///
/// ```ignore
/// let rule = rule!(".foo" in "7" { color: red; margin: 0; });
/// ```
#[proc_macro]
pub fn rule(input: TokenStream) -> TokenStream {
    rule_macro::rule_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Build a `cascade_inspector::MatchedRuleSet` from comma-separated rules,
/// lowest precedence first. Each rule uses the [`rule!`] syntax.
///
/// # Example
///
/// ```ignore
/// let rules = matched_rules![
///     user_agent "p" { display: block; },
///     ".foo" in "7" { color: red; },
/// ];
/// ```
#[proc_macro]
pub fn matched_rules(input: TokenStream) -> TokenStream {
    rule_macro::matched_rules_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
