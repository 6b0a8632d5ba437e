//! `rule!` / `matched_rules!`: build matched rules from CSS-like tokens.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{braced, parenthesized, Error, Ident, LitFloat, LitInt, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A single parsed value token, kept as CSS text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CssValue {
    /// A keyword like `red`, `sans-serif`, `auto`.
    Ident(String),
    /// A number, optionally followed by a unit (`0`, `1.5`, `10px`, `50%`).
    Number(String),
    /// A hex color including the `#`.
    Hash(String),
    /// A string literal, spliced verbatim (escape hatch for `1em` and the like,
    /// which Rust cannot tokenize).
    Raw(String),
    /// A function call such as `rgb(1, 2, 3)`.
    Function(String, Vec<CssValue>),
    /// A `,` separator.
    Comma,
}

/// A single declaration: `property-name: value1 value2;`
#[derive(Debug, Clone)]
pub(crate) struct CssDeclaration {
    pub name: String,
    pub values: Vec<CssValue>,
}

/// One rule: `[origin] "selector" [in "sheet"] { declarations }`.
#[derive(Debug)]
pub(crate) struct RuleInput {
    pub origin: String,
    pub selector: String,
    pub stylesheet: Option<String>,
    pub declarations: Vec<CssDeclaration>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Map an origin keyword to its protocol tag.
fn origin_tag(ident: &Ident) -> Result<&'static str> {
    match ident.to_string().as_str() {
        "regular" => Ok("regular"),
        "user_agent" => Ok("user-agent"),
        "user" => Ok("user"),
        "injected" => Ok("injected"),
        "inspector" => Ok("inspector"),
        other => Err(Error::new(
            ident.span(),
            format!(
                "unknown origin `{}`; expected one of regular, user_agent, user, injected, inspector",
                other
            ),
        )),
    }
}

impl Parse for RuleInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let origin = if input.peek(Ident) {
            let ident: Ident = input.parse()?;
            origin_tag(&ident)?.to_string()
        } else {
            "regular".to_string()
        };

        let selector = input.parse::<LitStr>()?.value();

        let stylesheet = if input.peek(Token![in]) {
            input.parse::<Token![in]>()?;
            Some(input.parse::<LitStr>()?.value())
        } else {
            None
        };

        let content;
        braced!(content in input);
        let mut declarations = Vec::new();
        while !content.is_empty() {
            declarations.push(parse_declaration(&content)?);
        }

        Ok(RuleInput {
            origin,
            selector,
            stylesheet,
            declarations,
        })
    }
}

/// Parse a property name: optional leading dashes, then kebab-case idents.
fn parse_property_name(input: ParseStream) -> Result<(String, Span)> {
    let mut name = String::new();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        name.push('-');
    }

    // CSS words such as `box`, `self`, `type` are Rust keywords.
    let first = Ident::parse_any(input)?;
    let span = first.span();
    name.push_str(&first.to_string());

    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let next = Ident::parse_any(input)?;
        name.push('-');
        name.push_str(&next.to_string());
    }
    Ok((name, span))
}

/// Parse a single declaration: `property-name: values;`
pub(crate) fn parse_declaration(input: ParseStream) -> Result<CssDeclaration> {
    let (name, name_span) = parse_property_name(input)?;
    input.parse::<Token![:]>()?;

    let mut values = Vec::new();
    while !input.peek(Token![;]) {
        values.push(parse_css_value(input)?);
    }
    input.parse::<Token![;]>()?;

    if values.is_empty() {
        return Err(Error::new(name_span, format!("property `{}` has no value", name)));
    }

    Ok(CssDeclaration { name, values })
}

/// Parse a number literal plus any unit suffix into CSS text.
fn parse_number(input: ParseStream, sign: &str) -> Result<CssValue> {
    let (digits, suffix) = if input.peek(LitFloat) {
        let lit: LitFloat = input.parse()?;
        (lit.base10_digits().to_string(), lit.suffix().to_string())
    } else {
        let lit: LitInt = input.parse()?;
        (lit.base10_digits().to_string(), lit.suffix().to_string())
    };

    // Units arrive as the literal suffix (`10px`); only `%` is a separate token.
    let mut text = format!("{sign}{digits}{suffix}");
    if suffix.is_empty() && input.peek(Token![%]) {
        input.parse::<Token![%]>()?;
        text.push('%');
    }
    Ok(CssValue::Number(text))
}

/// Parse a single value token.
pub(crate) fn parse_css_value(input: ParseStream) -> Result<CssValue> {
    if input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
        return Ok(CssValue::Comma);
    }

    // Hash color: `#` followed by an identifier or an integer (+ ident tail).
    if input.peek(Token![#]) {
        input.parse::<Token![#]>()?;
        let hex_str = if input.peek(Ident::peek_any) {
            Ident::parse_any(input)?.to_string()
        } else if input.peek(LitFloat) {
            // Digits with an `e` (`#1e3`) lex as a float.
            let lit: LitFloat = input.parse()?;
            lit.to_string()
        } else if input.peek(LitInt) {
            let lit: LitInt = input.parse()?;
            let mut s = lit.to_string();
            if input.peek(Ident::peek_any) {
                s.push_str(&Ident::parse_any(input)?.to_string());
            }
            s
        } else {
            return Err(input.error("expected hex color value after `#`"));
        };
        return Ok(CssValue::Hash(format!("#{}", hex_str)));
    }

    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        return Ok(CssValue::Raw(lit.value()));
    }

    if input.peek(LitFloat) || input.peek(LitInt) {
        return parse_number(input, "");
    }

    if input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        if input.peek(LitFloat) || input.peek(LitInt) {
            return parse_number(input, "-");
        }
        return Err(input.error("expected a number after `-`"));
    }

    if input.peek(Ident::peek_any) {
        let ident = Ident::parse_any(input)?;
        let mut word = ident.to_string();
        while input.peek(Token![-]) && input.peek2(Ident::peek_any) {
            input.parse::<Token![-]>()?;
            let next = Ident::parse_any(input)?;
            word.push('-');
            word.push_str(&next.to_string());
        }

        if input.peek(syn::token::Paren) {
            let args;
            parenthesized!(args in input);
            let mut inner = Vec::new();
            while !args.is_empty() {
                inner.push(parse_css_value(&args)?);
            }
            return Ok(CssValue::Function(word, inner));
        }
        return Ok(CssValue::Ident(word));
    }

    Err(input.error("unexpected token in CSS value"))
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Join values into CSS text: space separated, commas hug the left value.
pub(crate) fn render_values(values: &[CssValue]) -> String {
    let mut out = String::new();
    for value in values {
        if *value == CssValue::Comma {
            out.push(',');
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        match value {
            CssValue::Ident(s) | CssValue::Number(s) | CssValue::Hash(s) | CssValue::Raw(s) => {
                out.push_str(s)
            }
            CssValue::Function(name, args) => {
                out.push_str(name);
                out.push('(');
                out.push_str(&render_values(args));
                out.push(')');
            }
            CssValue::Comma => {}
        }
    }
    out
}

/// Generate the builder chain for one rule.
fn generate_rule(rule: &RuleInput) -> TokenStream {
    let selector = &rule.selector;
    let origin = &rule.origin;
    let stylesheet = rule
        .stylesheet
        .as_ref()
        .map(|sheet| quote! { .stylesheet(#sheet) });
    let declarations = rule.declarations.iter().map(|decl| {
        let name = &decl.name;
        let value = render_values(&decl.values);
        quote! { .declare(#name, #value) }
    });

    quote! {
        cascade_inspector::RuleBuilder::new(#selector)
            .origin(#origin)
            #stylesheet
            #(#declarations)*
            .build()
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Entry point for `rule!`.
pub(crate) fn rule_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: RuleInput = syn::parse2(input)?;
    Ok(generate_rule(&parsed))
}

/// Comma-separated rules, lowest precedence first.
struct RuleList {
    rules: Punctuated<RuleInput, Token![,]>,
}

impl Parse for RuleList {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(RuleList {
            rules: Punctuated::parse_terminated(input)?,
        })
    }
}

/// Entry point for `matched_rules!`.
pub(crate) fn matched_rules_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: RuleList = syn::parse2(input)?;
    let rules = parsed.rules.iter().map(generate_rule);
    Ok(quote! {
        cascade_inspector::MatchedRuleSet::new(::std::vec![#(#rules),*])
    })
}

// ===========================================================================
// Tests
// ===========================================================================
