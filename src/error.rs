//! Crate error type.
//!
//! Resolution itself never fails: a property with no matching declaration is a
//! normal `None`. Errors only arise while turning external records into rules.

/// Errors from building rules and rule sets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An inspector protocol record could not be decoded (missing
    /// `selectorList`, `style`, `cssProperties`, wrong types, bad JSON).
    #[error("malformed {context} record: {source}")]
    Malformed {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Shorthand result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(context: &'static str, source: serde_json::Error) -> Self {
        Error::Malformed { context, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_context() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = Error::malformed("rule", source);
        assert!(err.to_string().starts_with("malformed rule record: "));
    }
}
