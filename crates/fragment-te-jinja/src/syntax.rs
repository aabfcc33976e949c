//! Maps [`SyntaxOptions`] onto the backing engine's syntax configuration.
//!
//! A pure adapter layer: delimiter fields are copied 1:1 onto the engine's
//! builder. The one remap the engine cannot express, a whitespace-trim
//! marker other than `-`, is rejected here so misconfiguration fails at
//! construction instead of silently diverging at render time.

use minijinja::syntax::SyntaxConfig;

use fragment_te_api::{TemplateEngineError, TemplateResult};

use crate::options::SyntaxOptions;

/// The only whitespace-trim marker the backing engine understands.
const SUPPORTED_WHITESPACE_TRIM: &str = "-";

/// Composes the backing engine's syntax configuration from the options.
pub(crate) fn compose(options: &SyntaxOptions) -> TemplateResult<SyntaxConfig> {
    if options.whitespace_trim != SUPPORTED_WHITESPACE_TRIM {
        return Err(TemplateEngineError::Configuration(format!(
            "unsupported whitespace trim marker '{}': the engine only supports '{SUPPORTED_WHITESPACE_TRIM}'",
            options.whitespace_trim
        )));
    }

    let mut builder = SyntaxConfig::builder();
    builder
        .block_delimiters(
            options.delimiter_execute_open.clone(),
            options.delimiter_execute_close.clone(),
        )
        .variable_delimiters(
            options.delimiter_print_open.clone(),
            options.delimiter_print_close.clone(),
        )
        .comment_delimiters(
            options.delimiter_comment_open.clone(),
            options.delimiter_comment_close.clone(),
        );
    builder
        .build()
        .map_err(|e| TemplateEngineError::Configuration(format!("invalid syntax delimiters: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_default_syntax() {
        assert!(compose(&SyntaxOptions::default()).is_ok());
    }

    #[test]
    fn test_compose_custom_delimiters() {
        let options = SyntaxOptions::default()
            .with_execute_delimiters("<<", ">>")
            .with_print_delimiters("<|", "|>")
            .with_comment_delimiters("/*", "*/");
        assert!(compose(&options).is_ok());
    }

    #[test]
    fn test_compose_rejects_foreign_trim_marker() {
        let mut options = SyntaxOptions::default();
        options.whitespace_trim = "~".to_string();
        let err = compose(&options).unwrap_err();
        assert!(matches!(err, TemplateEngineError::Configuration(_)));
        assert!(err.to_string().contains('~'));
    }

    #[test]
    fn test_compose_rejects_empty_delimiters() {
        let options = SyntaxOptions::default().with_print_delimiters("", "");
        assert!(compose(&options).is_err());
    }
}
