//! Engine configuration options.
//!
//! [`EngineOptions`] holds cache settings and the nested [`SyntaxOptions`]
//! passed to the backing engine. Both deserialize from the host framework's
//! JSON/YAML configuration under camelCase keys (`cacheKeyAlgorithm`,
//! `cacheSize`, `syntax.strictVariables`, ...) and are read once at engine
//! construction, never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use fragment_te_api::{TemplateEngineError, TemplateResult};

/// Cache settings plus backing-engine settings for a Jinja template engine.
///
/// # Examples
///
/// ```
/// use fragment_te_jinja::EngineOptions;
///
/// let options = EngineOptions::default()
///     .with_cache_size(100)
///     .with_cache_key_algorithm("SHA-256");
/// assert_eq!(options.cache_size, Some(100));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOptions {
    /// Name of the digest algorithm used to fingerprint template bodies
    /// for cache keys (`"MD5"`, `"SHA-1"`, `"SHA-256"`, `"SHA-512"`).
    pub cache_key_algorithm: String,
    /// Upper bound on cached compiled templates. `None` means unbounded,
    /// which risks resource exhaustion under an unbounded stream of
    /// distinct template bodies.
    pub cache_size: Option<u64>,
    /// Syntax options passed to the backing engine.
    pub syntax: SyntaxOptions,
}

impl EngineOptions {
    /// Reads options from a JSON configuration object, as supplied by the
    /// host framework. Unknown digest names are only rejected later, at
    /// engine construction.
    pub fn from_json(json: Value) -> TemplateResult<Self> {
        serde_json::from_value(json)
            .map_err(|e| TemplateEngineError::Configuration(format!("invalid engine options: {e}")))
    }

    /// Sets the digest algorithm used for cache keys.
    #[must_use]
    pub fn with_cache_key_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.cache_key_algorithm = algorithm.into();
        self
    }

    /// Sets the maximum number of cached compiled templates.
    #[must_use]
    pub const fn with_cache_size(mut self, cache_size: u64) -> Self {
        self.cache_size = Some(cache_size);
        self
    }

    /// Sets the syntax options.
    #[must_use]
    pub fn with_syntax(mut self, syntax: SyntaxOptions) -> Self {
        self.syntax = syntax;
        self
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            cache_key_algorithm: "MD5".to_string(),
            cache_size: None,
            syntax: SyntaxOptions::default(),
        }
    }
}

impl fmt::Display for EngineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EngineOptions{{cacheKeyAlgorithm='{}', cacheSize={:?}, syntax={:?}}}",
            self.cache_key_algorithm, self.cache_size, self.syntax
        )
    }
}

/// Custom syntax for the backing engine.
///
/// Delimiter defaults follow the conventional Jinja-style markup: `{# #}`
/// for comments, `{% %}` for execution tags, `{{ }}` for printing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyntaxOptions {
    /// Strict mode: referencing a missing variable or attribute is a hard
    /// error instead of rendering as empty. Disabled by default.
    pub strict_variables: bool,
    /// Whether a newline trailing the template body is trimmed from the
    /// output. Enabled by default.
    pub new_line_trimming: bool,
    /// Whether literal decimals are treated as 32-bit integers rather than
    /// 64-bit ones. The backing engine has a single integer representation,
    /// so this flag is accepted for configuration compatibility but has no
    /// observable effect.
    pub literal_decimal_treated_as_integer: bool,
    /// Comment opening delimiter. Defaults to `{#`.
    pub delimiter_comment_open: String,
    /// Comment closing delimiter. Defaults to `#}`.
    pub delimiter_comment_close: String,
    /// Execution tag opening delimiter. Defaults to `{%`.
    pub delimiter_execute_open: String,
    /// Execution tag closing delimiter. Defaults to `%}`.
    pub delimiter_execute_close: String,
    /// Print tag opening delimiter. Defaults to `{{`.
    pub delimiter_print_open: String,
    /// Print tag closing delimiter. Defaults to `}}`.
    pub delimiter_print_close: String,
    /// Marker enabling whitespace trimming adjacent to a tag. The backing
    /// engine only supports `-`; any other value fails engine construction.
    pub whitespace_trim: String,
    /// When non-empty, the render context is nested one level deeper under
    /// a variable of this name, so payload keys containing characters
    /// illegal in bare identifiers stay reachable (e.g.
    /// `{{ root['data-dashed'] }}`). Empty by default: the context is
    /// passed unwrapped.
    pub wrapping_root_node_name: String,
}

impl SyntaxOptions {
    /// Enables or disables strict variable resolution.
    #[must_use]
    pub const fn with_strict_variables(mut self, strict_variables: bool) -> Self {
        self.strict_variables = strict_variables;
        self
    }

    /// Enables or disables trailing-newline trimming.
    #[must_use]
    pub const fn with_new_line_trimming(mut self, new_line_trimming: bool) -> Self {
        self.new_line_trimming = new_line_trimming;
        self
    }

    /// Sets the comment delimiters.
    #[must_use]
    pub fn with_comment_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.delimiter_comment_open = open.into();
        self.delimiter_comment_close = close.into();
        self
    }

    /// Sets the execution tag delimiters.
    #[must_use]
    pub fn with_execute_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.delimiter_execute_open = open.into();
        self.delimiter_execute_close = close.into();
        self
    }

    /// Sets the print tag delimiters.
    #[must_use]
    pub fn with_print_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.delimiter_print_open = open.into();
        self.delimiter_print_close = close.into();
        self
    }

    /// Sets the wrapping root node name. An empty string leaves the
    /// context unwrapped.
    #[must_use]
    pub fn with_wrapping_root_node_name(mut self, name: impl Into<String>) -> Self {
        self.wrapping_root_node_name = name.into();
        self
    }
}

impl Default for SyntaxOptions {
    fn default() -> Self {
        Self {
            strict_variables: false,
            new_line_trimming: true,
            literal_decimal_treated_as_integer: false,
            delimiter_comment_open: "{#".to_string(),
            delimiter_comment_close: "#}".to_string(),
            delimiter_execute_open: "{%".to_string(),
            delimiter_execute_close: "%}".to_string(),
            delimiter_print_open: "{{".to_string(),
            delimiter_print_close: "}}".to_string(),
            whitespace_trim: "-".to_string(),
            wrapping_root_node_name: String::new(),
        }
    }
}
