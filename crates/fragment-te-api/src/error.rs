//! Error types shared by all template engine adapters.
//!
//! Every failure crossing the engine boundary is reported as a
//! [`TemplateEngineError`] with enough type information for the caller to
//! distinguish construction-time configuration problems from per-call
//! compilation, variable-resolution, and rendering failures. Adapters
//! perform no silent recovery.

use thiserror::Error;

/// The error type for template engine construction and rendering.
#[derive(Error, Debug)]
pub enum TemplateEngineError {
    // ── Construction ─────────────────────────────────────────────────

    /// The engine options are invalid (e.g. an unknown digest algorithm
    /// or a syntax option the backing engine cannot express). Fatal to
    /// engine construction; no partial engine is produced.
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ── Per-call failures ────────────────────────────────────────────

    /// The template body failed to parse under the configured syntax.
    /// The compiled-template cache is left unpopulated for this body, so
    /// a corrected body on a later call compiles fresh.
    #[error("Template compilation failed: {detail}")]
    Compilation {
        /// The backing engine's parse error message.
        detail: String,
    },

    /// Strict mode only: the template referenced a variable or attribute
    /// missing from the render context. The backing engine reports root
    /// and nested misses under a single error kind, which is preserved
    /// in `detail`.
    #[error("Undefined variable: {detail}")]
    UndefinedVariable {
        /// The backing engine's resolution error message.
        detail: String,
    },

    /// Evaluation failed while producing output (anything other than a
    /// variable-resolution failure). Non-retryable without changing the
    /// template or context.
    #[error("Template rendering failed: {detail}")]
    Render {
        /// The backing engine's evaluation error message.
        detail: String,
    },
}

impl TemplateEngineError {
    /// Returns `true` for failures that are fatal to engine construction.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// A convenience type alias for `Result<T, TemplateEngineError>`.
pub type TemplateResult<T> = Result<T, TemplateEngineError>;
