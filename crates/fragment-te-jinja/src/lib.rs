//! # fragment-te-jinja
//!
//! A [`fragment_te_api::TemplateEngine`] adapter backed by the `minijinja`
//! template engine. The template language itself is delegated entirely to
//! the backing engine; this crate owns the two pieces that are not:
//!
//! - a compiled-template cache keyed by a digest of the template body, so a
//!   body is compiled at most once per engine instance (bounded, with an
//!   advisory eviction signal);
//! - the configuration surface that remaps engine options (delimiters,
//!   strict-variable mode, newline trimming, digest algorithm, cache size)
//!   onto the backing engine's construction parameters.
//!
//! # Examples
//!
//! ```
//! use fragment_te_api::{Fragment, TemplateEngine};
//! use fragment_te_jinja::{EngineOptions, JinjaTemplateEngine};
//! use serde_json::json;
//!
//! let engine = JinjaTemplateEngine::new(EngineOptions::default()).unwrap();
//! let fragment = Fragment::new("snippet", "Hello {{ name }}!", json!({"name": "World"}));
//! assert_eq!(engine.process(&fragment).unwrap(), "Hello World!");
//! ```

pub mod cache;
pub mod digest;
pub mod options;

mod compiled;
mod engine;
mod syntax;

pub use cache::TemplateCache;
pub use compiled::CompiledTemplate;
pub use digest::CacheKeyAlgorithm;
pub use engine::JinjaTemplateEngine;
pub use options::{EngineOptions, SyntaxOptions};
