//! The Jinja-backed template engine.
//!
//! Construction resolves the configured options into a base engine
//! environment and a fingerprint cache; rendering looks up (or compiles)
//! the fragment body and evaluates it against the fragment payload. One
//! instance per configuration, created at host startup and shared across
//! caller threads thereafter.

use std::sync::Arc;

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use tracing::{error, info, trace};

use fragment_te_api::{Fragment, TemplateEngine, TemplateEngineError, TemplateResult};

use crate::cache::TemplateCache;
use crate::compiled::CompiledTemplate;
use crate::digest::CacheKeyAlgorithm;
use crate::options::{EngineOptions, SyntaxOptions};
use crate::syntax;

/// A [`TemplateEngine`] that delegates template parsing and evaluation to
/// the backing Jinja engine, caching compiled templates by a digest of
/// their body.
///
/// # Examples
///
/// ```
/// use fragment_te_api::{Fragment, TemplateEngine};
/// use fragment_te_jinja::{EngineOptions, JinjaTemplateEngine};
/// use serde_json::json;
///
/// let engine = JinjaTemplateEngine::new(EngineOptions::default()).unwrap();
/// let fragment = Fragment::new("snippet", "Hello {{ name }}!", json!({"name": "World"}));
/// assert_eq!(engine.process(&fragment).unwrap(), "Hello World!");
/// ```
#[derive(Debug)]
pub struct JinjaTemplateEngine {
    /// Base environment carrying syntax and strictness configuration.
    /// Holds no templates; compiled templates clone it.
    environment: Environment<'static>,
    cache: TemplateCache,
    algorithm: CacheKeyAlgorithm,
    wrapping_root_node_name: String,
}

impl JinjaTemplateEngine {
    /// Constructs an engine from the given options.
    ///
    /// Fails with [`TemplateEngineError::Configuration`] when the digest
    /// algorithm is unknown or the syntax options cannot be expressed by
    /// the backing engine. No partial engine is produced on failure.
    pub fn new(options: EngineOptions) -> TemplateResult<Self> {
        let algorithm = CacheKeyAlgorithm::parse(&options.cache_key_algorithm)?;
        let environment = build_environment(&options.syntax)?;
        let cache = TemplateCache::new(options.cache_size);
        info!("<JinjaTemplateEngine> instance created with {options}");
        Ok(Self {
            environment,
            cache,
            algorithm,
            wrapping_root_node_name: options.syntax.wrapping_root_node_name,
        })
    }

    /// The number of compiled templates currently cached.
    pub fn cached_templates(&self) -> usize {
        self.cache.len()
    }

    /// How many cache entries have been evicted due to the size bound.
    pub fn evictions(&self) -> u64 {
        self.cache.evictions()
    }

    fn compiled(&self, fragment: &Fragment) -> TemplateResult<Arc<CompiledTemplate>> {
        let key = self.algorithm.fingerprint(fragment.body());
        self.cache.get_or_compile(key, || {
            trace!(fragment = %fragment, "compiling fragment");
            CompiledTemplate::compile(&self.environment, fragment.body()).map_err(|e| {
                error!("Could not compile fragment [{}]: {e}", fragment.abbreviate());
                TemplateEngineError::Compilation {
                    detail: e.to_string(),
                }
            })
        })
    }

    /// Builds the render context, nesting the payload one level under the
    /// wrapping root node when one is configured.
    fn context_for(&self, fragment: &Fragment) -> minijinja::Value {
        if self.wrapping_root_node_name.is_empty() {
            minijinja::Value::from_serialize(fragment.payload())
        } else {
            let mut wrapped = serde_json::Map::new();
            wrapped.insert(self.wrapping_root_node_name.clone(), fragment.payload().clone());
            minijinja::Value::from_serialize(&serde_json::Value::Object(wrapped))
        }
    }
}

impl TemplateEngine for JinjaTemplateEngine {
    fn process(&self, fragment: &Fragment) -> TemplateResult<String> {
        let template = self.compiled(fragment)?;
        trace!(fragment = %fragment, "processing fragment");
        let context = self.context_for(fragment);
        template
            .evaluate(&context)
            .map_err(|e| classify_evaluation_error(&e, fragment))
    }

    fn name(&self) -> &'static str {
        "jinja"
    }
}

/// Resolves syntax options into a configured base environment.
fn build_environment(options: &SyntaxOptions) -> TemplateResult<Environment<'static>> {
    let mut env = Environment::new();
    env.set_syntax(syntax::compose(options)?);
    env.set_undefined_behavior(if options.strict_variables {
        UndefinedBehavior::Strict
    } else {
        UndefinedBehavior::Lenient
    });
    env.set_keep_trailing_newline(!options.new_line_trimming);
    Ok(env)
}

/// Maps an evaluation failure onto the adapter's error kinds. Strict-mode
/// variable-resolution failures are surfaced separately from other render
/// failures; the backing engine reports root and nested misses under one
/// kind, preserved in the detail message.
fn classify_evaluation_error(
    err: &minijinja::Error,
    fragment: &Fragment,
) -> TemplateEngineError {
    error!("Could not apply context to fragment [{}]: {err}", fragment.abbreviate());
    match err.kind() {
        ErrorKind::UndefinedError => TemplateEngineError::UndefinedVariable {
            detail: err.to_string(),
        },
        _ => TemplateEngineError::Render {
            detail: err.to_string(),
        },
    }
}
