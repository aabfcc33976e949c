//! The fingerprint-keyed compiled-template cache.
//!
//! Keys are the raw digest bytes of a template body; values are the
//! compiled templates. Entries are evicted only by the size bound (no TTL),
//! and never invalidated by content change: a changed body simply
//! fingerprints to a different key. Eviction order is implementation
//! defined; each eviction emits a warning, since it means the configured
//! size is too small for the workload.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::warn;

use fragment_te_api::TemplateResult;

use crate::compiled::CompiledTemplate;

/// A bounded, thread-safe mapping from body fingerprints to compiled
/// templates.
///
/// Lookups take the read lock only; a cache miss compiles outside any lock
/// and then inserts under the write lock. Concurrent misses on the same key
/// may compile twice, but compilation is pure in the body, so either
/// result is equivalent and the first inserted wins.
#[derive(Debug)]
pub struct TemplateCache {
    entries: RwLock<HashMap<Vec<u8>, Arc<CompiledTemplate>>>,
    max_size: Option<u64>,
    evictions: AtomicU64,
}

impl TemplateCache {
    /// Creates a cache bounded to `max_size` entries, or unbounded when
    /// `None`.
    pub fn new(max_size: Option<u64>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_size,
            evictions: AtomicU64::new(0),
        }
    }

    /// Returns the cached compiled template for `key`, compiling and
    /// inserting on a miss. A failed compile propagates to the caller and
    /// leaves the cache unpopulated for that key, so the next identical
    /// request retries.
    pub fn get_or_compile<F>(&self, key: Vec<u8>, compile: F) -> TemplateResult<Arc<CompiledTemplate>>
    where
        F: FnOnce() -> TemplateResult<CompiledTemplate>,
    {
        if let Some(hit) = self.entries.read().unwrap().get(&key) {
            return Ok(Arc::clone(hit));
        }

        let compiled = Arc::new(compile()?);

        if self.max_size == Some(0) {
            // Degenerate bound: nothing is ever retained.
            return Ok(compiled);
        }

        let mut entries = self.entries.write().unwrap();
        if let Some(max) = self.max_size {
            while !entries.contains_key(&key) && entries.len() as u64 >= max {
                let Some(victim) = entries.keys().next().cloned() else {
                    break;
                };
                entries.remove(&victim);
                self.evictions.fetch_add(1, Ordering::Relaxed);
                warn!("Template cache limit exceeded. Revisit 'cacheSize' setting");
            }
        }
        Ok(Arc::clone(entries.entry(key).or_insert(compiled)))
    }

    /// The number of currently cached compiled templates.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// How many entries have been evicted due to the size bound. Advisory
    /// only; eviction is never an error.
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }
}
