//! The service-provider trait implemented by every engine adapter.

use crate::error::TemplateResult;
use crate::fragment::Fragment;

/// A template engine that renders fragments.
///
/// Implementations are constructed once per configuration at host startup
/// and invoked concurrently by multiple caller threads, so they must be
/// `Send + Sync`. The instance itself is read-mostly configuration; any
/// internal caching must be thread-safe.
pub trait TemplateEngine: Send + Sync {
    /// Renders the fragment's body against its payload and returns the
    /// resulting text. All-or-nothing: no partial output is produced on
    /// failure.
    fn process(&self, fragment: &Fragment) -> TemplateResult<String>;

    /// The name this engine is registered under (e.g. `"jinja"`). The host
    /// framework resolves configured engines by this name.
    fn name(&self) -> &'static str;
}
