use crate::application::ports::cache::CacheInvalidator;

/// For deployments without an edge cache in front of the service.
#[derive(Default, Clone)]
pub struct NoopCacheInvalidator;

impl CacheInvalidator for NoopCacheInvalidator {
    fn invalidate(&self, _paths: &[String]) {}
}

/// Emits one event per invalidated path so an external watcher can map
/// them onto its own cache keys.
#[derive(Default, Clone)]
pub struct TracingCacheInvalidator;

impl CacheInvalidator for TracingCacheInvalidator {
    fn invalidate(&self, paths: &[String]) {
        for path in paths {
            tracing::info!(path = %path, "cache invalidation requested");
        }
    }
}
