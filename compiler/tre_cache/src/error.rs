//! Cache errors.

/// Error from a cache control operation.
///
/// Compile failures are not cache errors; they surface as
/// [`tre_engine::CompileError`] from `get_or_compile`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// A capacity of zero was requested. Nothing was changed.
    #[error("cache capacity must be positive, got {requested}")]
    InvalidCapacity { requested: usize },
}
