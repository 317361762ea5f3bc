use thiserror::Error;

/// The Error type for pool configuration.
///
/// Acquiring and releasing never fail; only building a pool from an
/// inconsistent [`PoolConfig`](crate::PoolConfig) does.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// The prefill would overflow a capacity-enforcing free-list.
    #[error("initial pool size {initial} exceeds the maximum pool size {max}")]
    InitialExceedsMax {
        /// The requested number of prefilled instances.
        initial: usize,
        /// The configured free-list capacity.
        max: usize,
    },
}
