use crate::PoolError;

/// The default number of instances a pool keeps for reuse.
pub const DEFAULT_MAX_POOL_SIZE: usize = 10;

/// What a pool does with an instance released into a full free-list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OverflowPolicy {
    /// Destroy the instance, the free-list never grows past its maximum.
    #[default]
    Destroy,
    /// Keep the instance anyway, the maximum is advisory only.
    ///
    /// Releasing without matching acquires grows the free-list without bound.
    Retain,
}

/// Construction parameters of an [`ObjectPool`](crate::ObjectPool).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PoolConfig {
    /// Number of inactive instances created up front.
    pub initial_size: usize,
    /// Maximum number of inactive instances kept for reuse.
    pub max_size: usize,
    /// Behaviour when the free-list is full.
    pub overflow: OverflowPolicy,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            initial_size: 0,
            max_size: DEFAULT_MAX_POOL_SIZE,
            overflow: OverflowPolicy::Destroy,
        }
    }
}

impl PoolConfig {
    /// Creates a capacity-enforcing config.
    pub fn new(initial_size: usize, max_size: usize) -> Self {
        PoolConfig {
            initial_size,
            max_size,
            overflow: OverflowPolicy::Destroy,
        }
    }

    /// Sets the number of prefilled instances.
    pub fn with_initial_size(mut self, initial_size: usize) -> Self {
        self.initial_size = initial_size;
        self
    }

    /// Sets the free-list capacity.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the overflow policy.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Checks that the prefill fits the free-list.
    ///
    /// Under [`OverflowPolicy::Retain`] any prefill is accepted.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.overflow == OverflowPolicy::Destroy && self.initial_size > self.max_size {
            return Err(PoolError::InitialExceedsMax {
                initial: self.initial_size,
                max: self.max_size,
            });
        }
        Ok(())
    }

    /// Number of instances a pool built from this config actually prefills.
    pub(crate) fn effective_initial_size(&self) -> usize {
        match self.overflow {
            OverflowPolicy::Destroy => self.initial_size.min(self.max_size),
            OverflowPolicy::Retain => self.initial_size,
        }
    }
}
