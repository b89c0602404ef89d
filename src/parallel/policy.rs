//! The sequential/parallel execution-policy switch shared by every
//! operation that has both flavors.

/// How an operation should fan out its internal work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    #[default]
    Sequential,
    Parallel,
}

impl ExecutionPolicy {
    pub fn is_parallel(self) -> bool {
        matches!(self, ExecutionPolicy::Parallel)
    }
}
