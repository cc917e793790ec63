use crate::error::{AbortReason, CastpathError, Result};
use std::time::{Duration, Instant};

/// Limits applied to weighted searches
#[derive(Debug, Clone, Default)]
pub struct PathfindingConfig {
    /// Abort once the search has run this long
    pub deadline: Option<Duration>,
    /// Abort once this many actors have been settled
    pub max_visited: Option<usize>,
}

impl PathfindingConfig {
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_max_visited(mut self, max_visited: usize) -> Self {
        self.max_visited = Some(max_visited);
        self
    }

    pub(crate) fn check(&self, started: Instant, settled: usize) -> Result<()> {
        if self.max_visited.is_some_and(|limit| settled > limit) {
            return Err(CastpathError::SearchAborted {
                settled,
                reason: AbortReason::VisitLimitReached,
            });
        }
        if self.deadline.is_some_and(|limit| started.elapsed() > limit) {
            return Err(CastpathError::SearchAborted {
                settled,
                reason: AbortReason::DeadlineExceeded,
            });
        }
        Ok(())
    }
}
