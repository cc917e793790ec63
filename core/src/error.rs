use crate::records::ActorId;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CastpathError {
    /// Two path-adjacent actors share no tracked movie.
    #[error("no shared movie between {from} and {to}")]
    NoSharedMovie { from: ActorId, to: ActorId },

    /// The weight table passed to a search does not cover an adjacency pair.
    #[error("no weight recorded for collaboration {from} -> {to}")]
    MissingWeight { from: ActorId, to: ActorId },

    #[error("search aborted after settling {settled} actors: {reason}")]
    SearchAborted { settled: usize, reason: AbortReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    DeadlineExceeded,
    VisitLimitReached,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::DeadlineExceeded => f.write_str("deadline exceeded"),
            AbortReason::VisitLimitReached => f.write_str("visit limit reached"),
        }
    }
}

pub type Result<T> = std::result::Result<T, CastpathError>;
