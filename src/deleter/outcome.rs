use std::path::PathBuf;

use crate::error::DeletionError;

/// Result of processing one candidate.
#[derive(Debug)]
pub enum Outcome {
    Deleted,
    Failed(DeletionError),
    /// Not attempted: the run was interrupted first.
    Cancelled,
}

impl Outcome {
    #[must_use]
    pub const fn status_str(&self) -> &'static str {
        match self {
            Self::Deleted => "deleted",
            Self::Failed(_) => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&DeletionError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct CandidateOutcome {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Per-status counts over a batch of outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    pub deleted: usize,
    pub failed: usize,
    pub cancelled: usize,
}

impl DeletionSummary {
    #[must_use]
    pub fn from_outcomes(outcomes: &[CandidateOutcome]) -> Self {
        outcomes
            .iter()
            .fold(Self::default(), |mut summary, o| {
                match o.outcome {
                    Outcome::Deleted => summary.deleted += 1,
                    Outcome::Failed(_) => summary.failed += 1,
                    Outcome::Cancelled => summary.cancelled += 1,
                }
                summary
            })
    }

    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.cancelled > 0
    }
}
