//! CommentStatus enum for the soft-delete lifecycle of comments.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a comment.
///
/// `Active -> Deleted` is the only transition; `Deleted` is terminal.
/// Persisted as the `is_deleted` boolean flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommentStatus {
    #[default]
    Active,
    Deleted,
}

impl CommentStatus {
    /// Maps the persisted `is_deleted` flag to a status.
    pub fn from_is_deleted(is_deleted: bool) -> Self {
        if is_deleted {
            CommentStatus::Deleted
        } else {
            CommentStatus::Active
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, CommentStatus::Deleted)
    }
}

impl StateMachine for CommentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (CommentStatus::Active, CommentStatus::Deleted))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            CommentStatus::Active => vec![CommentStatus::Deleted],
            CommentStatus::Deleted => vec![],
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CommentStatus::Active => "Active",
            CommentStatus::Deleted => "Deleted",
        };
        write!(f, "{}", s)
    }
}
