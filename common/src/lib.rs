use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod aggregate;
pub mod draft;
pub mod mutate;
pub mod query;

pub use aggregate::{summarize, StatusCounts, Summary};
pub use draft::{CreateError, DraftProblem, WagerDraft};
pub use mutate::MutateError;

/// The single local identity all stats and winner checks are computed for.
pub const YOU: &str = "You";

/// Creator identity for wagers posted by the platform itself, as opposed to
/// peer-created ones. House wins never count towards the acting user's total.
pub const HOUSE: &str = "House";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub wager_id: i64,
}

/// Lifecycle status with the outcome folded in, so that "completed without a
/// winner" and "winner while still pending" cannot be constructed.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WagerStatus {
    Pending,
    Active,
    Completed { winner: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Pending,
    Active,
    Completed,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusKind::Pending => "pending",
            StatusKind::Active => "active",
            StatusKind::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

/// An event that may move a wager along its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The invited side takes the bet: pending -> active.
    Accept,
    /// The outcome is known: active -> completed.
    Settle { winner: String },
}

impl TransitionEvent {
    fn name(&self) -> &'static str {
        match self {
            TransitionEvent::Accept => "accept",
            TransitionEvent::Settle { .. } => "settle",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot {event} a {from} wager")]
pub struct TransitionError {
    pub from: StatusKind,
    pub event: &'static str,
}

impl WagerStatus {
    pub fn kind(&self) -> StatusKind {
        match self {
            WagerStatus::Pending => StatusKind::Pending,
            WagerStatus::Active => StatusKind::Active,
            WagerStatus::Completed { .. } => StatusKind::Completed,
        }
    }

    /// The only legal moves are pending -> active and active -> completed;
    /// completed is terminal.
    pub fn apply(&self, event: TransitionEvent) -> Result<WagerStatus, TransitionError> {
        match (self, event) {
            (WagerStatus::Pending, TransitionEvent::Accept) => Ok(WagerStatus::Active),
            (WagerStatus::Active, TransitionEvent::Settle { winner }) => {
                Ok(WagerStatus::Completed { winner })
            }
            (status, event) => Err(TransitionError {
                from: status.kind(),
                event: event.name(),
            }),
        }
    }
}

/// A single proposition: a stake, an odds string, the people in on it, and a
/// lifecycle status. `game_id`/`game_name` are denormalised back-references
/// to the owning [`Game`].
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Wager {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Stake in whole dollars, always positive.
    pub amount: u64,
    pub participants: Vec<String>,
    #[serde(flatten)]
    pub status: WagerStatus,
    pub creator: String,
    pub due_date: NaiveDate,
    /// Free-form "N:M" ratio string, never numerically validated.
    pub odds: String,
    pub game_id: String,
    pub game_name: String,
    pub comments: Vec<Comment>,
}

/// A grouping of related wagers sharing a date and category, e.g. one
/// sports event.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub wagers: Vec<Wager>,
}
