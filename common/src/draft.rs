use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the create form submits: everything the user typed, before any
/// checking. A draft only becomes a wager through
/// [`crate::mutate::create_wager`].
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct WagerDraft {
    pub title: String,
    pub description: String,
    /// Stake in whole dollars.
    pub amount: u64,
    pub due_date: Option<NaiveDate>,
    pub odds: String,
    /// Friends invited alongside the acting user.
    pub friends: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftProblem {
    #[error("title must not be blank")]
    BlankTitle,
    #[error("description must not be blank")]
    BlankDescription,
    #[error("amount must be a positive number of dollars")]
    ZeroAmount,
    #[error("no due date selected")]
    MissingDueDate,
    #[error("due date {0} has already passed")]
    DueDateInPast(NaiveDate),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreateError {
    #[error("draft rejected: {}", describe(.0))]
    InvalidDraft(Vec<DraftProblem>),
    #[error("no game with id {0:?}")]
    UnknownGame(String),
}

fn describe(problems: &[DraftProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl WagerDraft {
    /// Every problem with the draft, in field order. Odds strings are
    /// free-form and deliberately left unchecked.
    pub fn problems(&self, today: NaiveDate) -> Vec<DraftProblem> {
        let mut problems = Vec::new();
        if self.title.trim().is_empty() {
            problems.push(DraftProblem::BlankTitle);
        }
        if self.description.trim().is_empty() {
            problems.push(DraftProblem::BlankDescription);
        }
        if self.amount == 0 {
            problems.push(DraftProblem::ZeroAmount);
        }
        match self.due_date {
            None => problems.push(DraftProblem::MissingDueDate),
            Some(date) if date < today => problems.push(DraftProblem::DueDateInPast(date)),
            Some(_) => {}
        }
        problems
    }
}
