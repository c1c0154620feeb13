//! Derived statistics for the stats row at the top of the page.

use serde::Serialize;

use crate::{query, Game, StatusKind, Wager, HOUSE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub active: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn of(&self, kind: StatusKind) -> usize {
        match kind {
            StatusKind::Pending => self.pending,
            StatusKind::Active => self.active,
            StatusKind::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.active + self.completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Stake summed over every wager regardless of status. This is the
    /// lifetime-volume reading of "total wagered"; the pending-only
    /// "available stakes" variant is intentionally not what we show.
    pub total_wagered: u64,
    /// Stake summed over completed wagers the acting user won. House wins
    /// never pay out to a user, even if the acting identity is the house.
    pub total_won: u64,
    pub counts: StatusCounts,
    /// Every wager across every game, in game order then per-game order.
    /// The status tabs filter this list.
    pub wagers: Vec<Wager>,
}

/// Pure fold over the games collection; one pass per figure, no side
/// effects.
pub fn summarize(games: &[Game], acting_user: &str) -> Summary {
    let wagers: Vec<Wager> = games
        .iter()
        .flat_map(|game| game.wagers.iter().cloned())
        .collect();

    let mut counts = StatusCounts::default();
    for wager in &wagers {
        match wager.status.kind() {
            StatusKind::Pending => counts.pending += 1,
            StatusKind::Active => counts.active += 1,
            StatusKind::Completed => counts.completed += 1,
        }
    }

    let total_wagered = wagers.iter().map(|wager| wager.amount).sum();
    let total_won = wagers
        .iter()
        .filter(|wager| acting_user != HOUSE && query::is_winner(wager, acting_user))
        .map(|wager| wager.amount)
        .sum();

    Summary {
        total_wagered,
        total_won,
        counts,
        wagers,
    }
}
