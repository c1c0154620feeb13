//! Read-only lookups over the games collection.

use crate::{Game, StatusKind, Wager, WagerStatus};

/// Every wager across every game, preserving game order and then per-game
/// order.
pub fn flatten(games: &[Game]) -> Vec<&Wager> {
    games.iter().flat_map(|game| game.wagers.iter()).collect()
}

/// Stable filter by lifecycle status.
pub fn by_status(wagers: &[Wager], kind: StatusKind) -> Vec<&Wager> {
    wagers
        .iter()
        .filter(|wager| wager.status.kind() == kind)
        .collect()
}

pub fn find_wager(games: &[Game], wager_id: i64) -> Option<&Wager> {
    games
        .iter()
        .flat_map(|game| game.wagers.iter())
        .find(|wager| wager.id == wager_id)
}

/// True iff the wager is completed and `user` took it.
pub fn is_winner(wager: &Wager, user: &str) -> bool {
    matches!(&wager.status, WagerStatus::Completed { winner } if winner == user)
}

/// Display payout for an "N:M" odds string: the stake times the numerator,
/// denominator ignored. That is exactly what the wager card shows, kept
/// here under a name that admits it is not a real odds calculation.
/// Fractional numerators ("1.5:1") round to the nearest dollar. `None` when
/// the part before the colon is not a number.
pub fn naive_payout(wager: &Wager) -> Option<u64> {
    let numerator: f64 = wager.odds.split(':').next()?.trim().parse().ok()?;
    if !numerator.is_finite() || numerator < 0.0 {
        return None;
    }
    Some((wager.amount as f64 * numerator).round() as u64)
}
