//! Plain-text rendering of the page. One locale, short month/day dates,
//! integer dollar amounts with a literal `$`.

use chrono::{DateTime, NaiveDate, Utc};
use common::{query, summarize, Game, StatusKind, Summary, Wager, WagerStatus, YOU};
use std::fmt::Write;

use crate::leaderboard::{tier, Standing, Tier};

pub fn dollars(amount: u64) -> String {
    format!("${amount}")
}

/// "Jan 15"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// "Jan 15, 19:30"
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %H:%M").to_string()
}

fn status_label(status: &WagerStatus) -> String {
    status.kind().to_string().to_uppercase()
}

pub fn page(games: &[Game], summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "WagerPal");
    let _ = writeln!(out, "========");
    let _ = writeln!(
        out,
        "Total Wagered: {}   Total Won: {}   Active Bets: {}",
        dollars(summary.total_wagered),
        dollars(summary.total_won),
        summary.counts.active,
    );
    let _ = writeln!(
        out,
        "Active ({}) | Pending ({}) | Completed ({})",
        summary.counts.active, summary.counts.pending, summary.counts.completed,
    );
    for kind in [StatusKind::Active, StatusKind::Pending, StatusKind::Completed] {
        if summary.counts.of(kind) == 0 {
            let _ = writeln!(out, "No {kind} wagers");
        }
    }

    for game in games {
        let _ = writeln!(out);
        out.push_str(&game_card(game));
    }
    out
}

fn game_card(game: &Game) -> String {
    // per-game figures come from the same aggregator as the page header
    let totals = summarize(std::slice::from_ref(game), YOU);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}] — {} · {} riding · {} active, {} pending, {} done",
        game.name,
        game.category,
        timestamp(&game.date),
        dollars(totals.total_wagered),
        totals.counts.active,
        totals.counts.pending,
        totals.counts.completed,
    );
    for wager in &game.wagers {
        out.push_str(&wager_card(wager));
    }
    out
}

fn wager_card(wager: &Wager) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "  [{}] {} — {} at {}",
        status_label(&wager.status),
        wager.title,
        dollars(wager.amount),
        wager.odds,
    );
    if let Some(payout) = query::naive_payout(wager) {
        let _ = write!(out, " (pays {})", dollars(payout));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "      {}", wager.description);
    let _ = writeln!(
        out,
        "      {} players: {} · due {} · by {}",
        wager.participants.len(),
        wager.participants.join(", "),
        short_date(wager.due_date),
        wager.creator,
    );
    if let WagerStatus::Completed { winner } = &wager.status {
        if winner == YOU {
            let _ = writeln!(out, "      Victory!");
        } else {
            let _ = writeln!(out, "      {winner} won");
        }
    }
    for comment in &wager.comments {
        let _ = writeln!(
            out,
            "      > {} ({}): {}",
            comment.author,
            timestamp(&comment.timestamp),
            comment.content,
        );
    }
    out
}

pub fn leaderboard(standings: &[Standing]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Leaderboard — Top 20 wagering champions");
    for standing in standings {
        let marker = match tier(standing.rank) {
            Tier::Podium => "*",
            Tier::TopTen | Tier::Field => " ",
        };
        let _ = writeln!(
            out,
            "{marker}{:>3}. {:<18} {:>3}% win rate · {:>3} wagers · {:>6} · streak {}",
            standing.rank,
            standing.name,
            standing.win_rate,
            standing.total_wagers,
            dollars(standing.total_winnings),
            standing.current_streak,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{leaderboard as board, seed};
    use chrono::TimeZone;

    #[test]
    fn dates_render_short_american_style() {
        assert_eq!(
            short_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            "Jan 15"
        );
        assert_eq!(
            short_date(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap()),
            "Feb 3"
        );
        let at = Utc.with_ymd_and_hms(2024, 1, 12, 18, 4, 0).unwrap();
        assert_eq!(timestamp(&at), "Jan 12, 18:04");
    }

    #[test]
    fn page_shows_the_headline_figures() {
        let games = seed::games();
        let summary = summarize(&games, YOU);
        let page = page(&games, &summary);

        assert!(page.contains("Total Wagered: $200"));
        assert!(page.contains("Total Won: $0"));
        assert!(page.contains("Active (1) | Pending (2) | Completed (1)"));
        assert!(page.contains("Jenny won"));
        assert!(page.contains("(pays $100)"));
    }

    #[test]
    fn empty_tabs_get_their_empty_state_line() {
        let summary = summarize(&[], YOU);
        let page = page(&[], &summary);
        assert!(page.contains("No active wagers"));
        assert!(page.contains("No pending wagers"));
        assert!(page.contains("No completed wagers"));
    }

    #[test]
    fn leaderboard_lists_the_podium_first() {
        let rendered = leaderboard(&board::standings());
        let first = rendered.lines().nth(1).unwrap();
        assert!(first.starts_with("*  1. Alex Chen"));
        assert!(rendered.contains("$2340"));
    }
}
