//! The leaderboard view's dataset. Fully static and read-only; it does not
//! interact with the wager store at all.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub rank: u32,
    pub name: &'static str,
    /// Whole-percent win rate.
    pub win_rate: u8,
    pub total_wagers: u32,
    pub total_winnings: u64,
    pub current_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Podium,
    TopTen,
    Field,
}

pub fn tier(rank: u32) -> Tier {
    match rank {
        1..=3 => Tier::Podium,
        4..=10 => Tier::TopTen,
        _ => Tier::Field,
    }
}

pub fn standings() -> Vec<Standing> {
    let data: [(&'static str, u8, u32, u64, u32); 20] = [
        ("Alex Chen", 87, 45, 2340, 8),
        ("Jordan Smith", 83, 52, 2180, 5),
        ("Casey Williams", 81, 38, 1950, 12),
        ("Riley Johnson", 79, 41, 1820, 3),
        ("Morgan Davis", 77, 33, 1680, 6),
        ("Taylor Brown", 75, 48, 1540, 2),
        ("Parker Wilson", 74, 29, 1420, 4),
        ("Avery Miller", 72, 36, 1290, 1),
        ("Blake Anderson", 71, 42, 1180, 7),
        ("Cameron Lee", 69, 31, 1060, 2),
        ("Drew Martinez", 68, 25, 940, 3),
        ("Sage Thompson", 66, 28, 820, 1),
        ("Quinn Garcia", 65, 35, 750, 4),
        ("Reese Rodriguez", 63, 22, 680, 2),
        ("Emery White", 62, 30, 610, 1),
        ("Finley Clark", 60, 26, 540, 3),
        ("Harper Lewis", 58, 19, 470, 1),
        ("Peyton Walker", 57, 21, 410, 2),
        ("River Hall", 55, 24, 350, 1),
        ("Skyler Young", 53, 18, 290, 2),
    ];

    data.iter()
        .enumerate()
        .map(
            |(i, &(name, win_rate, total_wagers, total_winnings, current_streak))| Standing {
                rank: i as u32 + 1,
                name,
                win_rate,
                total_wagers,
                total_winnings,
                current_streak,
            },
        )
        .collect()
}
