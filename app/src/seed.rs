//! Mock dataset the app starts from. Everything lives and dies with the
//! process; there is no persistence.

use chrono::{NaiveDate, TimeZone, Utc};
use common::{Comment, Game, Wager, WagerStatus, HOUSE, YOU};

pub fn games() -> Vec<Game> {
    vec![
        Game {
            id: "lakers-warriors".into(),
            name: "Lakers vs Warriors".into(),
            category: "NBA".into(),
            date: Utc.with_ymd_and_hms(2024, 1, 15, 19, 30, 0).unwrap(),
            wagers: vec![
                Wager {
                    id: 1,
                    title: "Lakers vs Warriors Game".into(),
                    description: "Lakers will win by 10+ points".into(),
                    amount: 50,
                    participants: vec![YOU.into(), "Mike".into(), "Sarah".into()],
                    status: WagerStatus::Active,
                    creator: YOU.into(),
                    due_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                    odds: "2:1".into(),
                    game_id: "lakers-warriors".into(),
                    game_name: "Lakers vs Warriors".into(),
                    comments: vec![Comment {
                        id: 1,
                        author: "Mike".into(),
                        content: "Ten points is a lot against this defence".into(),
                        timestamp: Utc.with_ymd_and_hms(2024, 1, 12, 18, 4, 0).unwrap(),
                        wager_id: 1,
                    }],
                },
                Wager {
                    id: 4,
                    title: "House Special: Combined 220+".into(),
                    description: "Both teams combine for at least 220 points".into(),
                    amount: 25,
                    participants: vec![YOU.into()],
                    status: WagerStatus::Pending,
                    creator: HOUSE.into(),
                    due_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                    odds: "3:1".into(),
                    game_id: "lakers-warriors".into(),
                    game_name: "Lakers vs Warriors".into(),
                    comments: vec![],
                },
            ],
        },
        Game {
            id: "super-bowl".into(),
            name: "Super Bowl LVIII".into(),
            category: "NFL".into(),
            date: Utc.with_ymd_and_hms(2024, 2, 11, 23, 30, 0).unwrap(),
            wagers: vec![Wager {
                id: 2,
                title: "Super Bowl Winner".into(),
                description: "Chiefs will win the Super Bowl".into(),
                amount: 100,
                participants: vec![YOU.into(), "Alex".into()],
                status: WagerStatus::Pending,
                creator: "Alex".into(),
                due_date: NaiveDate::from_ymd_opt(2024, 2, 11).unwrap(),
                odds: "3:2".into(),
                game_id: "super-bowl".into(),
                game_name: "Super Bowl LVIII".into(),
                comments: vec![],
            }],
        },
        Game {
            id: "weekend-weather".into(),
            name: "Weekend Weather".into(),
            category: "Other".into(),
            date: Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap(),
            wagers: vec![Wager {
                id: 3,
                title: "Weather Bet".into(),
                description: "It will rain this weekend".into(),
                amount: 25,
                participants: vec![YOU.into(), "Jenny".into(), "Tom".into()],
                status: WagerStatus::Completed {
                    winner: "Jenny".into(),
                },
                creator: "Jenny".into(),
                due_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
                odds: "1:1".into(),
                game_id: "weekend-weather".into(),
                game_name: "Weekend Weather".into(),
                comments: vec![Comment {
                    id: 2,
                    author: "Jenny".into(),
                    content: "Easiest money of my life".into(),
                    timestamp: Utc.with_ymd_and_hms(2024, 1, 8, 16, 20, 0).unwrap(),
                    wager_id: 3,
                }],
            }],
        },
    ]
}
