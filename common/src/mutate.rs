//! State updates. Every operation takes the games collection by reference
//! and returns a freshly built one; callers only ever observe the old value
//! or the fully applied new one.

use chrono::Utc;
use thiserror::Error;

use crate::draft::{CreateError, DraftProblem, WagerDraft};
use crate::{query, Comment, Game, StatusKind, TransitionError, TransitionEvent, Wager, WagerStatus};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutateError {
    #[error("no wager with id {0}")]
    WagerNotFound(i64),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Strictly greater than every existing wager id, so an id is never reused
/// after a decline removes a wager. Never derived from list length.
fn next_wager_id(games: &[Game]) -> i64 {
    query::flatten(games)
        .iter()
        .map(|wager| wager.id)
        .max()
        .unwrap_or(0)
        + 1
}

fn next_comment_id(games: &[Game]) -> i64 {
    games
        .iter()
        .flat_map(|game| game.wagers.iter())
        .flat_map(|wager| wager.comments.iter())
        .map(|comment| comment.id)
        .max()
        .unwrap_or(0)
        + 1
}

/// Append a comment to the wager with `wager_id`, leaving every other wager
/// and game value-identical. Blank content and unknown ids are silent
/// no-ops returning an equal collection; a comment box submit is not an
/// error path. The timestamp is capture time.
pub fn add_comment(games: &[Game], wager_id: i64, content: &str, author: &str) -> Vec<Game> {
    let content = content.trim();
    if content.is_empty() {
        return games.to_vec();
    }

    let id = next_comment_id(games);
    games
        .iter()
        .map(|game| Game {
            wagers: game
                .wagers
                .iter()
                .map(|wager| {
                    if wager.id != wager_id {
                        return wager.clone();
                    }
                    let mut wager = wager.clone();
                    wager.comments.push(Comment {
                        id,
                        author: author.to_owned(),
                        content: content.to_owned(),
                        timestamp: Utc::now(),
                        wager_id,
                    });
                    wager
                })
                .collect(),
            ..game.clone()
        })
        .collect()
}

/// Realise a draft as a pending wager at the head of the target game's list
/// (most-recent-first). The draft is validated here, not trusted from the
/// boundary; all problems are reported together.
pub fn create_wager(
    games: &[Game],
    draft: WagerDraft,
    target_game_id: &str,
    acting_user: &str,
) -> Result<Vec<Game>, CreateError> {
    let problems = draft.problems(Utc::now().date_naive());
    if !problems.is_empty() {
        return Err(CreateError::InvalidDraft(problems));
    }
    let due_date = draft
        .due_date
        .ok_or_else(|| CreateError::InvalidDraft(vec![DraftProblem::MissingDueDate]))?;

    let target = games
        .iter()
        .find(|game| game.id == target_game_id)
        .ok_or_else(|| CreateError::UnknownGame(target_game_id.to_owned()))?;

    let mut participants = vec![acting_user.to_owned()];
    participants.extend(
        draft
            .friends
            .iter()
            .filter(|friend| friend.as_str() != acting_user)
            .cloned(),
    );

    let wager = Wager {
        id: next_wager_id(games),
        title: draft.title,
        description: draft.description,
        amount: draft.amount,
        participants,
        status: WagerStatus::Pending,
        creator: acting_user.to_owned(),
        due_date,
        odds: draft.odds,
        game_id: target.id.clone(),
        game_name: target.name.clone(),
        comments: vec![],
    };

    Ok(games
        .iter()
        .map(|game| {
            if game.id != target_game_id {
                return game.clone();
            }
            let mut wagers = Vec::with_capacity(game.wagers.len() + 1);
            wagers.push(wager.clone());
            wagers.extend(game.wagers.iter().cloned());
            Game {
                wagers,
                ..game.clone()
            }
        })
        .collect())
}

/// The invited side takes a pending wager: pending -> active.
pub fn accept_wager(games: &[Game], wager_id: i64) -> Result<Vec<Game>, MutateError> {
    transition_wager(games, wager_id, TransitionEvent::Accept)
}

/// The outcome of an active wager is known: active -> completed.
pub fn complete_wager(
    games: &[Game],
    wager_id: i64,
    winner: &str,
) -> Result<Vec<Game>, MutateError> {
    transition_wager(
        games,
        wager_id,
        TransitionEvent::Settle {
            winner: winner.to_owned(),
        },
    )
}

/// The invited side turns a pending wager down, which removes it from its
/// game. Only pending wagers can be declined.
pub fn decline_wager(games: &[Game], wager_id: i64) -> Result<Vec<Game>, MutateError> {
    let wager = query::find_wager(games, wager_id).ok_or(MutateError::WagerNotFound(wager_id))?;
    if wager.status.kind() != StatusKind::Pending {
        return Err(TransitionError {
            from: wager.status.kind(),
            event: "decline",
        }
        .into());
    }

    Ok(games
        .iter()
        .map(|game| Game {
            wagers: game
                .wagers
                .iter()
                .filter(|wager| wager.id != wager_id)
                .cloned()
                .collect(),
            ..game.clone()
        })
        .collect())
}

fn transition_wager(
    games: &[Game],
    wager_id: i64,
    event: TransitionEvent,
) -> Result<Vec<Game>, MutateError> {
    let current = query::find_wager(games, wager_id).ok_or(MutateError::WagerNotFound(wager_id))?;
    let next = current.status.apply(event)?;

    Ok(games
        .iter()
        .map(|game| Game {
            wagers: game
                .wagers
                .iter()
                .map(|wager| {
                    if wager.id != wager_id {
                        return wager.clone();
                    }
                    Wager {
                        status: next.clone(),
                        ..wager.clone()
                    }
                })
                .collect(),
            ..game.clone()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YOU;
    use chrono::{Days, NaiveDate, TimeZone, Utc};

    fn wager(id: i64, status: WagerStatus) -> Wager {
        Wager {
            id,
            title: format!("wager {id}"),
            description: "test".into(),
            amount: 50,
            participants: vec![YOU.into(), "Mike".into()],
            status,
            creator: "Mike".into(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            odds: "2:1".into(),
            game_id: "g".into(),
            game_name: "G".into(),
            comments: vec![],
        }
    }

    fn game(id: &str, wagers: Vec<Wager>) -> Game {
        Game {
            id: id.into(),
            name: id.to_uppercase(),
            category: "Test".into(),
            date: Utc.with_ymd_and_hms(2024, 1, 15, 19, 30, 0).unwrap(),
            wagers,
        }
    }

    fn seed() -> Vec<Game> {
        vec![
            game(
                "hoops",
                vec![
                    wager(1, WagerStatus::Active),
                    wager(2, WagerStatus::Pending),
                ],
            ),
            game("weather", vec![wager(3, WagerStatus::Pending)]),
        ]
    }

    fn upcoming_draft() -> WagerDraft {
        WagerDraft {
            title: "Chiefs repeat".into(),
            description: "Chiefs will win the Super Bowl".into(),
            amount: 100,
            due_date: Some(Utc::now().date_naive() + Days::new(7)),
            odds: "3:2".into(),
            friends: vec!["Alex".into()],
        }
    }

    #[test]
    fn comment_lands_on_the_target_wager_only() {
        let games = seed();
        let updated = add_comment(&games, 1, "lock it in", "Mike");

        let target = query::find_wager(&updated, 1).unwrap();
        assert_eq!(target.comments.len(), 1);
        assert_eq!(target.comments[0].content, "lock it in");
        assert_eq!(target.comments[0].author, "Mike");
        assert_eq!(target.comments[0].wager_id, 1);

        // every other wager, and the whole second game, are untouched
        assert_eq!(query::find_wager(&updated, 2), query::find_wager(&games, 2));
        assert_eq!(updated[1], games[1]);
    }

    #[test]
    fn comments_append_in_submission_order() {
        let games = seed();
        let games = add_comment(&games, 1, "first", "Mike");
        let games = add_comment(&games, 1, "second", "Sarah");

        let target = query::find_wager(&games, 1).unwrap();
        let contents: Vec<&str> = target
            .comments
            .iter()
            .map(|c| c.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second"]);
        assert!(target.comments[0].id < target.comments[1].id);
    }

    #[test]
    fn blank_comment_is_a_no_op() {
        let games = seed();
        assert_eq!(add_comment(&games, 1, "   ", YOU), games);
        assert_eq!(add_comment(&games, 1, "", YOU), games);
    }

    #[test]
    fn comment_on_an_unknown_wager_is_a_no_op() {
        let games = seed();
        assert_eq!(add_comment(&games, 999, "hello?", YOU), games);
    }

    #[test]
    fn comment_content_is_trimmed() {
        let games = add_comment(&seed(), 1, "  called it  ", YOU);
        let target = query::find_wager(&games, 1).unwrap();
        assert_eq!(target.comments[0].content, "called it");
    }

    #[test]
    fn created_wager_goes_to_the_head_of_its_game() {
        let games = seed();
        let updated = create_wager(&games, upcoming_draft(), "hoops", YOU).unwrap();

        let hoops = &updated[0];
        assert_eq!(hoops.wagers.len(), 3);
        let head = &hoops.wagers[0];
        assert_eq!(head.title, "Chiefs repeat");
        assert_eq!(head.status, WagerStatus::Pending);
        assert_eq!(head.creator, YOU);
        assert_eq!(head.game_id, "hoops");
        assert_eq!(head.game_name, "HOOPS");
        assert!(head.comments.is_empty());
        // previous head slides down, other game untouched
        assert_eq!(hoops.wagers[1].id, 1);
        assert_eq!(updated[1], games[1]);
    }

    #[test]
    fn created_wager_id_exceeds_every_existing_id() {
        let games = seed();
        let updated = create_wager(&games, upcoming_draft(), "hoops", YOU).unwrap();
        assert_eq!(updated[0].wagers[0].id, 4);
    }

    #[test]
    fn ids_are_not_reused_after_a_decline() {
        // after a decline the next id must stay above every surviving id;
        // a length-based scheme would hand out 3 again and collide below
        let games = decline_wager(&seed(), 3).unwrap();
        let updated = create_wager(&games, upcoming_draft(), "hoops", YOU).unwrap();
        assert_eq!(updated[0].wagers[0].id, 3);

        let games = decline_wager(&seed(), 2).unwrap();
        let updated = create_wager(&games, upcoming_draft(), "hoops", YOU).unwrap();
        assert_eq!(updated[0].wagers[0].id, 4);
    }

    #[test]
    fn acting_user_leads_participants_without_duplicates() {
        let draft = WagerDraft {
            friends: vec!["Alex".into(), YOU.into(), "Sam".into()],
            ..upcoming_draft()
        };
        let updated = create_wager(&seed(), draft, "hoops", YOU).unwrap();
        assert_eq!(updated[0].wagers[0].participants, vec!["You", "Alex", "Sam"]);
    }

    #[test]
    fn malformed_drafts_are_rejected_with_every_problem() {
        let draft = WagerDraft {
            title: "".into(),
            amount: 0,
            ..upcoming_draft()
        };
        let err = create_wager(&seed(), draft, "hoops", YOU).unwrap_err();
        assert_eq!(
            err,
            CreateError::InvalidDraft(vec![DraftProblem::BlankTitle, DraftProblem::ZeroAmount])
        );
    }

    #[test]
    fn a_draft_without_a_due_date_is_rejected() {
        let draft = WagerDraft {
            due_date: None,
            ..upcoming_draft()
        };
        assert!(matches!(
            create_wager(&seed(), draft, "hoops", YOU),
            Err(CreateError::InvalidDraft(problems))
                if problems == vec![DraftProblem::MissingDueDate]
        ));
    }

    #[test]
    fn creating_into_an_unknown_game_fails() {
        let err = create_wager(&seed(), upcoming_draft(), "nope", YOU).unwrap_err();
        assert_eq!(err, CreateError::UnknownGame("nope".into()));
    }

    #[test]
    fn accept_moves_a_pending_wager_to_active() {
        let updated = accept_wager(&seed(), 2).unwrap();
        assert_eq!(
            query::find_wager(&updated, 2).unwrap().status,
            WagerStatus::Active
        );
        // the already-active wager is untouched
        assert_eq!(
            query::find_wager(&updated, 1).unwrap().status,
            WagerStatus::Active
        );
    }

    #[test]
    fn accept_rejects_non_pending_wagers() {
        let err = accept_wager(&seed(), 1).unwrap_err();
        assert_eq!(
            err,
            MutateError::Transition(TransitionError {
                from: StatusKind::Active,
                event: "accept",
            })
        );
    }

    #[test]
    fn complete_records_the_winner() {
        let updated = complete_wager(&seed(), 1, "Jenny").unwrap();
        assert_eq!(
            query::find_wager(&updated, 1).unwrap().status,
            WagerStatus::Completed {
                winner: "Jenny".into()
            }
        );
    }

    #[test]
    fn complete_requires_an_active_wager() {
        assert!(complete_wager(&seed(), 2, "Jenny").is_err());
    }

    #[test]
    fn decline_removes_the_pending_wager() {
        let updated = decline_wager(&seed(), 2).unwrap();
        assert!(query::find_wager(&updated, 2).is_none());
        assert_eq!(updated[0].wagers.len(), 1);
        assert_eq!(updated[1], seed()[1]);
    }

    #[test]
    fn decline_rejects_an_active_wager() {
        assert!(matches!(
            decline_wager(&seed(), 1),
            Err(MutateError::Transition(_))
        ));
    }

    #[test]
    fn operations_on_unknown_ids_are_typed_errors() {
        assert_eq!(
            accept_wager(&seed(), 42).unwrap_err(),
            MutateError::WagerNotFound(42)
        );
        assert_eq!(
            decline_wager(&seed(), 42).unwrap_err(),
            MutateError::WagerNotFound(42)
        );
    }
}
