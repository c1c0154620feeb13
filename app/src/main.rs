mod leaderboard;
mod render;
mod seed;
mod store;

use anyhow::Result;
use chrono::{Days, Utc};
use common::{WagerDraft, YOU};
use store::{StoreHandle, StoreManager};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let (store_tx, store_rx) = mpsc::channel(32);
    let mut manager = StoreManager::new(seed::games(), YOU, store_rx);
    let store_task = tokio::spawn(async move {
        manager.manage().await;
    });

    let store = StoreHandle::new(store_tx);
    run_session(&store).await?;

    // dropping the last handle lets the store task drain and exit
    drop(store);
    store_task.await?;
    Ok(())
}

/// A scripted single-user session standing in for the interactive page:
/// browse, take the house up on its special, post a wager, talk trash.
async fn run_session(store: &StoreHandle) -> Result<()> {
    let games = store.snapshot().await?;
    let summary = store.summary().await?;
    println!("{}", render::page(&games, &summary));

    store.accept_wager(4).await?;
    store.add_comment(4, "Feeling good about this one").await?;

    let draft = WagerDraft {
        title: "Rain Check".into(),
        description: "It will rain again next weekend".into(),
        amount: 20,
        due_date: Some(Utc::now().date_naive() + Days::new(7)),
        odds: "2:1".into(),
        friends: vec!["Jenny".into(), "Tom".into()],
    };
    let wager_id = store.create_wager(draft, "weekend-weather").await?;
    store.add_comment(wager_id, "Double or nothing, Jenny").await?;

    let games = store.snapshot().await?;
    let summary = store.summary().await?;
    println!("{}", render::page(&games, &summary));
    println!("{}", render::leaderboard(&leaderboard::standings()));
    Ok(())
}
