//! The in-memory store owning the games collection. One task, one writer:
//! UI actions are requests over an mpsc queue, answered through a oneshot
//! per request, so no update is ever observed half-applied.

use anyhow::anyhow;
use common::{mutate, query, summarize, Game, Summary, WagerDraft};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

pub type Responder<T> = oneshot::Sender<anyhow::Result<T>>;

pub enum StoreRequest {
    Snapshot {
        responder: Responder<Vec<Game>>,
    },
    Summary {
        responder: Responder<Summary>,
    },
    CreateWager {
        draft: WagerDraft,
        game_id: String,
        responder: Responder<i64>,
    },
    AddComment {
        wager_id: i64,
        content: String,
        responder: Responder<()>,
    },
    AcceptWager {
        wager_id: i64,
        responder: Responder<()>,
    },
    DeclineWager {
        wager_id: i64,
        responder: Responder<()>,
    },
    CompleteWager {
        wager_id: i64,
        winner: String,
        responder: Responder<()>,
    },
}

pub struct StoreManager {
    games: Vec<Game>,
    version: u64,
    acting_user: String,
    work_queue: mpsc::Receiver<StoreRequest>,
}

//NOTE: No functions in this impl may crash
impl StoreManager {
    pub fn new(
        games: Vec<Game>,
        acting_user: impl Into<String>,
        work_queue: mpsc::Receiver<StoreRequest>,
    ) -> Self {
        Self {
            games,
            version: 0,
            acting_user: acting_user.into(),
            work_queue,
        }
    }

    pub async fn manage(&mut self) {
        while let Some(request) = self.work_queue.recv().await {
            // we do not care if the requester has already disappeared
            match request {
                StoreRequest::Snapshot { responder } => {
                    responder.send(Ok(self.games.clone())).ok();
                }
                StoreRequest::Summary { responder } => {
                    responder
                        .send(Ok(summarize(&self.games, &self.acting_user)))
                        .ok();
                }
                StoreRequest::CreateWager {
                    draft,
                    game_id,
                    responder,
                } => {
                    responder.send(self.create_wager(draft, &game_id)).ok();
                }
                StoreRequest::AddComment {
                    wager_id,
                    content,
                    responder,
                } => {
                    let next =
                        mutate::add_comment(&self.games, wager_id, &content, &self.acting_user);
                    if next != self.games {
                        self.commit(next);
                        info!(wager_id, "comment added");
                    } else {
                        debug!(wager_id, "comment ignored");
                    }
                    responder.send(Ok(())).ok();
                }
                StoreRequest::AcceptWager {
                    wager_id,
                    responder,
                } => {
                    responder
                        .send(self.apply(wager_id, mutate::accept_wager(&self.games, wager_id)))
                        .ok();
                }
                StoreRequest::DeclineWager {
                    wager_id,
                    responder,
                } => {
                    responder
                        .send(self.apply(wager_id, mutate::decline_wager(&self.games, wager_id)))
                        .ok();
                }
                StoreRequest::CompleteWager {
                    wager_id,
                    winner,
                    responder,
                } => {
                    let result = mutate::complete_wager(&self.games, wager_id, &winner);
                    responder.send(self.apply(wager_id, result)).ok();
                }
            }
        }
    }

    fn create_wager(&mut self, draft: WagerDraft, game_id: &str) -> anyhow::Result<i64> {
        match mutate::create_wager(&self.games, draft, game_id, &self.acting_user) {
            Ok(next) => {
                // ids are strictly increasing, so the newest wager holds the max
                let id = query::flatten(&next)
                    .iter()
                    .map(|wager| wager.id)
                    .max()
                    .unwrap_or(0);
                self.commit(next);
                info!(wager_id = id, game_id, "wager created");
                Ok(id)
            }
            Err(error) => {
                warn!(%error, game_id, "wager creation rejected");
                Err(error.into())
            }
        }
    }

    fn apply(
        &mut self,
        wager_id: i64,
        result: Result<Vec<Game>, mutate::MutateError>,
    ) -> anyhow::Result<()> {
        match result {
            Ok(next) => {
                self.commit(next);
                info!(wager_id, "wager updated");
                Ok(())
            }
            Err(error) => {
                warn!(%error, wager_id, "wager update rejected");
                Err(error.into())
            }
        }
    }

    fn commit(&mut self, next: Vec<Game>) {
        self.games = next;
        self.version += 1;
        debug!(version = self.version, "state committed");
    }
}

/// Cheaply cloneable client side of the store queue.
#[derive(Clone)]
pub struct StoreHandle {
    requester: mpsc::Sender<StoreRequest>,
}

impl StoreHandle {
    pub fn new(requester: mpsc::Sender<StoreRequest>) -> Self {
        Self { requester }
    }

    pub async fn snapshot(&self) -> anyhow::Result<Vec<Game>> {
        self.request(|responder| StoreRequest::Snapshot { responder })
            .await
    }

    pub async fn summary(&self) -> anyhow::Result<Summary> {
        self.request(|responder| StoreRequest::Summary { responder })
            .await
    }

    pub async fn create_wager(&self, draft: WagerDraft, game_id: &str) -> anyhow::Result<i64> {
        let game_id = game_id.to_owned();
        self.request(|responder| StoreRequest::CreateWager {
            draft,
            game_id,
            responder,
        })
        .await
    }

    pub async fn add_comment(&self, wager_id: i64, content: &str) -> anyhow::Result<()> {
        let content = content.to_owned();
        self.request(|responder| StoreRequest::AddComment {
            wager_id,
            content,
            responder,
        })
        .await
    }

    pub async fn accept_wager(&self, wager_id: i64) -> anyhow::Result<()> {
        self.request(|responder| StoreRequest::AcceptWager {
            wager_id,
            responder,
        })
        .await
    }

    pub async fn decline_wager(&self, wager_id: i64) -> anyhow::Result<()> {
        self.request(|responder| StoreRequest::DeclineWager {
            wager_id,
            responder,
        })
        .await
    }

    pub async fn complete_wager(&self, wager_id: i64, winner: &str) -> anyhow::Result<()> {
        let winner = winner.to_owned();
        self.request(|responder| StoreRequest::CompleteWager {
            wager_id,
            winner,
            responder,
        })
        .await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Responder<T>) -> StoreRequest,
    ) -> anyhow::Result<T> {
        let (resp_tx, resp_rx) = oneshot::channel();
        self.requester
            .send(make(resp_tx))
            .await
            .map_err(|_| anyhow!("store task has stopped"))?;
        resp_rx.await?
    }
}
