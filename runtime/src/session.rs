//! FlowSession - Store and Sink Wiring
//!
//! Owns one [`FlowController`] and wires it to a snapshot store and a
//! submission sink. Every answer mutation and successful navigation is
//! followed by a best-effort snapshot write; submission is dispatched
//! on a detached task so the terminal step is reached regardless of the
//! sink's fate. Store failures degrade to non-persistent operation with
//! a warning, never to a user-visible error.

use crate::payload;
use crate::sink::SubmissionSink;
use crate::store::SnapshotStore;
use leadflow_core::{Answer, Catalog, FlowController, Nav};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct FlowSession {
    id: Uuid,
    controller: FlowController,
    store: Arc<dyn SnapshotStore>,
    sink: Arc<dyn SubmissionSink>,
}

impl FlowSession {
    /// Initialize the session, restoring a persisted snapshot when one
    /// is present and decodable. The restored cursor is clamped into
    /// the re-resolved sequence and rendered without animation.
    pub async fn start(
        catalog: Catalog,
        store: Arc<dyn SnapshotStore>,
        sink: Arc<dyn SubmissionSink>,
    ) -> Self {
        let id = Uuid::new_v4();
        let mut controller = FlowController::new(catalog);

        match store.load().await {
            Ok(Some(snapshot)) => {
                info!(session = %id, step = snapshot.current, "restored persisted flow state");
                controller.restore(snapshot);
            }
            Ok(None) => {}
            Err(err) => {
                warn!(session = %id, %err, "snapshot load failed; starting fresh");
            }
        }

        Self {
            id,
            controller,
            store,
            sink,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn controller(&self) -> &FlowController {
        &self.controller
    }

    /// Record an answer and persist.
    pub async fn answer(&mut self, key: impl Into<String>, value: impl Into<Answer>) {
        self.controller.set_answer(key, value);
        self.persist().await;
    }

    /// Edit one multi-text slot on the current step and persist.
    pub async fn edit_list_entry(&mut self, key: &str, index: usize, text: impl Into<String>) {
        self.controller.edit_list_entry(key, index, text);
        self.persist().await;
    }

    pub async fn advance(&mut self) -> Nav {
        let nav = self.controller.advance();
        self.persist_if_moved(nav).await
    }

    pub async fn retreat(&mut self) -> Nav {
        let nav = self.controller.retreat();
        self.persist_if_moved(nav).await
    }

    pub async fn forward(&mut self) -> Nav {
        let nav = self.controller.forward();
        self.persist_if_moved(nav).await
    }

    pub async fn jump_to(&mut self, index: usize) -> Nav {
        let nav = self.controller.jump_to(index);
        self.persist_if_moved(nav).await
    }

    /// Submit the collected answers and move to the terminal step.
    ///
    /// The sink call is fire-and-forget: it runs on a detached task and
    /// its failure is only logged. Navigation to the terminal step is
    /// gated solely by the current step's validation, never by the sink.
    pub async fn submit(&mut self) -> Nav {
        let nav = self.controller.advance();
        if nav.moved() {
            let payload = payload::assemble(self.controller.answers());
            let sink = Arc::clone(&self.sink);
            let session = self.id;
            tokio::spawn(async move {
                match sink.deliver(&payload).await {
                    Ok(()) => debug!(session = %session, "submission dispatched"),
                    Err(err) => {
                        warn!(session = %session, %err, "submission sink failure; payload dropped");
                    }
                }
            });
            self.persist().await;
        }
        nav
    }

    /// Discard answers, cursor and the persisted snapshot.
    pub async fn restart(&mut self) {
        self.controller.restart();
        if let Err(err) = self.store.clear().await {
            warn!(session = %self.id, %err, "snapshot clear failed");
        }
    }

    async fn persist_if_moved(&mut self, nav: Nav) -> Nav {
        if nav.moved() {
            self.persist().await;
        }
        nav
    }

    async fn persist(&self) {
        if let Err(err) = self.store.save(&self.controller.snapshot()).await {
            warn!(session = %self.id, %err, "snapshot save failed; continuing without persistence");
        }
    }
}
