//! Off-thread grid generation.
//!
//! Bridges a sync host loop with the packer running on tokio's blocking pool.
//! Every request gets a ticket; only the result for the latest ticket is
//! handed back, so a player who skips ahead never sees a stale grid.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, warn};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::catalog::{Level, LevelBlock};
use crate::core::PackedGrid;
use crate::engine::{pack_level, GameSession, StartError};

/// Packed grid delivered to the host loop.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub ticket: u64,
    pub level: Arc<Level>,
    pub block: Arc<LevelBlock>,
    /// `None` when neither seed packed the level
    pub packed: Option<PackedGrid>,
}

impl GenerationResult {
    /// Enter the generated level on `session`
    pub fn begin(self, session: &mut GameSession) -> Result<(), StartError> {
        let level_id = self.level.id;
        let packed = self.packed.ok_or(StartError::Unpackable { level_id })?;
        session.begin(self.level, self.block, packed)
    }
}

/// Running generation worker.
pub struct GenerationWorker {
    rt: Runtime,
    tx: mpsc::Sender<GenerationResult>,
    rx: mpsc::Receiver<GenerationResult>,
    latest: u64,
    delivered: u64,
}

impl GenerationWorker {
    pub fn new(max_pending: usize) -> Result<Self> {
        let rt = Runtime::new().context("create tokio runtime")?;
        let (tx, rx) = mpsc::channel::<GenerationResult>(max_pending.max(1));
        Ok(Self {
            rt,
            tx,
            rx,
            latest: 0,
            delivered: 0,
        })
    }

    /// Queue `level` for packing; supersedes any earlier request.
    pub fn request(&mut self, level: Arc<Level>, block: Arc<LevelBlock>) -> u64 {
        self.latest += 1;
        let ticket = self.latest;
        let tx = self.tx.clone();
        debug!("generation #{ticket} requested for level {}", level.id);

        self.rt.spawn(async move {
            let job = Arc::clone(&level);
            let packed = match tokio::task::spawn_blocking(move || pack_level(&job)).await {
                Ok(packed) => packed,
                Err(e) => {
                    warn!("generation #{ticket} for level {} aborted: {e}", level.id);
                    None
                }
            };
            let _ = tx
                .send(GenerationResult {
                    ticket,
                    level,
                    block,
                    packed,
                })
                .await;
        });
        ticket
    }

    /// Ticket of the most recent request
    pub fn latest_ticket(&self) -> u64 {
        self.latest
    }

    /// True while the latest request has not been handed back
    pub fn is_pending(&self) -> bool {
        self.delivered < self.latest
    }

    /// Drop interest in every outstanding request.
    pub fn cancel(&mut self) {
        self.latest += 1;
        self.delivered = self.latest;
    }

    /// Non-blocking poll for the latest result. Stale results are discarded.
    pub fn try_recv(&mut self) -> Option<GenerationResult> {
        while let Ok(result) = self.rx.try_recv() {
            if self.is_pending() && result.ticket == self.latest {
                self.delivered = result.ticket;
                return Some(result);
            }
            debug!("dropping stale generation #{}", result.ticket);
        }
        None
    }

    /// Block until the latest request finishes. `None` if nothing is pending.
    pub fn wait(&mut self) -> Option<GenerationResult> {
        if !self.is_pending() {
            return None;
        }
        let result = self.rt.block_on(recv_fresh(&mut self.rx, self.latest))?;
        self.delivered = result.ticket;
        Some(result)
    }
}

/// Receive until the result for `ticket` arrives, skipping older ones.
pub async fn recv_fresh(
    rx: &mut mpsc::Receiver<GenerationResult>,
    ticket: u64,
) -> Option<GenerationResult> {
    while let Some(result) = rx.recv().await {
        if result.ticket == ticket {
            return Some(result);
        }
        debug!("dropping stale generation #{}", result.ticket);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LevelCatalog;
    use crate::types::Language;
    use tokio_test::{assert_pending, assert_ready};

    fn level_and_block(id: u32) -> (Arc<Level>, Arc<LevelBlock>) {
        LevelCatalog::new().level_with_block(id, Language::En).unwrap()
    }

    fn result(ticket: u64) -> GenerationResult {
        let (level, block) = level_and_block(1);
        GenerationResult {
            ticket,
            level,
            block,
            packed: None,
        }
    }

    #[test]
    fn test_wait_returns_packed_grid() {
        let mut worker = GenerationWorker::new(4).unwrap();
        let (level, block) = level_and_block(7);
        let ticket = worker.request(level.clone(), block);
        assert!(worker.is_pending());

        let result = worker.wait().unwrap();
        assert_eq!(result.ticket, ticket);
        assert_eq!(result.level.id, 7);
        assert!(result.packed.as_ref().unwrap().covers(&level.words));
        assert!(!worker.is_pending());
        assert!(worker.wait().is_none());
    }

    #[test]
    fn test_latest_request_wins() {
        let mut worker = GenerationWorker::new(4).unwrap();
        let (first, first_block) = level_and_block(3);
        let (second, second_block) = level_and_block(4);
        worker.request(first, first_block);
        let ticket = worker.request(second, second_block);

        let result = worker.wait().unwrap();
        assert_eq!(result.ticket, ticket);
        assert_eq!(result.level.id, 4);
    }

    #[test]
    fn test_cancel() {
        let mut worker = GenerationWorker::new(4).unwrap();
        let (level, block) = level_and_block(2);
        worker.request(level, block);
        worker.cancel();
        assert!(!worker.is_pending());
        assert!(worker.wait().is_none());
        assert!(worker.try_recv().is_none());
    }

    #[test]
    fn test_result_begins_session() {
        let mut worker = GenerationWorker::new(1).unwrap();
        let (level, block) = level_and_block(60);
        worker.request(level, block);

        let mut session = GameSession::new();
        worker.wait().unwrap().begin(&mut session).unwrap();
        assert!(session.is_playing());
        assert_eq!(session.level().unwrap().id, 60);
    }

    #[test]
    fn test_unpacked_result_is_rejected() {
        let mut session = GameSession::new();
        let err = result(1).begin(&mut session).unwrap_err();
        assert_eq!(err, StartError::Unpackable { level_id: 1 });
        assert!(!session.is_playing());
    }

    #[test]
    fn test_recv_fresh_skips_stale() {
        let (tx, mut rx) = mpsc::channel(4);
        tx.try_send(result(1)).unwrap();
        tx.try_send(result(2)).unwrap();
        let fresh = tokio_test::block_on(recv_fresh(&mut rx, 2)).unwrap();
        assert_eq!(fresh.ticket, 2);
    }

    #[test]
    fn test_recv_fresh_waits() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut task = tokio_test::task::spawn(recv_fresh(&mut rx, 5));
        assert_pending!(task.poll());

        tx.try_send(result(4)).unwrap();
        assert_pending!(task.poll());

        tx.try_send(result(5)).unwrap();
        assert!(task.is_woken());
        let fresh = assert_ready!(task.poll()).unwrap();
        assert_eq!(fresh.ticket, 5);
    }

    #[test]
    fn test_recv_fresh_closed() {
        let (tx, mut rx) = mpsc::channel::<GenerationResult>(1);
        drop(tx);
        assert!(tokio_test::block_on(recv_fresh(&mut rx, 1)).is_none());
    }
}
