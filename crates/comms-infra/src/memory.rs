//! In-memory board adapter.
//!
//! Wraps the core `Board` in an async `RwLock`: every mutation holds the
//! write lock, so each gateway call is atomic from the perspective of
//! readers. Reads evaluate the pure pipeline under the read lock and clone
//! out their results. Note: data is lost on process restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use comms_core::board::Board;
use comms_core::domain::{Communication, CommunicationPatch, NewCommunication, Role};
use comms_core::error::BoardError;
use comms_core::filter::{self, FilterCriteria};
use comms_core::paginate::{self, Page};
use comms_core::ports::{BoardService, PageRequest};
use comms_core::stats::{self, BoardStats};

/// The single serialization point around the board.
pub struct InMemoryBoard {
    inner: RwLock<Board>,
}

impl InMemoryBoard {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Board::new()),
        }
    }

    /// Start from an externally supplied pool (newest first).
    pub fn from_pool(pool: Vec<Communication>) -> Self {
        Self {
            inner: RwLock::new(Board::from_pool(pool)),
        }
    }
}

impl Default for InMemoryBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BoardService for InMemoryBoard {
    async fn list(
        &self,
        role: Option<Role>,
        criteria: FilterCriteria,
        page: PageRequest,
    ) -> Page<Communication> {
        let board = self.inner.read().await;
        let filtered = filter::filter(board.items(), role, &criteria, Utc::now());
        let total_items = filtered.len();
        let items = paginate::paginate(&filtered, page.page_size, page.page)
            .iter()
            .map(|c| (*c).clone())
            .collect();

        Page {
            items,
            page: page.page,
            page_size: page.page_size,
            total_items,
            total_pages: paginate::total_pages(total_items, page.page_size),
        }
    }

    async fn stats(&self, role: Option<Role>) -> BoardStats {
        let board = self.inner.read().await;
        stats::aggregate(&filter::visible(board.items(), role), Utc::now())
    }

    async fn get(&self, role: Option<Role>, id: Uuid) -> Result<Communication, BoardError> {
        let board = self.inner.read().await;
        board.get(role, id).cloned()
    }

    async fn create(
        &self,
        role: Option<Role>,
        draft: NewCommunication,
    ) -> Result<Communication, BoardError> {
        let mut board = self.inner.write().await;
        let comm = board.create(role, draft)?;
        tracing::info!(id = %comm.id, ?role, status = %comm.status, "Communication created");
        Ok(comm)
    }

    async fn update(
        &self,
        role: Option<Role>,
        id: Uuid,
        patch: CommunicationPatch,
    ) -> Result<Communication, BoardError> {
        let mut board = self.inner.write().await;
        let comm = board.update(role, id, patch)?;
        tracing::info!(id = %comm.id, ?role, status = %comm.status, "Communication updated");
        Ok(comm)
    }

    async fn delete(&self, role: Option<Role>, id: Uuid) -> Result<(), BoardError> {
        let mut board = self.inner.write().await;
        board.delete(role, id)?;
        tracing::info!(%id, ?role, "Communication deleted");
        Ok(())
    }

    async fn record_read(
        &self,
        role: Option<Role>,
        id: Uuid,
    ) -> Result<Communication, BoardError> {
        let mut board = self.inner.write().await;
        let comm = board.record_read(role, id)?;
        tracing::debug!(%id, reads = comm.read_count, "Read recorded");
        Ok(comm)
    }

    async fn record_like(
        &self,
        role: Option<Role>,
        id: Uuid,
    ) -> Result<Communication, BoardError> {
        let mut board = self.inner.write().await;
        let comm = board.record_like(role, id)?;
        tracing::debug!(%id, likes = comm.likes_count, "Like recorded");
        Ok(comm)
    }

    async fn record_comment(
        &self,
        role: Option<Role>,
        id: Uuid,
    ) -> Result<Communication, BoardError> {
        let mut board = self.inner.write().await;
        let comm = board.record_comment(role, id)?;
        tracing::debug!(%id, comments = comm.comments_count, "Comment recorded");
        Ok(comm)
    }
}
