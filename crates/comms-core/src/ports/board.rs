use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Communication, CommunicationPatch, NewCommunication, Role};
use crate::error::BoardError;
use crate::filter::FilterCriteria;
use crate::paginate::Page;
use crate::stats::BoardStats;

/// Default list page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which page of the filtered list to return.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The board as seen by the outside world: every read is role-scoped,
/// every mutation is gated by the permission matrix. Implementations must
/// make each call atomic with respect to concurrent readers.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// Filtered, paginated list view for a role.
    async fn list(
        &self,
        role: Option<Role>,
        criteria: FilterCriteria,
        page: PageRequest,
    ) -> Page<Communication>;

    /// Role-level summary over the visible pool (unaffected by criteria).
    async fn stats(&self, role: Option<Role>) -> BoardStats;

    async fn get(&self, role: Option<Role>, id: Uuid) -> Result<Communication, BoardError>;

    async fn create(
        &self,
        role: Option<Role>,
        draft: NewCommunication,
    ) -> Result<Communication, BoardError>;

    async fn update(
        &self,
        role: Option<Role>,
        id: Uuid,
        patch: CommunicationPatch,
    ) -> Result<Communication, BoardError>;

    async fn delete(&self, role: Option<Role>, id: Uuid) -> Result<(), BoardError>;

    async fn record_read(
        &self,
        role: Option<Role>,
        id: Uuid,
    ) -> Result<Communication, BoardError>;

    async fn record_like(
        &self,
        role: Option<Role>,
        id: Uuid,
    ) -> Result<Communication, BoardError>;

    async fn record_comment(
        &self,
        role: Option<Role>,
        id: Uuid,
    ) -> Result<Communication, BoardError>;
}
