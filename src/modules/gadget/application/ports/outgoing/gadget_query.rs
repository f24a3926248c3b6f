use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::entities::GadgetStatus;

use super::gadget_repository::GadgetResult;

/// Owner and state of a gadget regardless of who is asking. Diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GadgetLocation {
    pub owner: UserId,
    pub status: GadgetStatus,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GadgetQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GadgetQuery: Send + Sync {
    /// Owner's gadgets whose status is one of `statuses`, oldest first.
    async fn list_by_statuses(
        &self,
        owner: UserId,
        statuses: &[GadgetStatus],
    ) -> Result<Vec<GadgetResult>, GadgetQueryError>;

    /// `None` when the gadget is absent or belongs to someone else.
    async fn find_owned(
        &self,
        owner: UserId,
        gadget_id: Uuid,
    ) -> Result<Option<GadgetResult>, GadgetQueryError>;

    /// Unscoped lookup. Never let its result reach a response.
    async fn find_owner_and_status(
        &self,
        gadget_id: Uuid,
    ) -> Result<Option<GadgetLocation>, GadgetQueryError>;
}
