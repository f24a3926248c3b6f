use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Handed back to the owner, who must echo `confirmation_code` to confirm.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfDestructTicket {
    pub id: Uuid,
    pub name: String,
    pub confirmation_code: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InitiateSelfDestructError {
    #[error("Gadget not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait InitiateSelfDestructUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        gadget_id: Uuid,
    ) -> Result<SelfDestructTicket, InitiateSelfDestructError>;
}
