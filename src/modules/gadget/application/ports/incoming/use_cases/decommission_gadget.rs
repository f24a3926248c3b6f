use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::ports::outgoing::GadgetResult;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecommissionGadgetError {
    #[error("Gadget not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DecommissionGadgetUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        gadget_id: Uuid,
    ) -> Result<GadgetResult, DecommissionGadgetError>;
}
