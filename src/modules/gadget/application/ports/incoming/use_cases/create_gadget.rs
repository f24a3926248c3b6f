use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::ports::outgoing::GadgetResult;

/// Insert attempts before giving up on finding a free codename.
pub const MAX_NAME_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateGadgetError {
    #[error("Could not find a free gadget name after {MAX_NAME_ATTEMPTS} attempts")]
    NameExhaustion,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateGadgetUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<GadgetResult, CreateGadgetError>;
}
