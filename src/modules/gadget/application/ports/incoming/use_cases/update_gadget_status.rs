use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::entities::{GadgetStatus, InvalidStatus};
use crate::gadget::application::ports::outgoing::GadgetResult;

#[derive(Debug, Clone)]
pub struct UpdateGadgetStatusCommand {
    owner: UserId,
    gadget_id: Uuid,
    status: GadgetStatus,
}

impl UpdateGadgetStatusCommand {
    /// Only `AVAILABLE` and `DEPLOYED` (any case) are accepted.
    pub fn new(owner: UserId, gadget_id: Uuid, status: &str) -> Result<Self, InvalidStatus> {
        Ok(Self {
            owner,
            gadget_id,
            status: GadgetStatus::parse_active(status)?,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn gadget_id(&self) -> Uuid {
        self.gadget_id
    }

    pub fn status(&self) -> GadgetStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateGadgetStatusError {
    #[error("Gadget not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateGadgetStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateGadgetStatusCommand,
    ) -> Result<GadgetResult, UpdateGadgetStatusError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_normalizes_case() {
        let cmd = UpdateGadgetStatusCommand::new(
            UserId::from(Uuid::new_v4()),
            Uuid::new_v4(),
            "deployed",
        )
        .unwrap();
        assert_eq!(cmd.status(), GadgetStatus::Deployed);
    }

    #[test]
    fn command_rejects_terminal_targets() {
        let owner = UserId::from(Uuid::new_v4());
        for target in ["DESTROYED", "DECOMMISSIONED", "broken"] {
            let err = UpdateGadgetStatusCommand::new(owner, Uuid::new_v4(), target).unwrap_err();
            assert_eq!(err, InvalidStatus(target.to_string()));
        }
    }
}
