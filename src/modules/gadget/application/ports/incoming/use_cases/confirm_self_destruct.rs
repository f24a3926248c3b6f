use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::confirmation_code::normalize_confirmation_code;
use crate::gadget::application::ports::outgoing::GadgetResult;

#[derive(Debug, Clone)]
pub struct ConfirmSelfDestructCommand {
    owner: UserId,
    gadget_id: Uuid,
    code: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfirmSelfDestructCommandError {
    #[error("Confirmation code cannot be empty")]
    EmptyCode,
}

impl ConfirmSelfDestructCommand {
    pub fn new(
        owner: UserId,
        gadget_id: Uuid,
        code: &str,
    ) -> Result<Self, ConfirmSelfDestructCommandError> {
        let code = normalize_confirmation_code(code);
        if code.is_empty() {
            return Err(ConfirmSelfDestructCommandError::EmptyCode);
        }

        Ok(Self {
            owner,
            gadget_id,
            code,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn gadget_id(&self) -> Uuid {
        self.gadget_id
    }

    /// Normalized (trimmed, upper-case).
    pub fn code(&self) -> &str {
        &self.code
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfirmSelfDestructError {
    #[error("Gadget not found")]
    NotFound,

    /// Wrong code, or no self-destruct pending.
    #[error("Invalid confirmation code")]
    InvalidConfirmationCode,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ConfirmSelfDestructUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ConfirmSelfDestructCommand,
    ) -> Result<GadgetResult, ConfirmSelfDestructError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_normalizes_code() {
        let owner = UserId::from(Uuid::new_v4());
        let cmd = ConfirmSelfDestructCommand::new(owner, Uuid::new_v4(), " x9k2pq ").unwrap();
        assert_eq!(cmd.code(), "X9K2PQ");
    }

    #[test]
    fn command_rejects_blank_code() {
        let owner = UserId::from(Uuid::new_v4());
        let err = ConfirmSelfDestructCommand::new(owner, Uuid::new_v4(), "   ").unwrap_err();
        assert_eq!(err, ConfirmSelfDestructCommandError::EmptyCode);
    }
}
