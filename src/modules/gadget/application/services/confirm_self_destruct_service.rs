use async_trait::async_trait;
use tracing::{debug, info};

use super::not_found::log_not_found_cause;
use crate::gadget::application::ports::incoming::use_cases::{
    ConfirmSelfDestructCommand, ConfirmSelfDestructError, ConfirmSelfDestructUseCase,
};
use crate::gadget::application::ports::outgoing::{
    GadgetQuery, GadgetRepository, GadgetRepositoryError, GadgetResult,
};

#[derive(Clone)]
pub struct ConfirmSelfDestructService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> ConfirmSelfDestructService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn load_active(
        &self,
        command: &ConfirmSelfDestructCommand,
    ) -> Result<GadgetResult, ConfirmSelfDestructError> {
        let found = self
            .query
            .find_owned(command.owner(), command.gadget_id())
            .await
            .map_err(|e| ConfirmSelfDestructError::RepositoryError(e.to_string()))?;

        match found {
            Some(gadget) if !gadget.status.is_terminal() => Ok(gadget),
            Some(gadget) => {
                debug!(
                    gadget_id = %gadget.id,
                    status = %gadget.status,
                    "Confirm on terminal gadget"
                );
                Err(ConfirmSelfDestructError::NotFound)
            }
            None => {
                log_not_found_cause(
                    &self.query,
                    "confirm_self_destruct",
                    command.owner(),
                    command.gadget_id(),
                )
                .await;
                Err(ConfirmSelfDestructError::NotFound)
            }
        }
    }
}

#[async_trait]
impl<Q, R> ConfirmSelfDestructUseCase for ConfirmSelfDestructService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    async fn execute(
        &self,
        command: ConfirmSelfDestructCommand,
    ) -> Result<GadgetResult, ConfirmSelfDestructError> {
        let gadget = self.load_active(&command).await?;

        if gadget.confirmation_code.as_deref() != Some(command.code()) {
            info!(
                user_id = %command.owner(),
                gadget_id = %gadget.id,
                pending = gadget.confirmation_code.is_some(),
                "Self-destruct confirmation rejected"
            );
            return Err(ConfirmSelfDestructError::InvalidConfirmationCode);
        }

        match self
            .repository
            .destroy(command.owner(), command.gadget_id(), command.code())
            .await
        {
            Ok(destroyed) => {
                info!(user_id = %command.owner(), gadget_id = %destroyed.id, "Gadget destroyed");
                Ok(destroyed)
            }
            Err(GadgetRepositoryError::NotFound) => {
                // Lost a race: either the code was reissued or the gadget left the active set
                match self.load_active(&command).await {
                    Ok(_) => Err(ConfirmSelfDestructError::InvalidConfirmationCode),
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(ConfirmSelfDestructError::RepositoryError(e.to_string())),
        }
    }
}
