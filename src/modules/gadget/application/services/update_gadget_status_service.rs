use async_trait::async_trait;
use tracing::info;

use super::not_found::log_not_found_cause;
use crate::gadget::application::ports::incoming::use_cases::{
    UpdateGadgetStatusCommand, UpdateGadgetStatusError, UpdateGadgetStatusUseCase,
};
use crate::gadget::application::ports::outgoing::{
    GadgetQuery, GadgetRepository, GadgetRepositoryError, GadgetResult,
};

#[derive(Clone)]
pub struct UpdateGadgetStatusService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateGadgetStatusService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateGadgetStatusUseCase for UpdateGadgetStatusService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    async fn execute(
        &self,
        command: UpdateGadgetStatusCommand,
    ) -> Result<GadgetResult, UpdateGadgetStatusError> {
        let owner = command.owner();
        let gadget_id = command.gadget_id();

        match self
            .repository
            .update_status(owner, gadget_id, command.status())
            .await
        {
            Ok(gadget) => {
                info!(
                    user_id = %owner,
                    gadget_id = %gadget_id,
                    status = %gadget.status,
                    "Gadget status updated"
                );
                Ok(gadget)
            }
            Err(GadgetRepositoryError::NotFound) => {
                log_not_found_cause(&self.query, "update_status", owner, gadget_id).await;
                Err(UpdateGadgetStatusError::NotFound)
            }
            Err(e) => Err(UpdateGadgetStatusError::RepositoryError(e.to_string())),
        }
    }
}
