use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::not_found::log_not_found_cause;
use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::ports::incoming::use_cases::{
    DecommissionGadgetError, DecommissionGadgetUseCase,
};
use crate::gadget::application::ports::outgoing::{
    GadgetQuery, GadgetRepository, GadgetRepositoryError, GadgetResult,
};

#[derive(Clone)]
pub struct DecommissionGadgetService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DecommissionGadgetService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DecommissionGadgetUseCase for DecommissionGadgetService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        gadget_id: Uuid,
    ) -> Result<GadgetResult, DecommissionGadgetError> {
        match self
            .repository
            .decommission(owner, gadget_id, Utc::now())
            .await
        {
            Ok(gadget) => {
                info!(user_id = %owner, gadget_id = %gadget_id, "Gadget decommissioned");
                Ok(gadget)
            }
            Err(GadgetRepositoryError::NotFound) => {
                log_not_found_cause(&self.query, "decommission", owner, gadget_id).await;
                Err(DecommissionGadgetError::NotFound)
            }
            Err(e) => Err(DecommissionGadgetError::RepositoryError(e.to_string())),
        }
    }
}
