use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::name_generator::generate_codename;
use crate::gadget::application::domain::random::SharedRng;
use crate::gadget::application::ports::incoming::use_cases::{
    CreateGadgetError, CreateGadgetUseCase, MAX_NAME_ATTEMPTS,
};
use crate::gadget::application::ports::outgoing::{
    CreateGadgetData, GadgetRepository, GadgetRepositoryError, GadgetResult,
};

#[derive(Clone)]
pub struct CreateGadgetService<R>
where
    R: GadgetRepository,
{
    repository: R,
    rng: SharedRng,
}

impl<R> CreateGadgetService<R>
where
    R: GadgetRepository,
{
    pub fn new(repository: R, rng: SharedRng) -> Self {
        Self { repository, rng }
    }

    async fn next_name(&self) -> String {
        let mut rng = self.rng.lock().await;
        generate_codename(&mut *rng)
    }
}

#[async_trait]
impl<R> CreateGadgetUseCase for CreateGadgetService<R>
where
    R: GadgetRepository,
{
    async fn execute(&self, owner: UserId) -> Result<GadgetResult, CreateGadgetError> {
        // The unique index on gadgets.name arbitrates; a collision just means roll again
        for attempt in 1..=MAX_NAME_ATTEMPTS {
            let name = self.next_name().await;

            let data = CreateGadgetData {
                owner,
                name: name.clone(),
            };

            match self.repository.create_gadget(data).await {
                Ok(gadget) => {
                    info!(
                        user_id = %owner,
                        gadget_id = %gadget.id,
                        name = %gadget.name,
                        attempt,
                        "Gadget created"
                    );
                    return Ok(gadget);
                }
                Err(GadgetRepositoryError::NameTaken) => {
                    warn!(user_id = %owner, name = %name, attempt, "Gadget name collision");
                }
                Err(e) => return Err(CreateGadgetError::RepositoryError(e.to_string())),
            }
        }

        error!(
            user_id = %owner,
            attempts = MAX_NAME_ATTEMPTS,
            "Gave up generating a unique gadget name"
        );
        Err(CreateGadgetError::NameExhaustion)
    }
}
