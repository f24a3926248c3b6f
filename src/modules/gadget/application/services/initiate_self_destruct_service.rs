use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::not_found::log_not_found_cause;
use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::confirmation_code::generate_confirmation_code;
use crate::gadget::application::domain::random::SharedRng;
use crate::gadget::application::ports::incoming::use_cases::{
    InitiateSelfDestructError, InitiateSelfDestructUseCase, SelfDestructTicket,
};
use crate::gadget::application::ports::outgoing::{
    GadgetQuery, GadgetRepository, GadgetRepositoryError,
};

#[derive(Clone)]
pub struct InitiateSelfDestructService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    query: Q,
    repository: R,
    rng: SharedRng,
}

impl<Q, R> InitiateSelfDestructService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    pub fn new(query: Q, repository: R, rng: SharedRng) -> Self {
        Self {
            query,
            repository,
            rng,
        }
    }
}

#[async_trait]
impl<Q, R> InitiateSelfDestructUseCase for InitiateSelfDestructService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        gadget_id: Uuid,
    ) -> Result<SelfDestructTicket, InitiateSelfDestructError> {
        let code = {
            let mut rng = self.rng.lock().await;
            generate_confirmation_code(&mut *rng)
        };

        match self
            .repository
            .set_confirmation_code(owner, gadget_id, code.clone())
            .await
        {
            Ok(gadget) => {
                // The code itself stays out of the logs
                info!(user_id = %owner, gadget_id = %gadget_id, "Self-destruct initiated");
                Ok(SelfDestructTicket {
                    id: gadget.id,
                    name: gadget.name,
                    confirmation_code: code,
                })
            }
            Err(GadgetRepositoryError::NotFound) => {
                log_not_found_cause(&self.query, "initiate_self_destruct", owner, gadget_id).await;
                Err(InitiateSelfDestructError::NotFound)
            }
            Err(e) => Err(InitiateSelfDestructError::RepositoryError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gadget::application::domain::confirmation_code::{CODE_ALPHABET, CODE_LENGTH};
    use crate::gadget::application::domain::entities::GadgetStatus;
    use crate::gadget::application::domain::random::seeded_rng;
    use crate::tests::support::gadget_fixtures::{
        sample_gadget, InMemoryGadgetStore, MockGadgetQuery, MockGadgetRepository,
    };

    #[tokio::test]
    async fn issues_code_and_stores_it() {
        let owner = UserId::from(Uuid::new_v4());
        let store = InMemoryGadgetStore::default();
        let gadget = store.insert(sample_gadget(owner, "the-iron-owl", GadgetStatus::Deployed));
        let service = InitiateSelfDestructService::new(store.clone(), store.clone(), seeded_rng(3));

        let ticket = service.execute(owner, gadget.id).await.unwrap();

        assert_eq!(ticket.id, gadget.id);
        assert_eq!(ticket.name, "the-iron-owl");
        assert_eq!(ticket.confirmation_code.len(), CODE_LENGTH);
        let code = &ticket.confirmation_code;
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));

        let stored = store.get(gadget.id).unwrap();
        assert_eq!(stored.confirmation_code.as_deref(), Some(code.as_str()));
        assert_eq!(stored.status, GadgetStatus::Deployed);
    }

    #[tokio::test]
    async fn reinitiating_replaces_previous_code() {
        let owner = UserId::from(Uuid::new_v4());
        let store = InMemoryGadgetStore::default();
        let gadget = store.insert(sample_gadget(owner, "the-iron-owl", GadgetStatus::Available));
        let service = InitiateSelfDestructService::new(store.clone(), store.clone(), seeded_rng(3));

        let first = service.execute(owner, gadget.id).await.unwrap();
        let second = service.execute(owner, gadget.id).await.unwrap();

        assert_ne!(first.confirmation_code, second.confirmation_code);
        assert_eq!(
            store.get(gadget.id).unwrap().confirmation_code,
            Some(second.confirmation_code)
        );
    }

    #[tokio::test]
    async fn terminal_or_foreign_gadget_is_not_found() {
        let owner = UserId::from(Uuid::new_v4());
        let store = InMemoryGadgetStore::default();
        let destroyed = store.insert(sample_gadget(owner, "the-iron-owl", GadgetStatus::Destroyed));
        let foreign = store.insert(sample_gadget(
            UserId::from(Uuid::new_v4()),
            "the-rapid-fox",
            GadgetStatus::Available,
        ));
        let service = InitiateSelfDestructService::new(store.clone(), store.clone(), seeded_rng(3));

        assert_eq!(
            service.execute(owner, destroyed.id).await,
            Err(InitiateSelfDestructError::NotFound)
        );
        let foreign_result = service.execute(owner, foreign.id).await;
        let missing = service.execute(owner, Uuid::new_v4()).await;
        assert_eq!(foreign_result, Err(InitiateSelfDestructError::NotFound));
        assert_eq!(foreign_result, missing);
        assert!(store.get(foreign.id).unwrap().confirmation_code.is_none());
    }

    #[tokio::test]
    async fn repository_failure_skips_diagnostics() {
        let mut repo = MockGadgetRepository::new();
        repo.expect_set_confirmation_code()
            .times(1)
            .returning(|_, _, _| Err(GadgetRepositoryError::DatabaseError("gone".to_string())));
        let mut query = MockGadgetQuery::new();
        query.expect_find_owner_and_status().never();

        let service = InitiateSelfDestructService::new(query, repo, seeded_rng(3));
        let result = service
            .execute(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(InitiateSelfDestructError::RepositoryError(_))));
    }
}
