use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::entities::GadgetStatus;
use crate::gadget::application::ports::outgoing::{
    CreateGadgetData, GadgetLocation, GadgetQuery, GadgetQueryError, GadgetRepository,
    GadgetRepositoryError, GadgetResult,
};

pub fn sample_gadget(owner: UserId, name: &str, status: GadgetStatus) -> GadgetResult {
    let now = Utc::now();
    GadgetResult {
        id: Uuid::new_v4(),
        owner,
        name: name.to_string(),
        status,
        confirmation_code: None,
        decommissioned_at: (status == GadgetStatus::Decommissioned).then_some(now),
        created_at: now,
        updated_at: now,
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Behaves like the Postgres adapters: names are unique across all owners and
/// every mutation is scoped to the owner and to active gadgets. Rows keep
/// insertion order, which stands in for `created_at` ordering.
#[derive(Clone, Default)]
pub struct InMemoryGadgetStore {
    rows: Arc<Mutex<Vec<GadgetResult>>>,
    create_attempts: Arc<AtomicUsize>,
}

impl InMemoryGadgetStore {
    pub fn insert(&self, gadget: GadgetResult) -> GadgetResult {
        self.rows.lock().unwrap().push(gadget.clone());
        gadget
    }

    pub fn get(&self, gadget_id: Uuid) -> Option<GadgetResult> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == gadget_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn create_attempts(&self) -> usize {
        self.create_attempts.load(Ordering::SeqCst)
    }

    fn update_active<F>(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        apply: F,
    ) -> Result<GadgetResult, GadgetRepositoryError>
    where
        F: FnOnce(&mut GadgetResult) -> bool,
    {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|g| g.id == gadget_id && g.owner == owner && !g.status.is_terminal())
            .ok_or(GadgetRepositoryError::NotFound)?;

        let mut candidate = row.clone();
        if !apply(&mut candidate) {
            return Err(GadgetRepositoryError::NotFound);
        }
        candidate.updated_at = Utc::now();
        *row = candidate.clone();
        Ok(candidate)
    }
}

#[async_trait]
impl GadgetRepository for InMemoryGadgetStore {
    async fn create_gadget(
        &self,
        data: CreateGadgetData,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        self.create_attempts.fetch_add(1, Ordering::SeqCst);

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|g| g.name == data.name) {
            return Err(GadgetRepositoryError::NameTaken);
        }

        let gadget = sample_gadget(data.owner, &data.name, GadgetStatus::Available);
        rows.push(gadget.clone());
        Ok(gadget)
    }

    async fn update_status(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        status: GadgetStatus,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        self.update_active(owner, gadget_id, |g| {
            g.status = status;
            true
        })
    }

    async fn decommission(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        self.update_active(owner, gadget_id, |g| {
            g.status = GadgetStatus::Decommissioned;
            g.decommissioned_at = Some(at);
            g.confirmation_code = None;
            true
        })
    }

    async fn set_confirmation_code(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        code: String,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        self.update_active(owner, gadget_id, |g| {
            g.confirmation_code = Some(code);
            true
        })
    }

    async fn destroy(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        expected_code: &str,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        self.update_active(owner, gadget_id, |g| {
            if g.confirmation_code.as_deref() != Some(expected_code) {
                return false;
            }
            g.status = GadgetStatus::Destroyed;
            g.confirmation_code = None;
            true
        })
    }
}

#[async_trait]
impl GadgetQuery for InMemoryGadgetStore {
    async fn list_by_statuses(
        &self,
        owner: UserId,
        statuses: &[GadgetStatus],
    ) -> Result<Vec<GadgetResult>, GadgetQueryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.owner == owner && statuses.contains(&g.status))
            .cloned()
            .collect())
    }

    async fn find_owned(
        &self,
        owner: UserId,
        gadget_id: Uuid,
    ) -> Result<Option<GadgetResult>, GadgetQueryError> {
        Ok(self.get(gadget_id).filter(|g| g.owner == owner))
    }

    async fn find_owner_and_status(
        &self,
        gadget_id: Uuid,
    ) -> Result<Option<GadgetLocation>, GadgetQueryError> {
        Ok(self.get(gadget_id).map(|g| GadgetLocation {
            owner: g.owner,
            status: g.status,
        }))
    }
}

// ============================================================================
// Mocks
// ============================================================================

mockall::mock! {
    pub GadgetRepository {}

    #[async_trait]
    impl GadgetRepository for GadgetRepository {
        async fn create_gadget(
            &self,
            data: CreateGadgetData,
        ) -> Result<GadgetResult, GadgetRepositoryError>;

        async fn update_status(
            &self,
            owner: UserId,
            gadget_id: Uuid,
            status: GadgetStatus,
        ) -> Result<GadgetResult, GadgetRepositoryError>;

        async fn decommission(
            &self,
            owner: UserId,
            gadget_id: Uuid,
            at: DateTime<Utc>,
        ) -> Result<GadgetResult, GadgetRepositoryError>;

        async fn set_confirmation_code(
            &self,
            owner: UserId,
            gadget_id: Uuid,
            code: String,
        ) -> Result<GadgetResult, GadgetRepositoryError>;

        async fn destroy(
            &self,
            owner: UserId,
            gadget_id: Uuid,
            expected_code: &str,
        ) -> Result<GadgetResult, GadgetRepositoryError>;
    }
}

mockall::mock! {
    pub GadgetQuery {}

    #[async_trait]
    impl GadgetQuery for GadgetQuery {
        async fn list_by_statuses(
            &self,
            owner: UserId,
            statuses: &[GadgetStatus],
        ) -> Result<Vec<GadgetResult>, GadgetQueryError>;

        async fn find_owned(
            &self,
            owner: UserId,
            gadget_id: Uuid,
        ) -> Result<Option<GadgetResult>, GadgetQueryError>;

        async fn find_owner_and_status(
            &self,
            gadget_id: Uuid,
        ) -> Result<Option<GadgetLocation>, GadgetQueryError>;
    }
}
