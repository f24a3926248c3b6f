use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::entities::GadgetStatus;

#[derive(Debug, Clone)]
pub struct CreateGadgetData {
    pub owner: UserId,
    pub name: String,
}

/// A gadget row as the store returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct GadgetResult {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    pub status: GadgetStatus,
    pub confirmation_code: Option<String>,
    pub decommissioned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GadgetRepositoryError {
    #[error("Gadget name already taken")]
    NameTaken,

    /// No active gadget matched the id/owner (and, for `destroy`, the code).
    #[error("Gadget not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Writes. Every mutation is one owner-scoped statement that only touches
/// gadgets in an active state.
#[async_trait]
pub trait GadgetRepository: Send + Sync {
    /// Inserts with status `AVAILABLE`. `NameTaken` on a unique-name collision.
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

    /// Sets `DECOMMISSIONED` and `decommissioned_at`, dropping any pending code.
    async fn decommission(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<GadgetResult, GadgetRepositoryError>;

    /// Overwrites any previously pending code.
    async fn set_confirmation_code(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        code: String,
    ) -> Result<GadgetResult, GadgetRepositoryError>;

    /// Sets `DESTROYED` and clears the code, but only while the stored code
    /// still equals `expected_code`.
    async fn destroy(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        expected_code: &str,
    ) -> Result<GadgetResult, GadgetRepositoryError>;
}
