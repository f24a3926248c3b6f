use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::entities::{GadgetStatus, InvalidStatus};
use crate::gadget::application::ports::outgoing::GadgetResult;

//
// ──────────────────────────────────────────────────────────
// List Gadgets Query
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ListGadgetsQuery {
    owner: UserId,
    statuses: Vec<GadgetStatus>,
}

impl ListGadgetsQuery {
    /// A blank or missing filter lists every active gadget. Otherwise the
    /// filter must name one active status, in any case.
    pub fn new(owner: UserId, status: Option<&str>) -> Result<Self, InvalidStatus> {
        let statuses = match status.map(str::trim).filter(|s| !s.is_empty()) {
            None => GadgetStatus::ACTIVE.to_vec(),
            Some(raw) => vec![GadgetStatus::parse_active(raw)?],
        };

        Ok(Self { owner, statuses })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn statuses(&self) -> &[GadgetStatus] {
        &self.statuses
    }
}

//
// ──────────────────────────────────────────────────────────
// Result / Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct GadgetListItem {
    pub gadget: GadgetResult,
    pub success_probability: u8,
    pub display: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListGadgetsError {
    #[error("Failed to fetch gadgets: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListGadgetsUseCase: Send + Sync {
    async fn execute(&self, query: ListGadgetsQuery)
        -> Result<Vec<GadgetListItem>, ListGadgetsError>;
}
