use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::gadget::application::ports::incoming::use_cases::{
    GadgetListItem, SelfDestructTicket,
};
use crate::gadget::application::ports::outgoing::GadgetResult;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateGadgetStatusRequest {
    /// `AVAILABLE` or `DEPLOYED`, case-insensitive
    #[schema(example = "DEPLOYED")]
    pub status: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ConfirmSelfDestructRequest {
    #[schema(example = "X9K2PQ")]
    pub confirmation_code: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListGadgetsParams {
    /// Only gadgets in this status (`AVAILABLE` or `DEPLOYED`). Omit for both.
    pub status: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

/// A gadget as its owner sees it. The confirmation code itself is only ever
/// returned by the initiate endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct GadgetResponse {
    #[schema(example = "0b9c2f7e-3d4a-4e51-9a8c-2f1e6d7b8a90")]
    pub id: String,

    #[schema(example = "the-silent-falcon")]
    pub name: String,

    #[schema(example = "AVAILABLE")]
    pub status: String,

    pub self_destruct_pending: bool,

    pub decommissioned_at: Option<String>,

    #[schema(example = "2025-03-10T09:00:00Z")]
    pub created_at: String,

    #[schema(example = "2025-03-10T09:00:00Z")]
    pub updated_at: String,
}

impl From<GadgetResult> for GadgetResponse {
    fn from(gadget: GadgetResult) -> Self {
        Self {
            id: gadget.id.to_string(),
            name: gadget.name,
            status: gadget.status.as_str().to_string(),
            self_destruct_pending: gadget.confirmation_code.is_some(),
            decommissioned_at: gadget.decommissioned_at.map(|at| at.to_rfc3339()),
            created_at: gadget.created_at.to_rfc3339(),
            updated_at: gadget.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GadgetListItemResponse {
    #[schema(example = "0b9c2f7e-3d4a-4e51-9a8c-2f1e6d7b8a90")]
    pub id: String,

    #[schema(example = "the-silent-falcon")]
    pub name: String,

    #[schema(example = "DEPLOYED")]
    pub status: String,

    pub self_destruct_pending: bool,

    /// Sampled per request, never stored
    #[schema(example = 87, minimum = 1, maximum = 100)]
    pub success_probability: u8,

    #[schema(example = "the-silent-falcon - 87% success probability")]
    pub display: String,

    #[schema(example = "2025-03-10T09:00:00Z")]
    pub created_at: String,
}

impl From<GadgetListItem> for GadgetListItemResponse {
    fn from(item: GadgetListItem) -> Self {
        Self {
            id: item.gadget.id.to_string(),
            name: item.gadget.name,
            status: item.gadget.status.as_str().to_string(),
            self_destruct_pending: item.gadget.confirmation_code.is_some(),
            success_probability: item.success_probability,
            display: item.display,
            created_at: item.gadget.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SelfDestructTicketResponse {
    #[schema(example = "0b9c2f7e-3d4a-4e51-9a8c-2f1e6d7b8a90")]
    pub id: String,

    #[schema(example = "the-silent-falcon")]
    pub name: String,

    /// Echo this back to the confirm endpoint
    #[schema(example = "X9K2PQ")]
    pub confirmation_code: String,
}

impl From<SelfDestructTicket> for SelfDestructTicketResponse {
    fn from(ticket: SelfDestructTicket) -> Self {
        Self {
            id: ticket.id.to_string(),
            name: ticket.name,
            confirmation_code: ticket.confirmation_code,
        }
    }
}
