use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::GadgetResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::gadget::application::ports::incoming::use_cases::DecommissionGadgetError;
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Decommission a gadget
///
/// The row is kept with status `DECOMMISSIONED`; this cannot be undone.
#[utoipa::path(
    delete,
    path = "/api/gadgets/{id}",
    tag = "gadgets",
    params(("id" = Uuid, Path, description = "Gadget id")),
    responses(
        (
            status = 200,
            description = "Gadget decommissioned",
            body = inline(SuccessResponse<GadgetResponse>)
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No such active gadget for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("cookieAuth" = []), ("bearerAuth" = []))
)]
#[delete("/api/gadgets/{id}")]
pub async fn decommission_gadget_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let gadget_id = path.into_inner();

    match data
        .gadget
        .decommission
        .execute(user.user_id, gadget_id)
        .await
    {
        Ok(gadget) => ApiResponse::success(GadgetResponse::from(gadget)),
        Err(e) => map_decommission_error(gadget_id, e),
    }
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_decommission_error(gadget_id: Uuid, err: DecommissionGadgetError) -> HttpResponse {
    match err {
        DecommissionGadgetError::NotFound => {
            ApiResponse::not_found("GADGET_NOT_FOUND", "Gadget not found")
        }
        DecommissionGadgetError::RepositoryError(msg) => {
            error!(gadget_id = %gadget_id, error = %msg, "Failed to decommission gadget");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
