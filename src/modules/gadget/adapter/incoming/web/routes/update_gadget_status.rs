use actix_web::{patch, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{GadgetResponse, UpdateGadgetStatusRequest};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::gadget::application::ports::incoming::use_cases::{
    UpdateGadgetStatusCommand, UpdateGadgetStatusError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Move a gadget between AVAILABLE and DEPLOYED
#[utoipa::path(
    patch,
    path = "/api/gadgets/{id}",
    tag = "gadgets",
    params(("id" = Uuid, Path, description = "Gadget id")),
    request_body = UpdateGadgetStatusRequest,
    responses(
        (
            status = 200,
            description = "Status updated",
            body = inline(SuccessResponse<GadgetResponse>)
        ),
        (status = 400, description = "Target status not allowed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (
            status = 404,
            description = "No such gadget for this user, or it is decommissioned/destroyed",
            body = ErrorResponse
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("cookieAuth" = []), ("bearerAuth" = []))
)]
#[patch("/api/gadgets/{id}")]
pub async fn update_gadget_status_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateGadgetStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let gadget_id = path.into_inner();

    let command = match UpdateGadgetStatusCommand::new(user.user_id, gadget_id, &req.status) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("INVALID_STATUS", &e.to_string()),
    };

    match data.gadget.update_status.execute(command).await {
        Ok(gadget) => ApiResponse::success(GadgetResponse::from(gadget)),
        Err(e) => map_update_status_error(gadget_id, e),
    }
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_update_status_error(gadget_id: Uuid, err: UpdateGadgetStatusError) -> HttpResponse {
    match err {
        UpdateGadgetStatusError::NotFound => {
            ApiResponse::not_found("GADGET_NOT_FOUND", "Gadget not found")
        }
        UpdateGadgetStatusError::RepositoryError(msg) => {
            error!(gadget_id = %gadget_id, error = %msg, "Failed to update gadget status");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
