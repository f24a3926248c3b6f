use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{ConfirmSelfDestructRequest, GadgetResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::gadget::application::ports::incoming::use_cases::{
    ConfirmSelfDestructCommand, ConfirmSelfDestructError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Confirm a pending self-destruct
#[utoipa::path(
    post,
    path = "/api/gadgets/{id}/self-destruct/confirm",
    tag = "gadgets",
    params(("id" = Uuid, Path, description = "Gadget id")),
    request_body = ConfirmSelfDestructRequest,
    responses(
        (
            status = 200,
            description = "Gadget destroyed",
            body = inline(SuccessResponse<GadgetResponse>)
        ),
        (
            status = 400,
            description = "Code missing, wrong, or no self-destruct pending",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CONFIRMATION_CODE",
                    "message": "Invalid confirmation code"
                }
            })
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No such active gadget for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("cookieAuth" = []), ("bearerAuth" = []))
)]
#[post("/api/gadgets/{id}/self-destruct/confirm")]
pub async fn confirm_self_destruct_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<ConfirmSelfDestructRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let gadget_id = path.into_inner();

    let command =
        match ConfirmSelfDestructCommand::new(user.user_id, gadget_id, &req.confirmation_code) {
            Ok(cmd) => cmd,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.gadget.confirm_self_destruct.execute(command).await {
        Ok(gadget) => ApiResponse::success(GadgetResponse::from(gadget)),
        Err(e) => map_confirm_error(gadget_id, e),
    }
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_confirm_error(gadget_id: Uuid, err: ConfirmSelfDestructError) -> HttpResponse {
    match err {
        ConfirmSelfDestructError::NotFound => {
            ApiResponse::not_found("GADGET_NOT_FOUND", "Gadget not found")
        }
        ConfirmSelfDestructError::InvalidConfirmationCode => {
            ApiResponse::bad_request("INVALID_CONFIRMATION_CODE", "Invalid confirmation code")
        }
        ConfirmSelfDestructError::RepositoryError(msg) => {
            error!(gadget_id = %gadget_id, error = %msg, "Failed to confirm self-destruct");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
