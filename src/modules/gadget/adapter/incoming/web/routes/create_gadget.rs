use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use super::dto::GadgetResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::ports::incoming::use_cases::CreateGadgetError;
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Create a gadget with a generated codename
#[utoipa::path(
    post,
    path = "/api/gadgets",
    tag = "gadgets",
    responses(
        (
            status = 201,
            description = "Gadget created",
            body = inline(SuccessResponse<GadgetResponse>)
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (
            status = 500,
            description = "No free codename found, or internal error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "NAME_EXHAUSTION",
                    "message": "Could not generate a unique gadget name, try again"
                }
            })
        ),
    ),
    security(("cookieAuth" = []), ("bearerAuth" = []))
)]
#[post("/api/gadgets")]
pub async fn create_gadget_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.gadget.create.execute(user.user_id).await {
        Ok(gadget) => ApiResponse::created(GadgetResponse::from(gadget)),
        Err(e) => map_create_error(user.user_id, e),
    }
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_create_error(owner: UserId, err: CreateGadgetError) -> HttpResponse {
    match err {
        CreateGadgetError::NameExhaustion => ApiResponse::error(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "NAME_EXHAUSTION",
            "Could not generate a unique gadget name, try again",
        ),
        CreateGadgetError::RepositoryError(msg) => {
            error!(user_id = %owner, error = %msg, "Failed to create gadget");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
