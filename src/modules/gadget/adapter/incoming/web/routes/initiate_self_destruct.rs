use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::SelfDestructTicketResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::gadget::application::ports::incoming::use_cases::InitiateSelfDestructError;
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Start the self-destruct sequence
///
/// Issues a fresh confirmation code, replacing any earlier one. The gadget's
/// status is unchanged until the code is confirmed.
#[utoipa::path(
    post,
    path = "/api/gadgets/{id}/self-destruct",
    tag = "gadgets",
    params(("id" = Uuid, Path, description = "Gadget id")),
    responses(
        (
            status = 200,
            description = "Confirmation code issued",
            body = inline(SuccessResponse<SelfDestructTicketResponse>)
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No such active gadget for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("cookieAuth" = []), ("bearerAuth" = []))
)]
#[post("/api/gadgets/{id}/self-destruct")]
pub async fn initiate_self_destruct_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let gadget_id = path.into_inner();

    match data
        .gadget
        .initiate_self_destruct
        .execute(user.user_id, gadget_id)
        .await
    {
        Ok(ticket) => ApiResponse::success(SelfDestructTicketResponse::from(ticket)),
        Err(e) => map_initiate_error(gadget_id, e),
    }
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_initiate_error(gadget_id: Uuid, err: InitiateSelfDestructError) -> HttpResponse {
    match err {
        InitiateSelfDestructError::NotFound => {
            ApiResponse::not_found("GADGET_NOT_FOUND", "Gadget not found")
        }
        InitiateSelfDestructError::RepositoryError(msg) => {
            error!(gadget_id = %gadget_id, error = %msg, "Failed to initiate self-destruct");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
