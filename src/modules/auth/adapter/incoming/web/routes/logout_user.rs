use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out")]
    message: String,
}

/// Log out
///
/// Expires the `token` cookie. Tokens are stateless, so a copy of the JWT
/// held elsewhere stays valid until its `exp`.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (
            status = 200,
            description = "Cookie cleared",
            body = inline(SuccessResponse<LogoutResponseBody>)
        ),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(data: web::Data<AppState>) -> impl Responder {
    tracing::debug!("Clearing auth cookie");

    ApiResponse::success_with_cookie(
        LogoutResponseBody {
            message: "Logged out".to_string(),
        },
        data.auth_cookie.removal_cookie(),
    )
}
