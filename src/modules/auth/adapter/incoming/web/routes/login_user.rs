use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "agent_007")]
    pub username: String,

    #[schema(example = "shaken-not-stirred")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Same JWT that is set in the `token` cookie
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "Bearer")]
    token_type: String,

    /// Seconds until the token expires
    #[schema(example = 3600)]
    expires_in: i64,

    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "agent_007")]
    username: String,
}

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// User login
///
/// Verifies the credentials, sets an HttpOnly `token` cookie and also
/// returns the token in the body for non-browser clients.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful, `token` cookie set",
            body = inline(SuccessResponse<LoginResponse>)
        ),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match LoginCommand::new(dto.username, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(username = %command.username(), "Login attempt");

    match data.login_user_use_case.execute(command).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in");

            let cookie = data
                .auth_cookie
                .session_cookie(response.access_token.clone(), response.expires_in);

            ApiResponse::success_with_cookie(
                LoginResponse {
                    access_token: response.access_token,
                    token_type: "Bearer".to_string(),
                    expires_in: response.expires_in,
                    user: LoginUserInfo {
                        id: response.user.id.to_string(),
                        username: response.user.username,
                    },
                },
                cookie,
            )
        }
        Err(e) => map_login_error(e),
    }
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        LoginError::PasswordVerificationFailed(e) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }
        LoginError::TokenGenerationFailed(e) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        LoginError::QueryError(e) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
