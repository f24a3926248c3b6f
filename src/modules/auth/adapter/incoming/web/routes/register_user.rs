use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{
    RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// 3-30 characters: letters, digits, `_` or `-`
    #[schema(example = "agent_007")]
    pub username: String,

    /// 8-128 characters
    #[schema(example = "shaken-not-stirred")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUserResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "agent_007")]
    username: String,

    #[schema(example = "2025-03-10T09:00:00Z")]
    created_at: String,
}

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "User created",
            body = inline(SuccessResponse<RegisteredUserResponse>)
        ),
        (
            status = 400,
            description = "Invalid username or password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Password must be between 8 and 128 characters"
                }
            })
        ),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RegisterUserCommand::new(dto.username, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let username = command.username().to_string();
    info!(username = %username, "Registration attempt");

    match data.register_user_use_case.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "User registered");
            ApiResponse::created(RegisteredUserResponse {
                id: user.id.to_string(),
                username: user.username,
                created_at: user.created_at.to_rfc3339(),
            })
        }
        Err(e) => map_register_error(&username, e),
    }
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_register_error(username: &str, err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::UsernameTaken => {
            warn!(username = %username, "Registration rejected: username taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Username is already taken")
        }
        RegisterUserError::HashingFailed(msg) => {
            error!(error = %msg, "Password hashing failed during registration");
            ApiResponse::internal_error()
        }
        RegisterUserError::RepositoryError(msg) => {
            error!(error = %msg, "Repository error during registration");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
