use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, LogoutResponseBody, RegisterUserRequest,
    RegisteredUserResponse,
};
use crate::gadget::adapter::incoming::web::routes::{
    ConfirmSelfDestructRequest, GadgetListItemResponse, GadgetResponse,
    SelfDestructTicketResponse, UpdateGadgetStatusRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gadget Inventory API",
        version = "1.0.0",
        description = "Per-user gadget inventory with codenames and two-step self-destruct"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,

        // Gadget endpoints
        crate::gadget::adapter::incoming::web::routes::list_gadgets_handler,
        crate::gadget::adapter::incoming::web::routes::create_gadget_handler,
        crate::gadget::adapter::incoming::web::routes::update_gadget_status_handler,
        crate::gadget::adapter::incoming::web::routes::decommission_gadget_handler,
        crate::gadget::adapter::incoming::web::routes::initiate_self_destruct_handler,
        crate::gadget::adapter::incoming::web::routes::confirm_self_destruct_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterUserRequest,
            RegisteredUserResponse,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            LogoutResponseBody,

            // Gadget DTOs
            GadgetResponse,
            GadgetListItemResponse,
            SelfDestructTicketResponse,
            UpdateGadgetStatusRequest,
            ConfirmSelfDestructRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and session endpoints"),
        (name = "gadgets", description = "Gadget inventory endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT issued by /api/auth/login"))
                        .build(),
                ),
            );
            components.add_security_scheme(
                "cookieAuth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_gadget_routes() {
        let doc = ApiDoc::openapi();

        let paths = &doc.paths.paths;

        for route in [
            "/api/gadgets",
            "/api/gadgets/{id}",
            "/api/gadgets/{id}/self-destruct",
            "/api/gadgets/{id}/self-destruct/confirm",
            "/api/auth/login",
        ] {
            assert!(paths.contains_key(route), "missing {route}");
        }
    }

    #[test]
    fn document_registers_both_security_schemes() {
        let doc = ApiDoc::openapi();
        let schemes = &doc
            .components
            .as_ref()
            .expect("components present")
            .security_schemes;

        assert!(schemes.contains_key("bearerAuth"));
        assert!(schemes.contains_key("cookieAuth"));
    }
}
