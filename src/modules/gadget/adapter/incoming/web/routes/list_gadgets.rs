use actix_web::{get, web, HttpResponse, Responder};
use tracing::{debug, error};

use super::dto::{GadgetListItemResponse, ListGadgetsParams};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::gadget::application::ports::incoming::use_cases::{ListGadgetsError, ListGadgetsQuery};
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// List the caller's active gadgets
///
/// Each item carries a success probability sampled for this response only.
#[utoipa::path(
    get,
    path = "/api/gadgets",
    tag = "gadgets",
    params(ListGadgetsParams),
    responses(
        (
            status = 200,
            description = "Gadgets",
            body = inline(SuccessResponse<Vec<GadgetListItemResponse>>)
        ),
        (
            status = 400,
            description = "Unknown status filter",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_STATUS",
                    "message": "Invalid status 'DESTROYED': expected AVAILABLE or DEPLOYED"
                }
            })
        ),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("cookieAuth" = []), ("bearerAuth" = []))
)]
#[get("/api/gadgets")]
pub async fn list_gadgets_handler(
    user: AuthenticatedUser,
    params: web::Query<ListGadgetsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = match ListGadgetsQuery::new(user.user_id, params.status.as_deref()) {
        Ok(q) => q,
        Err(e) => {
            debug!(user_id = %user.user_id, error = %e, "Rejected gadget list filter");
            return ApiResponse::bad_request("INVALID_STATUS", &e.to_string());
        }
    };

    match data.gadget.list.execute(query).await {
        Ok(items) => ApiResponse::success(
            items
                .into_iter()
                .map(GadgetListItemResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => map_list_error(e),
    }
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_list_error(err: ListGadgetsError) -> HttpResponse {
    match err {
        ListGadgetsError::QueryFailed(msg) => {
            error!(error = %msg, "Failed to list gadgets");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::gadget::application::domain::entities::GadgetStatus;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{auth_cookie, test_token_provider, StubTokenProvider};
    use crate::tests::support::gadget_fixtures::{sample_gadget, InMemoryGadgetStore};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use uuid::Uuid;

    fn seeded_store(owner: UserId) -> InMemoryGadgetStore {
        let store = InMemoryGadgetStore::default();
        store.insert(sample_gadget(owner, "the-iron-owl", GadgetStatus::Available));
        store.insert(sample_gadget(owner, "the-rapid-fox", GadgetStatus::Deployed));
        store.insert(sample_gadget(owner, "the-golden-hawk", GadgetStatus::Destroyed));
        store.insert(sample_gadget(owner, "the-velvet-lynx", GadgetStatus::Decommissioned));
        store
    }

    #[actix_web::test]
    async fn test_list_defaults_to_active_gadgets() {
        let owner = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_gadget_store(seeded_store(UserId::from(owner)))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(StubTokenProvider::accepting(owner)))
                .service(list_gadgets_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/gadgets")
            .cookie(auth_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let items = body["data"].as_array().unwrap();
        let names: Vec<&str> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["the-iron-owl", "the-rapid-fox"]);

        for item in items {
            let name = item["name"].as_str().unwrap();
            let p = item["success_probability"].as_u64().unwrap();
            assert!((1..=100).contains(&p));
            assert_eq!(
                item["display"],
                format!("{name} - {p}% success probability")
            );
        }
    }

    #[actix_web::test]
    async fn test_list_filter_is_case_insensitive() {
        let owner = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_gadget_store(seeded_store(UserId::from(owner)))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(StubTokenProvider::accepting(owner)))
                .service(list_gadgets_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/gadgets?status=deployed")
            .cookie(auth_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["status"], "DEPLOYED");
    }

    #[actix_web::test]
    async fn test_list_rejects_terminal_filter() {
        let owner = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(StubTokenProvider::accepting(owner)))
                .service(list_gadgets_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/gadgets?status=DESTROYED")
            .cookie(auth_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_STATUS");
    }

    #[actix_web::test]
    async fn test_list_requires_authentication() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider(StubTokenProvider::accepting(Uuid::new_v4())))
                .service(list_gadgets_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/gadgets").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
