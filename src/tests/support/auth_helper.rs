use actix_web::{cookie::Cookie, web};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::auth_cookie::AUTH_COOKIE_NAME;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

/// Token provider that skips cryptography: every token either maps to one
/// fixed user or is rejected.
#[derive(Debug, Clone)]
pub struct StubTokenProvider {
    user_id: Option<Uuid>,
}

impl StubTokenProvider {
    pub fn accepting(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn rejecting() -> Self {
        Self { user_id: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("stub-token-{user_id}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let sub = self.user_id.ok_or(TokenError::InvalidSignature)?;
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub,
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "gadget-inventory-test".to_string(),
            token_type: "access".to_string(),
        })
    }

    fn access_token_ttl_seconds(&self) -> i64 {
        3600
    }
}

/// Shaped the way the auth extractor looks it up.
pub fn test_token_provider(
    provider: StubTokenProvider,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

pub fn auth_cookie() -> Cookie<'static> {
    Cookie::new(AUTH_COOKIE_NAME, "stub-session")
}
