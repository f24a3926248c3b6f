use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .field("access_token_expiry", &self.config.access_token_expiry)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn map_decode_error(e: jsonwebtoken::errors::Error) -> TokenError {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::ExpiredSignature => {
                tracing::debug!("Token verification failed: expired");
                TokenError::TokenExpired
            }
            ErrorKind::ImmatureSignature => {
                tracing::warn!("Token verification failed: not yet valid");
                TokenError::TokenNotYetValid
            }
            ErrorKind::InvalidSignature => {
                tracing::warn!("Token verification failed: invalid signature");
                TokenError::InvalidSignature
            }
            ErrorKind::InvalidIssuer => {
                tracing::warn!("Token verification failed: foreign issuer");
                TokenError::InvalidSignature
            }
            _ => {
                tracing::debug!(error = %e, "Token verification failed: malformed");
                TokenError::MalformedToken
            }
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(Self::map_decode_error)?
            .claims;

        if claims.token_type != ACCESS_TOKEN_TYPE {
            tracing::warn!(token_type = %claims.token_type, "Unexpected token type");
            return Err(TokenError::InvalidTokenType(ACCESS_TOKEN_TYPE.to_string()));
        }

        Ok(claims)
    }

    fn access_token_ttl_seconds(&self) -> i64 {
        self.config.access_token_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_expiry(expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: "test-secret-that-is-long-enough-for-hs256".to_string(),
            issuer: "gadget-inventory-test".to_string(),
            access_token_expiry: expiry,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config_with_expiry(3600))
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = service();
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.iss, "gadget-inventory-test");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let result = service().verify_token("invalid.jwt.token");
        assert_eq!(result.unwrap_err(), TokenError::MalformedToken);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenService::new(JwtConfig {
            secret_key: "another-secret-that-is-also-long-enough".to_string(),
            ..config_with_expiry(3600)
        });
        let token = other.generate_access_token(Uuid::new_v4()).unwrap();

        let result = service().verify_token(&token);
        assert_eq!(result.unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: Uuid::new_v4(),
            exp: now - 120,
            iat: now - 240,
            nbf: now - 240,
            iss: "gadget-inventory-test".to_string(),
            token_type: "access".to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &service.encoding_key,
        )
        .unwrap();

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::TokenExpired
        );
    }

    #[test]
    fn test_non_access_token_type_is_rejected() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: Uuid::new_v4(),
            exp: now + 600,
            iat: now,
            nbf: now,
            iss: "gadget-inventory-test".to_string(),
            token_type: "refresh".to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &service.encoding_key,
        )
        .unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(TokenError::InvalidTokenType(_))
        ));
    }

    #[test]
    fn test_ttl_reflects_config() {
        assert_eq!(
            JwtTokenService::new(config_with_expiry(900)).access_token_ttl_seconds(),
            900
        );
    }
}
