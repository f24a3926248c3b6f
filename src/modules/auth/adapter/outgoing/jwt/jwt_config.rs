use anyhow::{bail, Context};
use std::env;

const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 3600;
const MAX_ACCESS_EXPIRY_SECS: i64 = 86_400;
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_ACCESS_EXPIRY`.
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "gadget-inventory".to_string());
        let access_token_expiry = match env::var("JWT_ACCESS_EXPIRY") {
            Ok(raw) => raw
                .parse::<i64>()
                .with_context(|| format!("Invalid JWT_ACCESS_EXPIRY value: {raw}"))?,
            Err(_) => DEFAULT_ACCESS_EXPIRY_SECS,
        };

        Self::new(secret_key, issuer, access_token_expiry)
    }

    pub fn new(
        secret_key: String,
        issuer: String,
        access_token_expiry: i64,
    ) -> anyhow::Result<Self> {
        // HS256 needs at least 256 bits of key material
        if secret_key.len() < MIN_SECRET_LEN {
            bail!("JWT_SECRET must be at least {MIN_SECRET_LEN} characters long for HS256");
        }

        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY_SECS {
            bail!("JWT_ACCESS_EXPIRY must be between 1 and {MAX_ACCESS_EXPIRY_SECS} seconds");
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
