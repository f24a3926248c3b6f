use anyhow::Context;
use std::env;

use crate::auth::adapter::incoming::web::auth_cookie::AuthCookieConfig;
use crate::auth::adapter::outgoing::jwt::JwtConfig;

/// Everything the binary reads from the environment at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    pub auth_cookie: AuthCookieConfig,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and then reads the process environment.
    pub fn load() -> anyhow::Result<Self> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{rust_env}");
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_env()
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{raw}'"))?,
            Err(_) => 8080,
        };
        let jwt = JwtConfig::from_env().context("Invalid JWT configuration")?;

        Ok(Self {
            database_url,
            host,
            port,
            jwt,
            auth_cookie: AuthCookieConfig::from_env(),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
