use actix_web::cookie::{time::Duration, Cookie, SameSite};

/// Name of the cookie carrying the access token.
pub const AUTH_COOKIE_NAME: &str = "token";

#[derive(Debug, Clone, Copy)]
pub struct AuthCookieConfig {
    /// Adds the `Secure` attribute. Off only for plain-HTTP local development.
    pub secure: bool,
}

impl AuthCookieConfig {
    /// `AUTH_COOKIE_SECURE` wins; otherwise secure everywhere except `RUST_ENV=development|test`.
    pub fn from_env() -> Self {
        let secure = match std::env::var("AUTH_COOKIE_SECURE") {
            Ok(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"),
            Err(_) => !matches!(
                std::env::var("RUST_ENV").as_deref(),
                Ok("development") | Ok("test")
            ),
        };

        Self { secure }
    }

    pub fn session_cookie(&self, token: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build(AUTH_COOKIE_NAME, token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure)
            .max_age(Duration::seconds(max_age_secs))
            .finish()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(AUTH_COOKIE_NAME, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_locked_down() {
        let cookie = AuthCookieConfig { secure: true }.session_cookie("jwt".to_string(), 3600);

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "jwt");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let cookie = AuthCookieConfig { secure: false }.removal_cookie();

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.secure(), Some(false));
    }
}
