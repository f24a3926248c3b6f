pub mod auth_cookie;
pub mod extractors;
pub mod routes;
