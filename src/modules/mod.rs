pub mod auth;
pub mod gadget;
