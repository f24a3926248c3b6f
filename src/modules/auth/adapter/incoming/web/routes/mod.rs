mod login_user;
mod logout_user;
mod register_user;

pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo};
pub use logout_user::{logout_user_handler, LogoutResponseBody};
pub use register_user::{register_user_handler, RegisterUserRequest, RegisteredUserResponse};

// Exposed for the OpenAPI document.
pub use login_user::__path_login_user_handler;
pub use logout_user::__path_logout_user_handler;
pub use register_user::__path_register_user_handler;
