use crate::auth::adapter::incoming::web::auth_cookie::AuthCookieConfig;
use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase,
};
use crate::gadget::application::domain::random::seeded_rng;
use crate::gadget::application::gadget_use_cases::GadgetUseCases;
use crate::tests::support::gadget_fixtures::InMemoryGadgetStore;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn IRegisterUserUseCase + Send + Sync>>,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    auth_cookie: AuthCookieConfig,
    gadget: Option<GadgetUseCases>,
}

/// Real gadget services over an in-memory store with a fixed seed.
pub fn in_memory_gadget_use_cases(store: InMemoryGadgetStore) -> GadgetUseCases {
    GadgetUseCases::new(store.clone(), store, seeded_rng(42))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(Arc::new(StubRegisterUserUseCase)),
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            auth_cookie: AuthCookieConfig { secure: false },
            gadget: Some(in_memory_gadget_use_cases(InMemoryGadgetStore::default())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Some(Arc::new(uc));
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_gadget_store(mut self, store: InMemoryGadgetStore) -> Self {
        self.gadget = Some(in_memory_gadget_use_cases(store));
        self
    }

    pub fn with_gadget_use_cases(mut self, use_cases: GadgetUseCases) -> Self {
        self.gadget = Some(use_cases);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user.unwrap(),
            login_user_use_case: self.login_user.unwrap(),
            auth_cookie: self.auth_cookie,
            gadget: self
                .gadget
                .expect("Gadget use cases must be initialized"),
        })
    }
}
