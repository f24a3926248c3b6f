use std::sync::Arc;

use crate::gadget::application::{
    domain::random::SharedRng,
    ports::{
        incoming::use_cases::{
            ConfirmSelfDestructUseCase, CreateGadgetUseCase, DecommissionGadgetUseCase,
            InitiateSelfDestructUseCase, ListGadgetsUseCase, UpdateGadgetStatusUseCase,
        },
        outgoing::{GadgetQuery, GadgetRepository},
    },
    services::{
        ConfirmSelfDestructService, CreateGadgetService, DecommissionGadgetService,
        InitiateSelfDestructService, ListGadgetsService, UpdateGadgetStatusService,
    },
};

#[derive(Clone)]
pub struct GadgetUseCases {
    pub create: Arc<dyn CreateGadgetUseCase + Send + Sync>,
    pub list: Arc<dyn ListGadgetsUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateGadgetStatusUseCase + Send + Sync>,
    pub decommission: Arc<dyn DecommissionGadgetUseCase + Send + Sync>,
    pub initiate_self_destruct: Arc<dyn InitiateSelfDestructUseCase + Send + Sync>,
    pub confirm_self_destruct: Arc<dyn ConfirmSelfDestructUseCase + Send + Sync>,
}

impl GadgetUseCases {
    /// Wires every gadget service over the same ports and random source.
    pub fn new<Q, R>(query: Q, repository: R, rng: SharedRng) -> Self
    where
        Q: GadgetQuery + Clone + 'static,
        R: GadgetRepository + Clone + 'static,
    {
        Self {
            create: Arc::new(CreateGadgetService::new(repository.clone(), rng.clone())),
            list: Arc::new(ListGadgetsService::new(query.clone(), rng.clone())),
            update_status: Arc::new(UpdateGadgetStatusService::new(
                query.clone(),
                repository.clone(),
            )),
            decommission: Arc::new(DecommissionGadgetService::new(
                query.clone(),
                repository.clone(),
            )),
            initiate_self_destruct: Arc::new(InitiateSelfDestructService::new(
                query.clone(),
                repository.clone(),
                rng,
            )),
            confirm_self_destruct: Arc::new(ConfirmSelfDestructService::new(query, repository)),
        }
    }
}
