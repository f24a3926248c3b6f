pub mod gadget_query;
pub mod gadget_repository;

pub use gadget_query::{GadgetLocation, GadgetQuery, GadgetQueryError};
pub use gadget_repository::{
    CreateGadgetData, GadgetRepository, GadgetRepositoryError, GadgetResult,
};
