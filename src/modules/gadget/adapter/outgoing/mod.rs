mod gadget_query_postgres;
mod gadget_repository_postgres;
pub mod sea_orm_entity;

pub use gadget_query_postgres::GadgetQueryPostgres;
pub use gadget_repository_postgres::GadgetRepositoryPostgres;
