use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::gadgets::{Column, Entity, GadgetStatusColumn};
use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::entities::GadgetStatus;
use crate::gadget::application::ports::outgoing::{
    GadgetLocation, GadgetQuery, GadgetQueryError, GadgetResult,
};

#[derive(Debug, Clone)]
pub struct GadgetQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GadgetQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GadgetQuery for GadgetQueryPostgres {
    async fn list_by_statuses(
        &self,
        owner: UserId,
        statuses: &[GadgetStatus],
    ) -> Result<Vec<GadgetResult>, GadgetQueryError> {
        let status_columns: Vec<GadgetStatusColumn> = statuses
            .iter()
            .copied()
            .map(GadgetStatusColumn::from)
            .collect();

        let gadgets = Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .filter(Column::Status.is_in(status_columns))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(gadgets.iter().map(|model| model.to_result()).collect())
    }

    async fn find_owned(
        &self,
        owner: UserId,
        gadget_id: Uuid,
    ) -> Result<Option<GadgetResult>, GadgetQueryError> {
        let gadget = Entity::find_by_id(gadget_id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(gadget.map(|model| model.to_result()))
    }

    async fn find_owner_and_status(
        &self,
        gadget_id: Uuid,
    ) -> Result<Option<GadgetLocation>, GadgetQueryError> {
        let gadget = Entity::find_by_id(gadget_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(gadget.map(|model| GadgetLocation {
            owner: UserId::from(model.user_id),
            status: model.status.into(),
        }))
    }
}

fn map_db_err(e: DbErr) -> GadgetQueryError {
    GadgetQueryError::DatabaseError(e.to_string())
}
