use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::gadgets::{
    ActiveModel as GadgetActiveModel, Column, Entity, GadgetStatusColumn, Model as GadgetModel,
};
use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::entities::GadgetStatus;
use crate::gadget::application::ports::outgoing::{
    CreateGadgetData, GadgetRepository, GadgetRepositoryError, GadgetResult,
};
use crate::shared::db::is_unique_violation;

#[derive(Debug, Clone)]
pub struct GadgetRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GadgetRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Applies `changes` to the owner's gadget if it is still active and
    /// returns the updated row. Zero rows matched means `NotFound`.
    async fn update_active(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        changes: GadgetActiveModel,
        narrow: impl FnOnce(UpdateMany<Entity>) -> UpdateMany<Entity> + Send,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        let update = Entity::update_many()
            .set(touch(changes))
            .filter(Column::Id.eq(gadget_id))
            .filter(Column::UserId.eq(owner.value()))
            .filter(Column::Status.is_in(active_columns()));

        let updated: Vec<GadgetModel> = narrow(update)
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(|model| model.to_result())
            .ok_or(GadgetRepositoryError::NotFound)
    }
}

#[async_trait]
impl GadgetRepository for GadgetRepositoryPostgres {
    async fn create_gadget(
        &self,
        data: CreateGadgetData,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        let active = GadgetActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.value()),
            name: Set(data.name),
            status: Set(GadgetStatusColumn::Available),
            confirmation_code: Set(None),
            decommissioned_at: Set(None),
            ..Default::default()
        };

        let inserted: GadgetModel = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                GadgetRepositoryError::NameTaken
            } else {
                map_db_err(e)
            }
        })?;

        Ok(inserted.to_result())
    }

    async fn update_status(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        status: GadgetStatus,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        let changes = GadgetActiveModel {
            status: Set(status.into()),
            ..Default::default()
        };

        self.update_active(owner, gadget_id, changes, |q| q).await
    }

    async fn decommission(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        let changes = GadgetActiveModel {
            status: Set(GadgetStatusColumn::Decommissioned),
            decommissioned_at: Set(Some(at.into())),
            confirmation_code: Set(None),
            ..Default::default()
        };

        self.update_active(owner, gadget_id, changes, |q| q).await
    }

    async fn set_confirmation_code(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        code: String,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        let changes = GadgetActiveModel {
            confirmation_code: Set(Some(code)),
            ..Default::default()
        };

        self.update_active(owner, gadget_id, changes, |q| q).await
    }

    async fn destroy(
        &self,
        owner: UserId,
        gadget_id: Uuid,
        expected_code: &str,
    ) -> Result<GadgetResult, GadgetRepositoryError> {
        let changes = GadgetActiveModel {
            status: Set(GadgetStatusColumn::Destroyed),
            confirmation_code: Set(None),
            ..Default::default()
        };
        let expected_code = expected_code.to_string();

        self.update_active(owner, gadget_id, changes, move |q| {
            q.filter(Column::ConfirmationCode.eq(expected_code))
        })
        .await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn active_columns() -> Vec<GadgetStatusColumn> {
    GadgetStatus::ACTIVE
        .iter()
        .copied()
        .map(GadgetStatusColumn::from)
        .collect()
}

/// Bulk updates skip `before_save`, so the trigger stand-in lives here too.
#[cfg(feature = "no_db_triggers")]
fn touch(mut changes: GadgetActiveModel) -> GadgetActiveModel {
    changes.updated_at = Set(Utc::now().into());
    changes
}

#[cfg(not(feature = "no_db_triggers"))]
fn touch(changes: GadgetActiveModel) -> GadgetActiveModel {
    changes
}

fn map_db_err(e: DbErr) -> GadgetRepositoryError {
    GadgetRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
