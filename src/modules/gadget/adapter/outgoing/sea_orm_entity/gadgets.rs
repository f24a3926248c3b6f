use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::domain::entities::GadgetStatus;
use crate::gadget::application::ports::outgoing::GadgetResult;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gadgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    #[sea_orm(unique)]
    pub name: String,

    pub status: GadgetStatusColumn,

    pub confirmation_code: Option<String>,

    pub decommissioned_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "gadget_status")]
pub enum GadgetStatusColumn {
    #[sea_orm(string_value = "AVAILABLE")]
    Available,

    #[sea_orm(string_value = "DEPLOYED")]
    Deployed,

    #[sea_orm(string_value = "DESTROYED")]
    Destroyed,

    #[sea_orm(string_value = "DECOMMISSIONED")]
    Decommissioned,
}

impl From<GadgetStatus> for GadgetStatusColumn {
    fn from(status: GadgetStatus) -> Self {
        match status {
            GadgetStatus::Available => Self::Available,
            GadgetStatus::Deployed => Self::Deployed,
            GadgetStatus::Destroyed => Self::Destroyed,
            GadgetStatus::Decommissioned => Self::Decommissioned,
        }
    }
}

impl From<GadgetStatusColumn> for GadgetStatus {
    fn from(column: GadgetStatusColumn) -> Self {
        match column {
            GadgetStatusColumn::Available => Self::Available,
            GadgetStatusColumn::Deployed => Self::Deployed,
            GadgetStatusColumn::Destroyed => Self::Destroyed,
            GadgetStatusColumn::Decommissioned => Self::Decommissioned,
        }
    }
}

impl Model {
    pub fn to_result(&self) -> GadgetResult {
        GadgetResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            name: self.name.clone(),
            status: self.status.into(),
            confirmation_code: self.confirmation_code.clone(),
            decommissioned_at: self.decommissioned_at.map(|at| at.with_timezone(&Utc)),
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // The database trigger owns updated_at unless triggers are disabled
        if insert || !cfg!(feature = "no_db_triggers") {
            return Ok(self);
        }

        let mut model = self;
        model.updated_at = Set(Utc::now().into());
        Ok(model)
    }
}
