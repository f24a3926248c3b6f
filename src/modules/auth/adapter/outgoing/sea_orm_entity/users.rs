use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::gadget::adapter::outgoing::sea_orm_entity::gadgets::Entity")]
    Gadgets,
}

impl Related<crate::gadget::adapter::outgoing::sea_orm_entity::gadgets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gadgets.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(username) = &self.username {
            self.username = ActiveValue::Set(username.trim().to_string());
        }

        // Stands in for the users_set_updated_at trigger
        #[cfg(feature = "no_db_triggers")]
        {
            if !_insert {
                self.updated_at = ActiveValue::Set(chrono::Utc::now().into());
            }
        }

        Ok(self)
    }
}
