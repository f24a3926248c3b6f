//! # Gadgets Table Migration
//!
//! Every gadget belongs to exactly one user and is removed with its owner.
//!
//! ## Key Columns
//! - `name`: generated `the-<adjective>-<noun>` label. Globally unique; the
//!   application retries creation when this index rejects an insert.
//! - `status`: `gadget_status` enum. Only `AVAILABLE` and `DEPLOYED` are
//!   reachable through a plain status update; the two terminal values are
//!   written by decommissioning and by a confirmed self-destruct.
//! - `confirmation_code`: non-null only while a self-destruct is pending.
//! - `decommissioned_at`: set together with `status = 'DECOMMISSIONED'`.

use sea_orm_migration::prelude::*;

use crate::m20250304_105428_create_users_table::SET_UPDATED_AT_FN;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create enum type for gadgets.status
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$
                BEGIN
                    IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'gadget_status') THEN
                        CREATE TYPE gadget_status AS ENUM (
                            'AVAILABLE', 'DEPLOYED', 'DESTROYED', 'DECOMMISSIONED'
                        );
                    END IF;
                END$$;
                "#,
            )
            .await?;

        // =====================================================
        // Create gadgets table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Gadgets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gadgets::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Gadgets::UserId).uuid().not_null())
                    .col(ColumnDef::new(Gadgets::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Gadgets::Status)
                            .custom(Alias::new("gadget_status"))
                            .not_null()
                            .default(Expr::cust("'AVAILABLE'::gadget_status")),
                    )
                    .col(ColumnDef::new(Gadgets::ConfirmationCode).string_len(6))
                    .col(ColumnDef::new(Gadgets::DecommissionedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Gadgets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Gadgets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gadgets_user_id")
                            .from(Gadgets::Table, Gadgets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_gadgets_name_unique
                ON gadgets (name);
                "#,
            )
            .await?;

        // Owner-scoped listing by status
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_gadgets_user_status
                ON gadgets (user_id, status);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE gadgets
                ADD CONSTRAINT chk_gadgets_decommissioned_at
                CHECK ((status = 'DECOMMISSIONED') = (decommissioned_at IS NOT NULL));
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE TRIGGER gadgets_set_updated_at BEFORE UPDATE ON gadgets \
                 FOR EACH ROW EXECUTE FUNCTION {SET_UPDATED_AT_FN}();"
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS gadgets_set_updated_at ON gadgets;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_gadgets_name_unique;
                DROP INDEX IF EXISTS idx_gadgets_user_status;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Gadgets::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TYPE IF EXISTS gadget_status;")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Gadgets {
    Table,
    Id,
    UserId,
    Name,
    Status,
    ConfirmationCode,
    DecommissionedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
