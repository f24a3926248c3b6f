use sea_orm_migration::prelude::*;

/// Shared by every table that carries an `updated_at` column.
pub const SET_UPDATED_AT_FN: &str = "set_updated_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

async fn run(manager: &SchemaManager<'_>, sql: &str) -> Result<(), DbErr> {
    manager.get_connection().execute_unprepared(sql).await?;
    Ok(())
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(30)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).text().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Mirrors RegisterUserCommand validation
        run(
            manager,
            r#"ALTER TABLE users ADD CONSTRAINT chk_users_username_format
               CHECK (username ~ '^[A-Za-z0-9_-]{3,30}$');"#,
        )
        .await?;

        let create_fn = format!(
            r#"CREATE OR REPLACE FUNCTION {SET_UPDATED_AT_FN}()
               RETURNS TRIGGER AS $$
               BEGIN
                   NEW.updated_at = CURRENT_TIMESTAMP;
                   RETURN NEW;
               END;
               $$ LANGUAGE plpgsql;"#
        );
        run(manager, &create_fn).await?;

        let trigger = format!(
            "CREATE TRIGGER users_set_updated_at BEFORE UPDATE ON users \
             FOR EACH ROW EXECUTE FUNCTION {SET_UPDATED_AT_FN}();"
        );
        run(manager, &trigger).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let drop_trigger = "DROP TRIGGER IF EXISTS users_set_updated_at ON users;";
        run(manager, drop_trigger).await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        // Gadgets are dropped first, so nothing else uses the function by now
        let drop_fn = format!("DROP FUNCTION IF EXISTS {SET_UPDATED_AT_FN}();");
        run(manager, &drop_fn).await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}
