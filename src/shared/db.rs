use sea_orm::DbErr;

/// True when Postgres rejected a write on a unique index (SQLSTATE 23505).
pub fn is_unique_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}
