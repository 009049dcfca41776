use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

/// Partial unique index names. Write errors are matched against these.
pub const USERNAME_ACTIVE_INDEX: &str = "idx_users_username_active";
pub const EMAIL_ACTIVE_INDEX: &str = "idx_users_email_active";

const SCHEMA_STATEMENTS: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username VARCHAR(80) NOT NULL,
        email VARCHAR(120) NOT NULL,
        status BOOLEAN NOT NULL DEFAULT TRUE
    );
    "#,
    // Soft-deleted rows free up their username and email
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_users_username_active
    ON users (username)
    WHERE status = true;
    "#,
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email_active
    ON users (email)
    WHERE status = true;
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_users_status
    ON users (status);
    "#,
];

/// Creates the users table and its indexes when missing. Safe to run on every boot.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    for statement in SCHEMA_STATEMENTS {
        db.execute_unprepared(statement).await?;
    }

    tracing::info!("User schema is in place");
    Ok(())
}
