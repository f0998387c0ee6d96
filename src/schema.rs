//! todos table DDL and database provisioning.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Create the `todos` table if it does not exist. Safe to run on every
/// startup; this is the only schema management the service performs.
pub async fn init_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Create the database named in `database_url` when it is missing, using a
/// short-lived connection to the server's `postgres` database. Runs before
/// the main pool connects.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into the admin URL (same server, `postgres`
/// database) and the name of the database it targets.
fn split_database_url(url: &str) -> Result<(String, String), AppError> {
    let slash = url
        .rfind('/')
        .ok_or(AppError::Validation("invalid DATABASE_URL: no database path"))?;
    let name = url[slash + 1..].split('?').next().unwrap_or("").trim();
    let admin_url = format!("{}postgres", &url[..=slash]);
    Ok((admin_url, name.to_string()))
}

fn quote_ident(name: &str) -> String {
    // Embedded double quotes double inside a quoted identifier.
    format!("\"{}\"", name.replace('"', "\"\""))
}
