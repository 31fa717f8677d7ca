//! Queries over the `client_parking` session log.

use sqlx::SqliteExecutor;

use crate::db::ClientParking;

pub async fn find<'e, E>(executor: E, id: i64) -> Result<Option<ClientParking>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ClientParking>("SELECT * FROM client_parking WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// The single log row for a pair, open or closed
pub async fn find_by_pair<'e, E>(
    executor: E,
    client_id: i64,
    parking_id: i64,
) -> Result<Option<ClientParking>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ClientParking>(
        "SELECT * FROM client_parking WHERE client_id = ? AND parking_id = ?",
    )
    .bind(client_id)
    .bind(parking_id)
    .fetch_optional(executor)
    .await
}

pub async fn find_active<'e, E>(
    executor: E,
    client_id: i64,
    parking_id: i64,
) -> Result<Option<ClientParking>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ClientParking>(
        "SELECT * FROM client_parking WHERE client_id = ? AND parking_id = ? AND time_out IS NULL",
    )
    .bind(client_id)
    .bind(parking_id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e, E>(executor: E) -> Result<Vec<ClientParking>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ClientParking>("SELECT * FROM client_parking ORDER BY time_in DESC, id DESC")
        .fetch_all(executor)
        .await
}

/// Open a new session and return its id
pub async fn insert<'e, E>(
    executor: E,
    client_id: i64,
    parking_id: i64,
    time_in: &str,
) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO client_parking (client_id, parking_id, time_in, time_out)
        VALUES (?, ?, ?, NULL)
        "#,
    )
    .bind(client_id)
    .bind(parking_id)
    .bind(time_in)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Start a fresh session on a previously closed row
pub async fn reopen<'e, E>(executor: E, id: i64, time_in: &str) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE client_parking SET time_in = ?, time_out = NULL WHERE id = ?")
        .bind(time_in)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn close<'e, E>(executor: E, id: i64, time_out: &str) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE client_parking SET time_out = ? WHERE id = ? AND time_out IS NULL")
        .bind(time_out)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}
