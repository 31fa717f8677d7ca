use sqlx::SqliteExecutor;

use crate::db::{NewParking, Parking};

pub async fn find<'e, E>(executor: E, id: i64) -> Result<Option<Parking>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Parking>("SELECT * FROM parking WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn list<'e, E>(executor: E) -> Result<Vec<Parking>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Parking>("SELECT * FROM parking ORDER BY id")
        .fetch_all(executor)
        .await
}

/// Insert a parking zone with every place available and return its new id
pub async fn insert<'e, E>(executor: E, parking: &NewParking) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO parking (address, opened, count_places, count_available_places)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&parking.address)
    .bind(parking.opened)
    .bind(parking.count_places)
    .bind(parking.count_places)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Decrement the free-place counter. Returns `false` when nothing was
/// updated: the parking is missing or already full.
pub async fn take_place<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        UPDATE parking SET count_available_places = count_available_places - 1
        WHERE id = ? AND count_available_places > 0
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Increment the free-place counter. Returns `false` when nothing was
/// updated: the parking is missing or already has every place free.
pub async fn release_place<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        UPDATE parking SET count_available_places = count_available_places + 1
        WHERE id = ? AND count_available_places < count_places
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() == 1)
}
