use sqlx::SqliteExecutor;

use crate::db::{Client, NewClient};

pub async fn find<'e, E>(executor: E, id: i64) -> Result<Option<Client>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Client>("SELECT * FROM client WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn list<'e, E>(executor: E) -> Result<Vec<Client>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Client>("SELECT * FROM client ORDER BY id")
        .fetch_all(executor)
        .await
}

/// Insert a client and return its new id
pub async fn insert<'e, E>(executor: E, client: &NewClient) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO client (name, surname, credit_card, car_number)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&client.name)
    .bind(&client.surname)
    .bind(&client.credit_card)
    .bind(&client.car_number)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}
