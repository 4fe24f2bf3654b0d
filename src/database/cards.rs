//! Contains all database functions for the `cards` table.
//! Listing order is always `ORDER BY id`, i.e. insertion order.

use super::models::{Card, NewCard};
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

const CARD_COLUMNS: &str = "id, card_id, name, numbers, is_winner";

/// Retrieves every card in insertion order.
pub async fn list_cards<'e>(db: impl PgExecutor<'e>) -> Result<Vec<Card>, sqlx::Error> {
    sqlx::query_as::<_, Card>(&format!("SELECT {CARD_COLUMNS} FROM cards ORDER BY id"))
        .fetch_all(db)
        .await
}

/// Same as [`list_cards`] but locks the rows for the rest of the transaction.
pub async fn list_cards_for_update(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<Vec<Card>, sqlx::Error> {
    sqlx::query_as::<_, Card>(&format!(
        "SELECT {CARD_COLUMNS} FROM cards ORDER BY id FOR UPDATE"
    ))
    .fetch_all(&mut **tx)
    .await
}

/// Inserts a card with `is_winner = FALSE`. A taken `card_id` surfaces as a
/// unique-violation database error.
pub async fn insert_card(pool: &PgPool, card: &NewCard) -> Result<Card, sqlx::Error> {
    sqlx::query_as::<_, Card>(&format!(
        "INSERT INTO cards (card_id, name, numbers) VALUES ($1, $2, $3) RETURNING {CARD_COLUMNS}"
    ))
    .bind(&card.card_id)
    .bind(&card.name)
    .bind(card.numbers.as_slice())
    .fetch_one(pool)
    .await
}

/// Returns whether a row was removed.
pub async fn delete_card(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM cards WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() == 1)
}

/// Clears every winner flag; returns how many cards were touched.
pub async fn reset_winners<'e>(db: impl PgExecutor<'e>) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("UPDATE cards SET is_winner = FALSE WHERE is_winner")
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}

pub async fn mark_winner(tx: &mut Transaction<'_, Postgres>, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE cards SET is_winner = TRUE WHERE id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await
        .and_then(|res| {
            if res.rows_affected() == 1 {
                Ok(())
            } else {
                Err(sqlx::Error::RowNotFound)
            }
        })
}
