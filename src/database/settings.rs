use super::models::Settings;
use crate::constants::SETTINGS_ROW_ID;
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

const SETTINGS_SELECT: &str = "SELECT countdown_time, sponsor_images, prize_image, drawn_numbers, is_drawing, has_winner FROM settings WHERE id = $1";

/// Creates the singleton row on first access.
async fn ensure_settings<'e>(db: impl PgExecutor<'e>) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO settings (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
        .bind(SETTINGS_ROW_ID)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn get_settings(pool: &PgPool) -> Result<Settings, sqlx::Error> {
    ensure_settings(pool).await?;
    sqlx::query_as::<_, Settings>(SETTINGS_SELECT)
        .bind(SETTINGS_ROW_ID)
        .fetch_one(pool)
        .await
}

/// Fetches the singleton and holds its row lock until the transaction ends.
/// Every writer goes through here, which serialises draws.
pub async fn get_settings_for_update(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<Settings, sqlx::Error> {
    ensure_settings(&mut **tx).await?;
    sqlx::query_as::<_, Settings>(&format!("{SETTINGS_SELECT} FOR UPDATE"))
        .bind(SETTINGS_ROW_ID)
        .fetch_one(&mut **tx)
        .await
}

pub async fn save_settings(
    tx: &mut Transaction<'_, Postgres>,
    settings: &Settings,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE settings SET countdown_time = $2, sponsor_images = $3, prize_image = $4, drawn_numbers = $5, is_drawing = $6, has_winner = $7 WHERE id = $1",
    )
    .bind(SETTINGS_ROW_ID)
    .bind(settings.countdown_time)
    .bind(settings.sponsor_images.as_slice())
    .bind(settings.prize_image.as_deref())
    .bind(settings.drawn_numbers.as_slice())
    .bind(settings.is_drawing)
    .bind(settings.has_winner)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
