//! PostgreSQL-backed store. Every mutation runs in one transaction; writers
//! that touch the session lock the settings row first, which serialises them.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use super::BingoStore;
use crate::bingo::{self, card::validate_new_card, settings::apply_patch};
use crate::database::{cards, settings};
use crate::database::models::{Card, DrawOutcome, NewCard, Settings, SettingsPatch};
use crate::error::{BingoError, BingoResult};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BingoStore for PgStore {
    async fn list_cards(&self) -> BingoResult<Vec<Card>> {
        Ok(cards::list_cards(&self.pool).await?)
    }

    #[instrument(level = "debug", skip(self, card), fields(card_id = %card.card_id))]
    async fn add_card(&self, card: NewCard) -> BingoResult<Card> {
        validate_new_card(&card)?;
        cards::insert_card(&self.pool, &card)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    BingoError::DuplicateKey(card.card_id.clone())
                }
                other => BingoError::Database(other),
            })
    }

    async fn delete_card(&self, id: i64) -> BingoResult<()> {
        if cards::delete_card(&self.pool, id).await? {
            Ok(())
        } else {
            Err(BingoError::NotFound(format!("card {id}")))
        }
    }

    async fn reset_winners(&self) -> BingoResult<()> {
        cards::reset_winners(&self.pool).await?;
        Ok(())
    }

    async fn get_settings(&self) -> BingoResult<Settings> {
        Ok(settings::get_settings(&self.pool).await?)
    }

    async fn update_settings(&self, patch: SettingsPatch) -> BingoResult<Settings> {
        let mut tx = self.pool.begin().await?;
        let mut current = settings::get_settings_for_update(&mut tx).await?;
        apply_patch(&mut current, patch)?;
        settings::save_settings(&mut tx, &current).await?;
        tx.commit().await?;
        Ok(current)
    }

    #[instrument(level = "debug", skip(self))]
    async fn start_drawing(&self) -> BingoResult<Settings> {
        let mut tx = self.pool.begin().await?;
        let mut current = settings::get_settings_for_update(&mut tx).await?;
        // Card flags are reset in SQL below rather than loaded and written back.
        bingo::start_session(&mut current, &mut []);
        settings::save_settings(&mut tx, &current).await?;
        let cleared = cards::reset_winners(&mut *tx).await?;
        tx.commit().await?;
        info!(target: "draw", cleared_winners = cleared, "drawing session started");
        Ok(current)
    }

    #[instrument(level = "debug", skip(self))]
    async fn draw_number(&self) -> BingoResult<DrawOutcome> {
        let mut tx = self.pool.begin().await?;
        let mut current = settings::get_settings_for_update(&mut tx).await?;
        if !current.is_drawing {
            // Dropping the transaction rolls back the lazy singleton insert too.
            return Err(BingoError::NotDrawing);
        }
        let mut all_cards = cards::list_cards_for_update(&mut tx).await?;
        let step = {
            let mut rng = rand::rng();
            bingo::draw_next(&mut current, &mut all_cards, &mut rng)?
        };
        settings::save_settings(&mut tx, &current).await?;
        if let bingo::DrawStep::Drawn {
            winner: Some(i), ..
        } = step
        {
            cards::mark_winner(&mut tx, all_cards[i].id).await?;
        }
        tx.commit().await?;

        let outcome = step.into_outcome(&all_cards);
        super::log_outcome(&outcome, current.drawn_numbers.len());
        outcome
    }
}
