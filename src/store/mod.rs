//! Storage seam for the hall: cards plus the settings singleton.
//!
//! Every method is one atomic operation. Implementations must make
//! `draw_number` and `start_drawing` exclusive against each other and against
//! settings updates, and must list cards in insertion order.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::database::models::{Card, DrawOutcome, NewCard, Settings, SettingsPatch};
use crate::error::{BingoError, BingoResult};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait BingoStore: Send + Sync {
    /// All cards in insertion order.
    async fn list_cards(&self) -> BingoResult<Vec<Card>>;

    /// Validates and stores a new card with `is_winner = false`.
    async fn add_card(&self, card: NewCard) -> BingoResult<Card>;

    /// Removes a card by its store-assigned id.
    async fn delete_card(&self, id: i64) -> BingoResult<()>;

    async fn reset_winners(&self) -> BingoResult<()>;

    /// The settings singleton, created with defaults on first access.
    async fn get_settings(&self) -> BingoResult<Settings>;

    /// Merges a partial update and returns the stored result.
    async fn update_settings(&self, patch: SettingsPatch) -> BingoResult<Settings>;

    /// Opens (or restarts) a drawing session and clears all winner flags.
    async fn start_drawing(&self) -> BingoResult<Settings>;

    /// Draws the next number and evaluates winners.
    /// On `PoolExhausted` the session has already been switched off.
    async fn draw_number(&self) -> BingoResult<DrawOutcome>;
}

fn log_outcome(outcome: &BingoResult<DrawOutcome>, drawn: usize) {
    match outcome {
        Ok(DrawOutcome {
            number,
            winner: Some(winner),
            ..
        }) => {
            info!(target: "draw", number = *number, drawn, winner = %winner.card_id, "winner found; session closed");
        }
        Ok(DrawOutcome { number, .. }) => debug!(target: "draw", number = *number, drawn, "number drawn"),
        Err(BingoError::PoolExhausted) => warn!(target: "draw", "pool exhausted; session closed"),
        Err(_) => {}
    }
}
