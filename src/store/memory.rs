//! In-process store. One `RwLock` guards cards and settings together, so each
//! mutation is atomic and readers never see a half-applied draw.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use super::BingoStore;
use crate::bingo::{self, card::validate_new_card, settings::apply_patch};
use crate::database::models::{Card, DrawOutcome, NewCard, Settings, SettingsPatch};
use crate::error::{BingoError, BingoResult};

struct HallState {
    cards: Vec<Card>,
    settings: Settings,
    next_id: i64,
    rng: StdRng,
}

pub struct MemoryStore {
    state: RwLock<HallState>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A store whose draws are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: RwLock::new(HallState {
                cards: Vec::new(),
                settings: Settings::default(),
                next_id: 1,
                rng,
            }),
        }
    }
}

#[async_trait]
impl BingoStore for MemoryStore {
    async fn list_cards(&self) -> BingoResult<Vec<Card>> {
        Ok(self.state.read().await.cards.clone())
    }

    #[instrument(level = "debug", skip(self, card), fields(card_id = %card.card_id))]
    async fn add_card(&self, card: NewCard) -> BingoResult<Card> {
        validate_new_card(&card)?;
        let mut state = self.state.write().await;
        if state.cards.iter().any(|c| c.card_id == card.card_id) {
            return Err(BingoError::DuplicateKey(card.card_id));
        }
        let stored = Card {
            id: state.next_id,
            card_id: card.card_id,
            name: card.name,
            numbers: card.numbers,
            is_winner: false,
        };
        state.next_id += 1;
        state.cards.push(stored.clone());
        Ok(stored)
    }

    async fn delete_card(&self, id: i64) -> BingoResult<()> {
        let mut state = self.state.write().await;
        let before = state.cards.len();
        state.cards.retain(|c| c.id != id);
        if state.cards.len() == before {
            return Err(BingoError::NotFound(format!("card {id}")));
        }
        Ok(())
    }

    async fn reset_winners(&self) -> BingoResult<()> {
        let mut state = self.state.write().await;
        for card in state.cards.iter_mut() {
            card.is_winner = false;
        }
        Ok(())
    }

    async fn get_settings(&self) -> BingoResult<Settings> {
        Ok(self.state.read().await.settings.clone())
    }

    async fn update_settings(&self, patch: SettingsPatch) -> BingoResult<Settings> {
        let mut state = self.state.write().await;
        apply_patch(&mut state.settings, patch)?;
        Ok(state.settings.clone())
    }

    #[instrument(level = "debug", skip(self))]
    async fn start_drawing(&self) -> BingoResult<Settings> {
        let mut guard = self.state.write().await;
        let HallState {
            cards, settings, ..
        } = &mut *guard;
        bingo::start_session(settings, cards);
        info!(target: "draw", cards = cards.len(), "drawing session started");
        Ok(settings.clone())
    }

    #[instrument(level = "debug", skip(self))]
    async fn draw_number(&self) -> BingoResult<DrawOutcome> {
        let mut guard = self.state.write().await;
        let HallState {
            cards,
            settings,
            rng,
            ..
        } = &mut *guard;
        let step = bingo::draw_next(settings, cards, rng)?;
        let outcome = step.into_outcome(cards);
        super::log_outcome(&outcome, settings.drawn_numbers.len());
        outcome
    }
}
