//! The drawing-session state machine.
//!
//! These functions work on an in-memory snapshot of the hall. Stores load the
//! snapshot, call in here while holding their lock (or row lock), and then
//! write back whatever changed. Keeping the transition pure means both
//! backends share one implementation of the draw rules.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::card::is_complete;
use crate::constants::{MAX_NUMBER, MIN_NUMBER};
use crate::database::models::{Card, DrawOutcome, Settings, Winner};
use crate::error::{BingoError, BingoResult};

/// What a draw changed, so the store knows what to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStep {
    /// `number` was appended to the drawn sequence. `winner` indexes into the
    /// card slice that was passed in.
    Drawn { number: i32, winner: Option<usize> },
    /// Nothing left to draw; drawing has been switched off.
    Exhausted,
}

impl DrawStep {
    /// Builds the response for a committed step. `Exhausted` becomes `PoolExhausted`.
    pub fn into_outcome(self, cards: &[Card]) -> BingoResult<DrawOutcome> {
        match self {
            DrawStep::Exhausted => Err(BingoError::PoolExhausted),
            DrawStep::Drawn { number, winner } => {
                let winner = winner.and_then(|i| cards.get(i)).map(Winner::from);
                Ok(DrawOutcome {
                    number,
                    has_winner: winner.is_some(),
                    winner,
                })
            }
        }
    }
}

/// Opens a fresh session: clears the drawn numbers and winner flags. Restarts
/// a running session too.
pub fn start_session(settings: &mut Settings, cards: &mut [Card]) {
    settings.drawn_numbers.clear();
    settings.has_winner = false;
    settings.is_drawing = true;
    for card in cards.iter_mut() {
        card.is_winner = false;
    }
}

/// Numbers in the pool that have not been drawn yet, ascending.
pub fn available_numbers(drawn: &[i32]) -> Vec<i32> {
    (MIN_NUMBER..=MAX_NUMBER)
        .filter(|n| !drawn.contains(n))
        .collect()
}

/// Draws one number and evaluates the cards in slice order.
///
/// Fails with `NotDrawing` without touching anything when no session is
/// running. An empty pool is not an error here: it returns `Exhausted` after
/// switching drawing off, so the caller can commit that before reporting
/// `PoolExhausted`. The first complete card in slice order is the winner;
/// later cards completed by the same number are left unmarked.
pub fn draw_next<R: Rng + ?Sized>(
    settings: &mut Settings,
    cards: &mut [Card],
    rng: &mut R,
) -> BingoResult<DrawStep> {
    if !settings.is_drawing {
        return Err(BingoError::NotDrawing);
    }
    let available = available_numbers(&settings.drawn_numbers);
    let Some(&number) = available.choose(rng) else {
        settings.is_drawing = false;
        return Ok(DrawStep::Exhausted);
    };
    settings.drawn_numbers.push(number);

    let winner = cards
        .iter()
        .position(|card| is_complete(&card.numbers, &settings.drawn_numbers));
    if let Some(i) = winner {
        cards[i].is_winner = true;
        settings.has_winner = true;
        settings.is_drawing = false;
    }
    Ok(DrawStep::Drawn { number, winner })
}
