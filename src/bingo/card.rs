//! Card validation and the win condition.

use crate::constants::{MAX_CARD_ID_LEN, MAX_CARD_NAME_LEN, is_board_number};
use crate::database::models::NewCard;
use crate::error::{BingoError, BingoResult};

/// Checks an add-card request before it reaches a store.
pub fn validate_new_card(card: &NewCard) -> BingoResult<()> {
    if card.card_id.trim().is_empty() {
        return Err(BingoError::validation("card_id must not be empty"));
    }
    if card.card_id.chars().count() > MAX_CARD_ID_LEN {
        return Err(BingoError::validation(format!(
            "card_id must be at most {MAX_CARD_ID_LEN} characters"
        )));
    }
    if card.name.chars().count() > MAX_CARD_NAME_LEN {
        return Err(BingoError::validation(format!(
            "name must be at most {MAX_CARD_NAME_LEN} characters"
        )));
    }
    validate_numbers(&card.numbers)
}

fn validate_numbers(numbers: &[i32]) -> BingoResult<()> {
    if numbers.is_empty() {
        return Err(BingoError::validation("a card needs at least one number"));
    }
    if let Some(bad) = numbers.iter().find(|n| !is_board_number(**n)) {
        return Err(BingoError::validation(format!(
            "card number {bad} is outside 1..=75"
        )));
    }
    Ok(())
}

/// A card wins once every one of its numbers has been drawn.
pub fn is_complete(card_numbers: &[i32], drawn: &[i32]) -> bool {
    card_numbers.iter().all(|n| drawn.contains(n))
}
