//! Administrative settings updates.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::constants::is_board_number;
use crate::database::models::{Settings, SettingsPatch};
use crate::error::{BingoError, BingoResult};

// Naive forms an admin form can post, e.g. an HTML datetime-local value.
const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a countdown target. RFC 3339 keeps its offset; naive timestamps are taken as UTC.
pub fn parse_countdown(raw: &str) -> BingoResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| BingoError::validation(format!("malformed countdown_time '{raw}'")))
}

/// Merges the supplied fields into `settings`. Nothing is written unless every
/// supplied field is valid.
///
/// This is an override: `is_drawing` and `has_winner` are taken as given.
/// Drawn numbers must still be board numbers without repeats.
pub fn apply_patch(settings: &mut Settings, patch: SettingsPatch) -> BingoResult<()> {
    let countdown = match patch.countdown_time {
        Some(Some(raw)) if !raw.trim().is_empty() => Some(Some(parse_countdown(&raw)?)),
        // An empty string clears the countdown, as `null` does.
        Some(_) => Some(None),
        None => None,
    };
    if let Some(drawn) = &patch.drawn_numbers {
        validate_drawn(drawn)?;
    }

    if let Some(countdown) = countdown {
        settings.countdown_time = countdown;
    }
    if let Some(images) = patch.sponsor_images {
        settings.sponsor_images = images;
    }
    if let Some(prize) = patch.prize_image {
        settings.prize_image = prize;
    }
    if let Some(drawn) = patch.drawn_numbers {
        settings.drawn_numbers = drawn;
    }
    if let Some(is_drawing) = patch.is_drawing {
        settings.is_drawing = is_drawing;
    }
    if let Some(has_winner) = patch.has_winner {
        settings.has_winner = has_winner;
    }
    Ok(())
}

fn validate_drawn(drawn: &[i32]) -> BingoResult<()> {
    for (i, n) in drawn.iter().enumerate() {
        if !is_board_number(*n) {
            return Err(BingoError::validation(format!(
                "drawn number {n} is outside 1..=75"
            )));
        }
        if drawn[..i].contains(n) {
            return Err(BingoError::validation(format!(
                "drawn number {n} appears more than once"
            )));
        }
    }
    Ok(())
}
