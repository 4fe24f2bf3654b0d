//! Contains all the data structures that map to database tables, query results,
//! and the request/response shapes built from them.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::chrono::{DateTime, Utc};

/// A registered bingo card. `id` is assigned by the store and increases in
/// insertion order, which is also the listing order.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: i64,
    pub card_id: String,
    pub name: String,
    pub numbers: Vec<i32>,
    pub is_winner: bool,
}

/// Body of an add-card request.
#[derive(Deserialize, Debug, Clone)]
pub struct NewCard {
    pub card_id: String,
    pub name: String,
    pub numbers: Vec<i32>,
}

/// The session-wide singleton.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub countdown_time: Option<DateTime<Utc>>,
    pub sponsor_images: Vec<String>,
    pub prize_image: Option<String>,
    pub drawn_numbers: Vec<i32>,
    pub is_drawing: bool,
    pub has_winner: bool,
}

/// Partial settings update. Absent fields are left alone; for the nullable
/// fields an explicit `null` is `Some(None)` and clears the value.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SettingsPatch {
    #[serde(default, deserialize_with = "present")]
    pub countdown_time: Option<Option<String>>,
    pub sponsor_images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    pub prize_image: Option<Option<String>>,
    pub drawn_numbers: Option<Vec<i32>>,
    pub is_drawing: Option<bool>,
    pub has_winner: Option<bool>,
}

// Only called when the key is present, so wrapping in `Some` separates `null` from absent.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub card_id: String,
    pub name: String,
    pub numbers: Vec<i32>,
}

/// Result of a successful draw.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    pub number: i32,
    pub has_winner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
}

impl From<&Card> for Winner {
    fn from(card: &Card) -> Self {
        Self {
            card_id: card.card_id.clone(),
            name: card.name.clone(),
            numbers: card.numbers.clone(),
        }
    }
}
