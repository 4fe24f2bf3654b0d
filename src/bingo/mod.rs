//! Game rules, independent of where the hall state is stored.

pub mod card;
pub mod draw;
pub mod settings;

pub use draw::{DrawStep, draw_next, start_session};
