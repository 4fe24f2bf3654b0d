// Library entry so integration tests and the binary share the same modules.
pub mod api;
pub mod bingo;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

// Convenient re-exports for frequently used types.
pub use error::{BingoError, BingoResult};
pub use model::AppState;
