//! This module acts as a central hub for all PostgreSQL logic.
//! Each submodule owns one table; `init` owns the pool and the schema.

pub mod cards;
pub mod init;
pub mod models;
pub mod settings;
