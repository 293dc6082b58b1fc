//! Local storage layer for Perfumario

mod connection;
mod kv_repository;
mod migrations;
mod settings_repository;

pub use connection::Database;
pub use kv_repository::{KvRepository, LibSqlKvRepository};
pub use settings_repository::{LibSqlSettingsRepository, SettingsRepository};
