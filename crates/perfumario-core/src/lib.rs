//! perfumario-core - Core library for Perfumario
//!
//! This crate contains the models, catalog API client, query cache, local
//! store, swipe gesture state machine and inventory logic used by every
//! Perfumario client.

pub mod api;
pub mod brands;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod search;
pub mod services;
pub mod swipe;
pub mod theme;
pub mod toast;
pub mod util;

pub use error::{Error, Result};
pub use models::{Brand, Gender, Perfume};
