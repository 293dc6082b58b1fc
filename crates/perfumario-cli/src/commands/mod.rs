pub mod add;
pub mod brands;
pub mod cache;
pub mod common;
pub mod completions;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod filter;
pub mod list;
pub mod search;
pub mod stock;
pub mod theme;
