//! Shared services used across clients.

mod inventory;

pub use inventory::InventoryService;
