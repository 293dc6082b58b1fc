//! Data models for Perfumario

mod brand;
mod perfume;
mod settings;

pub use brand::{Brand, NewBrand};
pub use perfume::{Gender, GenderStyle, NewPerfume, Perfume, PerfumeUpdate, StockStatus};
pub use settings::{ColorScheme, Settings};
