//! Perfume model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Target audience of a perfume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Unisex];

    /// Wire value used in API paths
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unisex => "unisex",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unisex => "Unisex",
        }
    }

    /// Badge colors and icon used when rendering a perfume row
    #[must_use]
    pub const fn style(self) -> GenderStyle {
        match self {
            Self::Male => GenderStyle {
                background_color: "#EFF6FF",
                icon_color: "#3B82F6",
                icon_name: "male",
            },
            Self::Female => GenderStyle {
                background_color: "#FDF2F8",
                icon_color: "#EC4899",
                icon_name: "female",
            },
            Self::Unisex => GenderStyle {
                background_color: "#F9FAFB",
                icon_color: "#6B7280",
                icon_name: "male-female",
            },
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "unisex" => Ok(Self::Unisex),
            other => Err(Error::InvalidInput(format!(
                "unknown gender '{other}' (expected male, female or unisex)"
            ))),
        }
    }
}

/// Visual properties for a gender badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderStyle {
    pub background_color: &'static str,
    pub icon_color: &'static str,
    pub icon_name: &'static str,
}

/// Availability derived from the stock count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Available,
    OutOfStock,
}

impl StockStatus {
    #[must_use]
    pub const fn from_stock(stock: u32) -> Self {
        if stock == 0 {
            Self::OutOfStock
        } else {
            Self::Available
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::OutOfStock => "Out of stock",
        }
    }

    /// CSS class used by the printable report
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Available => "status-available",
            Self::OutOfStock => "status-out",
        }
    }
}

/// A perfume as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perfume {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    #[serde(alias = "brand_id")]
    pub brand_id: String,
    pub stock: u32,
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Perfume {
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        StockStatus::from_stock(self.stock)
    }
}

/// Payload for creating a perfume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerfume {
    pub name: String,
    pub gender: Gender,
    pub brand_id: String,
    pub stock: u32,
}

impl NewPerfume {
    /// Build a payload with trimmed, validated fields.
    pub fn new(
        name: impl AsRef<str>,
        gender: Gender,
        brand_id: impl AsRef<str>,
        stock: u32,
    ) -> Result<Self> {
        Ok(Self {
            name: required_field(name.as_ref(), "name")?,
            gender,
            brand_id: required_field(brand_id.as_ref(), "brand id")?,
            stock,
        })
    }
}

/// Partial update for a perfume; only present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfumeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl PerfumeUpdate {
    #[must_use]
    pub const fn stock(stock: u32) -> Self {
        Self {
            name: None,
            gender: None,
            brand_id: None,
            stock: Some(stock),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gender.is_none()
            && self.brand_id.is_none()
            && self.stock.is_none()
    }

    /// Trim text fields and reject empty values or an update with no fields.
    pub fn validated(self) -> Result<Self> {
        if self.is_empty() {
            return Err(Error::InvalidInput(
                "update must change at least one field".to_string(),
            ));
        }
        Ok(Self {
            name: self
                .name
                .map(|name| required_field(&name, "name"))
                .transpose()?,
            gender: self.gender,
            brand_id: self
                .brand_id
                .map(|brand_id| required_field(&brand_id, "brand id"))
                .transpose()?,
            stock: self.stock,
        })
    }
}

pub(crate) fn required_field(value: &str, field: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_camel_case_and_snake_case_brand() {
        let camel: Perfume = serde_json::from_str(
            r#"{"id":"p1","name":"Sauvage","gender":"male","brandId":"b1","stock":3,"createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let snake: Perfume = serde_json::from_str(
            r#"{"id":"p1","name":"Sauvage","gender":"male","brand_id":"b1","stock":3}"#,
        )
        .unwrap();

        assert_eq!(camel.brand_id, "b1");
        assert_eq!(snake.brand_id, "b1");
        assert_eq!(camel.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(snake.created_at, None);
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" unisex ".parse::<Gender>().unwrap(), Gender::Unisex);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn gender_style_matches_badge_palette() {
        assert_eq!(Gender::Male.style().icon_color, "#3B82F6");
        assert_eq!(Gender::Female.style().icon_name, "female");
        assert_eq!(Gender::Unisex.style().icon_name, "male-female");
    }

    #[test]
    fn stock_status_follows_stock() {
        assert_eq!(StockStatus::from_stock(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_stock(7), StockStatus::Available);
    }

    #[test]
    fn new_perfume_trims_and_validates() {
        let perfume = NewPerfume::new("  Aventus ", Gender::Male, " b2 ", 4).unwrap();
        assert_eq!(perfume.name, "Aventus");
        assert_eq!(perfume.brand_id, "b2");

        assert!(NewPerfume::new("   ", Gender::Male, "b2", 4).is_err());
        assert!(NewPerfume::new("Aventus", Gender::Male, "", 4).is_err());
    }

    #[test]
    fn new_perfume_serializes_brand_id_in_camel_case() {
        let payload = NewPerfume::new("Aventus", Gender::Male, "b2", 4).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["brandId"], "b2");
        assert_eq!(json["gender"], "male");
    }

    #[test]
    fn update_only_serializes_present_fields() {
        let json = serde_json::to_string(&PerfumeUpdate::stock(9)).unwrap();
        assert_eq!(json, r#"{"stock":9}"#);
    }

    #[test]
    fn update_validation_rejects_empty_changes() {
        assert!(PerfumeUpdate::default().validated().is_err());

        let update = PerfumeUpdate {
            name: Some("   ".to_string()),
            ..PerfumeUpdate::default()
        };
        assert!(update.validated().is_err());

        let update = PerfumeUpdate {
            name: Some(" Eros ".to_string()),
            ..PerfumeUpdate::default()
        }
        .validated()
        .unwrap();
        assert_eq!(update.name.as_deref(), Some("Eros"));
    }
}
