//! Brand model

use serde::{Deserialize, Serialize};

use super::perfume::required_field;
use crate::error::Result;

/// A perfume brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for creating a brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBrand {
    pub name: String,
}

impl NewBrand {
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            name: required_field(name.as_ref(), "brand name")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_snake_case_timestamps() {
        let brand: Brand = serde_json::from_str(
            r#"{"id":"b1","name":"Dior","created_at":"2024-02-01","updated_at":"2024-02-02"}"#,
        )
        .unwrap();
        assert_eq!(brand.name, "Dior");
        assert_eq!(brand.updated_at.as_deref(), Some("2024-02-02"));
    }

    #[test]
    fn new_brand_requires_name() {
        assert_eq!(NewBrand::new(" Creed ").unwrap().name, "Creed");
        assert!(NewBrand::new("").is_err());
    }
}
