//! Brand directory used to resolve brand ids to display names.

use std::collections::HashMap;

use crate::models::Brand;

pub const NO_BRAND_LABEL: &str = "No brand";
pub const LOADING_BRAND_LABEL: &str = "Loading brand...";
pub const UNKNOWN_BRAND_LABEL: &str = "Unknown brand";

/// Loaded brands plus an id to name index
#[derive(Debug, Clone, Default)]
pub struct BrandDirectory {
    brands: Vec<Brand>,
    names: HashMap<String, String>,
    loading: bool,
    error: Option<String>,
}

impl BrandDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the brand list and rebuild the index.
    pub fn set_brands(&mut self, brands: Vec<Brand>) {
        self.names = brands
            .iter()
            .map(|brand| (brand.id.clone(), brand.name.clone()))
            .collect();
        self.brands = brands;
        self.loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Display name for a brand id.
    #[must_use]
    pub fn brand_name(&self, brand_id: &str) -> &str {
        if brand_id.is_empty() {
            return NO_BRAND_LABEL;
        }
        if self.brands.is_empty() {
            return LOADING_BRAND_LABEL;
        }
        self.names
            .get(brand_id)
            .map_or(UNKNOWN_BRAND_LABEL, String::as_str)
    }

    /// Name of a known brand, `None` otherwise.
    #[must_use]
    pub fn lookup(&self, brand_id: &str) -> Option<&str> {
        self.names.get(brand_id).map(String::as_str)
    }

    /// Brand whose id or case-insensitive name matches `query`.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&Brand> {
        let query = query.trim();
        self.brands
            .iter()
            .find(|brand| brand.id == query)
            .or_else(|| {
                self.brands
                    .iter()
                    .find(|brand| brand.name.eq_ignore_ascii_case(query))
            })
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Index of id to name, as used by report rendering.
    pub const fn names(&self) -> &HashMap<String, String> {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn brand(id: &str, name: &str) -> Brand {
        Brand {
            id: id.to_string(),
            name: name.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn brand_name_fallbacks() {
        let mut directory = BrandDirectory::new();
        assert_eq!(directory.brand_name(""), NO_BRAND_LABEL);
        assert_eq!(directory.brand_name("b1"), LOADING_BRAND_LABEL);

        directory.set_brands(vec![brand("b1", "Dior")]);
        assert_eq!(directory.brand_name("b1"), "Dior");
        assert_eq!(directory.brand_name("b2"), UNKNOWN_BRAND_LABEL);
        assert_eq!(directory.brand_name(""), NO_BRAND_LABEL);
    }

    #[test]
    fn loading_and_error_flags() {
        let mut directory = BrandDirectory::new();
        directory.set_loading();
        assert!(directory.is_loading());

        directory.set_error("offline");
        assert!(!directory.is_loading());
        assert_eq!(directory.error(), Some("offline"));

        directory.set_brands(vec![brand("b1", "Creed")]);
        assert_eq!(directory.error(), None);

        directory.clear();
        assert!(directory.brands().is_empty());
    }

    #[test]
    fn find_matches_id_then_name() {
        let mut directory = BrandDirectory::new();
        directory.set_brands(vec![brand("b1", "Dior"), brand("b2", "Chanel")]);

        assert_eq!(directory.find("b2").map(|b| b.name.as_str()), Some("Chanel"));
        assert_eq!(directory.find(" dior ").map(|b| b.id.as_str()), Some("b1"));
        assert!(directory.find("Guerlain").is_none());
        assert_eq!(directory.lookup("b1"), Some("Dior"));
    }
}
