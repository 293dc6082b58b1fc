//! Light and dark color palettes.

use serde::Serialize;

use crate::models::ColorScheme;

/// The concrete theme after resolving [`ColorScheme::Auto`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

impl ColorScheme {
    /// Resolve to light or dark, following the system for `Auto`.
    #[must_use]
    pub const fn resolve(self, system_is_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::Auto => {
                if system_is_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub secondary: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,
    pub border: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub card: &'static str,
    pub overlay: &'static str,
}

pub const LIGHT_PALETTE: Palette = Palette {
    background: "#FFFFFF",
    surface: "#F4F4F5",
    primary: "#603780",
    primary_light: "#8B5CF6",
    secondary: "#6366F1",
    text: "#111827",
    text_secondary: "#6B7280",
    text_tertiary: "#9CA3AF",
    border: "#E5E7EB",
    error: "#EF4444",
    success: "#10B981",
    warning: "#F59E0B",
    card: "#FFFFFF",
    overlay: "rgba(0, 0, 0, 0.5)",
};

pub const DARK_PALETTE: Palette = Palette {
    background: "#111827",
    surface: "#1F2937",
    primary: "#8B5CF6",
    primary_light: "#A78BFA",
    secondary: "#818CF8",
    text: "#F9FAFB",
    text_secondary: "#D1D5DB",
    text_tertiary: "#9CA3AF",
    border: "#374151",
    error: "#F87171",
    success: "#34D399",
    warning: "#FBBF24",
    card: "#1F2937",
    overlay: "rgba(0, 0, 0, 0.7)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_system() {
        assert_eq!(ColorScheme::Auto.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ColorScheme::Auto.resolve(false), ResolvedTheme::Light);
        assert_eq!(ColorScheme::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(ColorScheme::Dark.resolve(false), ResolvedTheme::Dark);
    }

    #[test]
    fn palettes_differ_by_theme() {
        assert_eq!(ResolvedTheme::Light.palette().primary, "#603780");
        assert_eq!(ResolvedTheme::Dark.palette().background, "#111827");
        assert_eq!(
            ResolvedTheme::Dark.palette().overlay,
            "rgba(0, 0, 0, 0.7)"
        );
    }
}
