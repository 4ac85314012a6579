// src/types/theme.rs
//! Theme keys with their palettes and typography.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named color palette key stored on templates and exposés.
///
/// Parsing is total: any key outside the known set resolves to
/// [`ThemeKey::Default`], so a renderer can never end up without colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKey {
    #[default]
    Default,
    Modern,
    Elegant,
    Minimal,
    Luxury,
}

/// The colors a block renderer may draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
}

/// Font and weight choices that go with a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static str,
    /// CSS declarations applied to headings.
    pub heading_css: &'static str,
    /// CSS declarations applied to body copy.
    pub body_css: &'static str,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 5] = [
        ThemeKey::Default,
        ThemeKey::Modern,
        ThemeKey::Elegant,
        ThemeKey::Minimal,
        ThemeKey::Luxury,
    ];

    /// Resolve a stored theme key, falling back to `default` for unknown keys.
    pub fn resolve(key: &str) -> Self {
        match key.trim() {
            "default" | "" => ThemeKey::Default,
            "modern" => ThemeKey::Modern,
            "elegant" => ThemeKey::Elegant,
            "minimal" => ThemeKey::Minimal,
            "luxury" => ThemeKey::Luxury,
            other => {
                log::warn!("Unknown theme '{}', using default palette", other);
                ThemeKey::Default
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKey::Default => "default",
            ThemeKey::Modern => "modern",
            ThemeKey::Elegant => "elegant",
            ThemeKey::Minimal => "minimal",
            ThemeKey::Luxury => "luxury",
        }
    }

    /// Display name shown in the theme picker.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeKey::Default => "Standard",
            ThemeKey::Modern => "Modern",
            ThemeKey::Elegant => "Elegant",
            ThemeKey::Minimal => "Minimal",
            ThemeKey::Luxury => "Luxus",
        }
    }

    /// Must stay identical to the palette table of the PDF service.
    pub fn palette(&self) -> Palette {
        match self {
            ThemeKey::Default => Palette {
                primary: "#4F46E5",
                secondary: "#1F2937",
                accent: "#6366F1",
                background: "#FFFFFF",
            },
            ThemeKey::Modern => Palette {
                primary: "#0F172A",
                secondary: "#334155",
                accent: "#3B82F6",
                background: "#F8FAFC",
            },
            ThemeKey::Elegant => Palette {
                primary: "#78350F",
                secondary: "#451A03",
                accent: "#D97706",
                background: "#FFFBEB",
            },
            ThemeKey::Minimal => Palette {
                primary: "#18181B",
                secondary: "#3F3F46",
                accent: "#71717A",
                background: "#FAFAFA",
            },
            ThemeKey::Luxury => Palette {
                primary: "#1C1917",
                secondary: "#44403C",
                accent: "#B45309",
                background: "#FAFAF9",
            },
        }
    }

    pub fn typography(&self) -> Typography {
        match self {
            ThemeKey::Default => Typography {
                font_family: "'Geist Sans', system-ui, sans-serif",
                heading_css: "font-weight:600",
                body_css: "font-weight:400",
            },
            ThemeKey::Modern => Typography {
                font_family: "'Inter', system-ui, sans-serif",
                heading_css: "font-weight:700;letter-spacing:-0.025em",
                body_css: "font-weight:300",
            },
            ThemeKey::Elegant => Typography {
                font_family: "'Playfair Display', Georgia, serif",
                heading_css: "font-weight:400;font-style:italic",
                body_css: "font-weight:300",
            },
            ThemeKey::Minimal => Typography {
                font_family: "'Geist Sans', 'Helvetica Neue', Arial, sans-serif",
                heading_css: "font-weight:500;text-transform:uppercase;letter-spacing:0.1em",
                body_css: "font-weight:400",
            },
            ThemeKey::Luxury => Typography {
                font_family: "'Cormorant Garamond', Georgia, serif",
                heading_css: "font-weight:600",
                body_css: "font-weight:400",
            },
        }
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_resolution() {
        assert_eq!(ThemeKey::resolve("modern"), ThemeKey::Modern);
        assert_eq!(ThemeKey::resolve(" elegant "), ThemeKey::Elegant);
        assert_eq!(ThemeKey::resolve("luxury"), ThemeKey::Luxury);
        assert_eq!(ThemeKey::resolve("bold"), ThemeKey::Default);
        assert_eq!(ThemeKey::resolve(""), ThemeKey::Default);
    }

    #[test]
    fn test_round_trip_keys() {
        for key in ThemeKey::ALL {
            assert_eq!(ThemeKey::resolve(key.as_str()), key);
        }
    }

    #[test]
    fn test_default_palette() {
        let palette = ThemeKey::Default.palette();
        assert_eq!(palette.primary, "#4F46E5");
        assert_eq!(palette.secondary, "#1F2937");
        assert_eq!(palette.accent, "#6366F1");
    }

    #[test]
    fn test_luxury_theme() {
        let palette = ThemeKey::Luxury.palette();
        assert_eq!(palette.primary, "#1C1917");
        assert_eq!(palette.secondary, "#44403C");
        assert_eq!(palette.accent, "#B45309");
        assert_eq!(palette.background, "#FAFAF9");
        assert!(ThemeKey::Luxury.typography().font_family.contains("Cormorant"));
        assert_eq!(ThemeKey::Luxury.label(), "Luxus");
    }
}
