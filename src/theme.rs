//! Theme palettes
//!
//! A palette maps every semantic category (plus the page/block chrome
//! colors) to a concrete color. Palettes are plain structs with
//! non-optional fields, so resolving a known category can never fail.
//! Theme selection is explicit: a `&ThemePalette` is threaded through
//! every rendering call, never read from shared state.

use crate::highlight::Category;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#rrggbb` hex string
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(rgb(value))
    }

    /// Format as `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const fn rgb(hex: u32) -> Rgb {
    Rgb {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

/// Font variant a rendering surface must support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontVariant {
    #[default]
    Regular,
    Bold,
    Italic,
}

/// A complete, immutable color palette
///
/// Every built-in palette defines the identical field set; there is no
/// partial palette and no fallback chain.
#[derive(Debug, Clone)]
pub struct ThemePalette {
    pub name: &'static str,
    /// Code block background
    pub background: Rgb,
    /// Page background behind the blocks
    pub page_background: Rgb,
    /// Block border lines
    pub border: Rgb,
    /// Line number gutter
    pub line_number: Rgb,
    /// Plain document text (headers)
    pub text: Rgb,
    /// Dimmed document text (info lines)
    pub text_dim: Rgb,
    pub comment: Rgb,
    pub keyword: Rgb,
    pub function: Rgb,
    pub string: Rgb,
    pub number: Rgb,
    pub preprocessor: Rgb,
    pub type_name: Rgb,
    pub variable: Rgb,
    pub property: Rgb,
    pub operator: Rgb,
    pub punctuation: Rgb,
}

impl ThemePalette {
    /// Resolve the display color for a category
    pub fn color_for(&self, category: Category) -> Rgb {
        match category {
            Category::Keyword => self.keyword,
            Category::Type => self.type_name,
            Category::String => self.string,
            Category::Number => self.number,
            Category::Preprocessor => self.preprocessor,
            Category::LineComment | Category::BlockComment => self.comment,
            Category::FunctionCall => self.function,
            Category::MemberAccess => self.property,
            // Namespace members share the type color
            Category::NamespaceAccess => self.type_name,
            Category::PointerOrRef | Category::Operator => self.operator,
            Category::Punctuation => self.punctuation,
            Category::Identifier => self.variable,
            Category::Whitespace => self.text,
        }
    }

    /// Resolve the font variant for a category
    pub fn variant_for(&self, category: Category) -> FontVariant {
        match category {
            Category::Keyword | Category::Preprocessor | Category::PointerOrRef => {
                FontVariant::Bold
            }
            Category::LineComment | Category::BlockComment => FontVariant::Italic,
            _ => FontVariant::Regular,
        }
    }
}

/// Theme name used when neither the config file nor the command line
/// selects one
pub const DEFAULT_THEME: &str = "kanagawa-wave";

/// The built-in palettes
pub fn builtin_themes() -> Vec<ThemePalette> {
    vec![
        ThemePalette {
            name: "catppuccin-mocha",
            background: rgb(0x1e1e2e),
            page_background: rgb(0x11111b),
            border: rgb(0x313244),
            line_number: rgb(0x6c7086),
            text: rgb(0xcdd6f4),
            text_dim: rgb(0xbac2de),
            comment: rgb(0x6c7086),
            keyword: rgb(0xcba6f7),
            function: rgb(0x89b4fa),
            string: rgb(0xa6e3a1),
            number: rgb(0xfab387),
            preprocessor: rgb(0xf5c2e7),
            type_name: rgb(0xf9e2af),
            variable: rgb(0xcdd6f4),
            property: rgb(0x89dceb),
            operator: rgb(0x94e2d5),
            punctuation: rgb(0xbac2de),
        },
        ThemePalette {
            name: "catppuccin-latte",
            background: rgb(0xeff1f5),
            page_background: rgb(0xe6e9ef),
            border: rgb(0xccd0da),
            line_number: rgb(0x8c8fa1),
            text: rgb(0x4c4f69),
            text_dim: rgb(0x5c5f77),
            comment: rgb(0x9ca0b0),
            keyword: rgb(0x8839ef),
            function: rgb(0x1e66f5),
            string: rgb(0x40a02b),
            number: rgb(0xfe640b),
            preprocessor: rgb(0xea76cb),
            type_name: rgb(0xdf8e1d),
            variable: rgb(0x4c4f69),
            property: rgb(0x04a5e5),
            operator: rgb(0x179299),
            punctuation: rgb(0x5c5f77),
        },
        ThemePalette {
            name: "kanagawa-wave",
            background: rgb(0x1f1f28),
            page_background: rgb(0x16161d),
            border: rgb(0x54546d),
            line_number: rgb(0x54546d),
            text: rgb(0xdcd7ba),
            text_dim: rgb(0xc8c093),
            comment: rgb(0x727169),
            keyword: rgb(0x957fb8),
            function: rgb(0x7e9cd8),
            string: rgb(0x98bb6c),
            number: rgb(0xffa066),
            preprocessor: rgb(0xe46876),
            type_name: rgb(0xe6c384),
            variable: rgb(0xdcd7ba),
            property: rgb(0x7fb4ca),
            operator: rgb(0xc0a36e),
            punctuation: rgb(0xc8c093),
        },
        ThemePalette {
            name: "kanagawa-dragon",
            background: rgb(0x181616),
            page_background: rgb(0x0d0c0c),
            border: rgb(0x625e5a),
            line_number: rgb(0x625e5a),
            text: rgb(0xc5c9c5),
            text_dim: rgb(0xa6a69c),
            comment: rgb(0x7a8382),
            keyword: rgb(0x8992a7),
            function: rgb(0x8ba4b0),
            string: rgb(0x87a987),
            number: rgb(0xb98d7b),
            preprocessor: rgb(0xc4746e),
            type_name: rgb(0xc4b28a),
            variable: rgb(0xc5c9c5),
            property: rgb(0x8ea4a2),
            operator: rgb(0xb6927b),
            punctuation: rgb(0x9e9b93),
        },
        ThemePalette {
            name: "kanagawa-lotus",
            background: rgb(0xf2ecbc),
            page_background: rgb(0xd5cea3),
            border: rgb(0xb5cbd2),
            line_number: rgb(0xb5cbd2),
            text: rgb(0x545464),
            text_dim: rgb(0x43436c),
            comment: rgb(0x9fb5c9),
            keyword: rgb(0x8a6596),
            function: rgb(0x6693bf),
            string: rgb(0x6f894e),
            number: rgb(0xe98a00),
            preprocessor: rgb(0xc84053),
            type_name: rgb(0x836f4a),
            variable: rgb(0x545464),
            property: rgb(0x4e8ca2),
            operator: rgb(0x8a6596),
            punctuation: rgb(0x625e5a),
        },
    ]
}

/// Look up a built-in palette by name
pub fn find(name: &str) -> Option<ThemePalette> {
    builtin_themes().into_iter().find(|t| t.name == name)
}

/// Names of the built-in palettes, for `--list-themes` and error text
pub fn theme_names() -> Vec<&'static str> {
    builtin_themes().iter().map(|t| t.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_builtin_themes() {
        assert_eq!(builtin_themes().len(), 5);
    }

    #[test]
    fn test_palette_completeness() {
        // Every category resolves to a color in every theme; the
        // resolved colors must come from the palette itself
        for theme in builtin_themes() {
            for category in Category::ALL {
                let color = theme.color_for(category);
                let _ = theme.variant_for(category);
                let known = [
                    theme.comment,
                    theme.keyword,
                    theme.function,
                    theme.string,
                    theme.number,
                    theme.preprocessor,
                    theme.type_name,
                    theme.variable,
                    theme.property,
                    theme.operator,
                    theme.punctuation,
                    theme.text,
                ];
                assert!(known.contains(&color), "{} / {}", theme.name, category.name());
            }
        }
    }

    #[test]
    fn test_find() {
        assert!(find("kanagawa-wave").is_some());
        assert!(find("catppuccin-latte").is_some());
        assert!(find("solarized").is_none());
    }

    #[test]
    fn test_default_theme_exists() {
        assert!(find(DEFAULT_THEME).is_some());
    }

    #[test]
    fn test_comment_style_is_italic() {
        let theme = find("kanagawa-wave").unwrap();
        assert_eq!(theme.variant_for(Category::BlockComment), FontVariant::Italic);
        assert_eq!(theme.variant_for(Category::Keyword), FontVariant::Bold);
        assert_eq!(theme.variant_for(Category::Identifier), FontVariant::Regular);
    }

    #[test]
    fn test_hex_roundtrip() {
        let color = Rgb::from_hex("#1f1f28").unwrap();
        assert_eq!(color, rgb(0x1f1f28));
        assert_eq!(color.to_hex(), "#1f1f28");
        assert!(Rgb::from_hex("1f1f28").is_none());
        assert!(Rgb::from_hex("#xyzxyz").is_none());
        assert!(Rgb::from_hex("#fff").is_none());
    }
}
