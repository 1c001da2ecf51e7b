//! # Theme System
//!
//! Colours used by the stand-up form, grouped by what they mean on screen.
//!
//! Rendering code never hardcodes `ratatui::style::Color` values; it reads
//! them from the active [`Theme`], chosen by name in the config file or with
//! `--theme`.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Catppuccin Latte** - light variant
//! - **Dracula**
//! - **Nord**
//! - **Gruvbox Dark**

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, matched case-insensitively
    pub name: &'static str,

    /// Panel and modal background
    pub bg: Color,
    /// Body text
    pub fg: Color,
    /// Hints, placeholders, footer
    pub fg_dim: Color,

    /// Title, focused borders, selection background
    pub accent: Color,
    /// Member names and the date
    pub secondary: Color,

    /// Saved entries and the "email opened" banner
    pub saved: Color,
    /// Entries still being edited
    pub draft: Color,
    /// Alerts and delete confirmations
    pub error: Color,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        saved: Color::Rgb(166, 227, 161),     // green
        draft: Color::Rgb(250, 179, 135),     // peach
        error: Color::Rgb(243, 139, 168),     // red
    },
    Theme {
        name: "Catppuccin Latte",
        bg: Color::Rgb(239, 241, 245),       // base
        fg: Color::Rgb(76, 79, 105),         // text
        fg_dim: Color::Rgb(156, 160, 176),   // overlay0
        accent: Color::Rgb(30, 102, 245),    // blue
        secondary: Color::Rgb(223, 142, 29), // yellow
        saved: Color::Rgb(64, 160, 43),      // green
        draft: Color::Rgb(254, 100, 11),     // peach
        error: Color::Rgb(210, 15, 57),      // red
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),
        secondary: Color::Rgb(241, 250, 140),
        saved: Color::Rgb(80, 250, 123),
        draft: Color::Rgb(255, 184, 108),
        error: Color::Rgb(255, 85, 85),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),
        secondary: Color::Rgb(235, 203, 139),
        saved: Color::Rgb(163, 190, 140),
        draft: Color::Rgb(208, 135, 112),
        error: Color::Rgb(191, 97, 106),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),
        secondary: Color::Rgb(250, 189, 47),
        saved: Color::Rgb(184, 187, 38),
        draft: Color::Rgb(254, 128, 25),
        error: Color::Rgb(251, 73, 52),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_default_is_mocha() {
        assert_eq!(Theme::default_theme().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("catppuccin latte").is_some());
        assert!(Theme::by_name("NORD").is_some());
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn test_catppuccin_mocha_matches_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::default_theme();
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.saved, ctp(mocha.green));
        assert_eq!(theme.draft, ctp(mocha.peach));
        assert_eq!(theme.error, ctp(mocha.red));
    }

    #[test]
    fn test_catppuccin_latte_matches_palette() {
        let latte = catppuccin::PALETTE.latte.colors;
        let theme = Theme::by_name("Catppuccin Latte").expect("theme exists");
        assert_eq!(theme.bg, ctp(latte.base));
        assert_eq!(theme.fg, ctp(latte.text));
        assert_eq!(theme.saved, ctp(latte.green));
        assert_eq!(theme.error, ctp(latte.red));
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let mut names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate theme names found");
    }
}
