// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! App bar design tokens.
//!
//! Static values for the `rmd-app-bar-*` variables: stacking, heights, keylines,
//! and the color defaults for the primary, secondary, and default themes.
//! Colors that follow the theme are expressed as CSS `var()` references with a
//! fallback, exactly as the stylesheet declares them.
//!
//! ```
//! use understory_material::app_bar::{self, TokenValue};
//!
//! assert_eq!(app_bar::token("rmd-app-bar-height"), Some(TokenValue::Css("3.5rem")));
//! assert_eq!(app_bar::token("rmd-app-bar-z-index"), Some(TokenValue::Number(10)));
//! ```

/// Stacking order of a fixed app bar.
pub const Z_INDEX: i32 = 10;
/// Elevation applied to a fixed app bar.
pub const FIXED_ELEVATION: i32 = 2;
/// Normal height.
pub const HEIGHT: &str = "3.5rem";
/// Dense height.
pub const DENSE_HEIGHT: &str = "3rem";
/// Prominent height.
pub const PROMINENT_HEIGHT: &str = "7rem";
/// Prominent and dense height.
pub const PROMINENT_DENSE_HEIGHT: &str = "6rem";
/// Horizontal keyline of the app bar content.
pub const KEYLINE: &str = "1rem";
/// Margin around the navigation button.
pub const NAV_MARGIN: &str = "0.25rem";
/// Keyline of the title.
pub const TITLE_KEYLINE: &str = "4.5rem";
/// Title margin when a navigation button precedes it.
pub const TITLE_NAV_MARGIN: &str = "1.25rem";
/// Left and right margin of actions.
pub const LR_MARGIN: &str = "0.25rem";
/// Background of the primary theme.
pub const PRIMARY_BACKGROUND_COLOR: &str = "var(--rmd-theme-primary, #9c27b0)";
/// Text color of the primary theme.
pub const PRIMARY_COLOR: &str = "var(--rmd-theme-on-primary, #fff)";
/// Background of the secondary theme.
pub const SECONDARY_BACKGROUND_COLOR: &str = "var(--rmd-theme-secondary, #f50057)";
/// Text color of the secondary theme.
pub const SECONDARY_COLOR: &str = "var(--rmd-theme-on-secondary, #fff)";
/// Background of the default theme in light mode.
pub const DEFAULT_LIGHT_THEME_BACKGROUND_COLOR: &str = "#f5f5f5";
/// Text color of the default theme in light mode.
pub const DEFAULT_LIGHT_THEME_COLOR: &str = "#fff";
/// Background of the default theme in dark mode.
pub const DEFAULT_DARK_THEME_BACKGROUND_COLOR: &str = "#212121";
/// Text color of the default theme in dark mode.
pub const DEFAULT_DARK_THEME_COLOR: &str = "#000";
/// Background of the default theme.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#f5f5f5";
/// Text color of the default theme.
pub const DEFAULT_COLOR: &str = "#fff";

/// A token value: either a bare number or CSS text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// Unitless number (z-index, elevation level).
    Number(i32),
    /// CSS value text.
    Css(&'static str),
}

impl core::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Css(s) => f.write_str(s),
        }
    }
}

/// Every scalar app bar token, keyed by its variable name, in declaration order.
pub const TOKENS: &[(&str, TokenValue)] = &[
    ("rmd-app-bar-z-index", TokenValue::Number(Z_INDEX)),
    (
        "rmd-app-bar-fixed-elevation",
        TokenValue::Number(FIXED_ELEVATION),
    ),
    ("rmd-app-bar-height", TokenValue::Css(HEIGHT)),
    ("rmd-app-bar-dense-height", TokenValue::Css(DENSE_HEIGHT)),
    (
        "rmd-app-bar-prominent-height",
        TokenValue::Css(PROMINENT_HEIGHT),
    ),
    (
        "rmd-app-bar-prominent-dense-height",
        TokenValue::Css(PROMINENT_DENSE_HEIGHT),
    ),
    ("rmd-app-bar-keyline", TokenValue::Css(KEYLINE)),
    ("rmd-app-bar-nav-margin", TokenValue::Css(NAV_MARGIN)),
    ("rmd-app-bar-title-keyline", TokenValue::Css(TITLE_KEYLINE)),
    (
        "rmd-app-bar-title-nav-margin",
        TokenValue::Css(TITLE_NAV_MARGIN),
    ),
    ("rmd-app-bar-lr-margin", TokenValue::Css(LR_MARGIN)),
    (
        "rmd-app-bar-primary-background-color",
        TokenValue::Css(PRIMARY_BACKGROUND_COLOR),
    ),
    ("rmd-app-bar-primary-color", TokenValue::Css(PRIMARY_COLOR)),
    (
        "rmd-app-bar-secondary-background-color",
        TokenValue::Css(SECONDARY_BACKGROUND_COLOR),
    ),
    (
        "rmd-app-bar-secondary-color",
        TokenValue::Css(SECONDARY_COLOR),
    ),
    (
        "rmd-app-bar-default-light-theme-background-color",
        TokenValue::Css(DEFAULT_LIGHT_THEME_BACKGROUND_COLOR),
    ),
    (
        "rmd-app-bar-default-light-theme-color",
        TokenValue::Css(DEFAULT_LIGHT_THEME_COLOR),
    ),
    (
        "rmd-app-bar-default-dark-theme-background-color",
        TokenValue::Css(DEFAULT_DARK_THEME_BACKGROUND_COLOR),
    ),
    (
        "rmd-app-bar-default-dark-theme-color",
        TokenValue::Css(DEFAULT_DARK_THEME_COLOR),
    ),
    (
        "rmd-app-bar-default-background-color",
        TokenValue::Css(DEFAULT_BACKGROUND_COLOR),
    ),
    ("rmd-app-bar-default-color", TokenValue::Css(DEFAULT_COLOR)),
];

/// Look up a scalar token by its full variable name.
pub fn token(name: &str) -> Option<TokenValue> {
    TOKENS.iter().find(|(n, _)| *n == name).map(|&(_, v)| v)
}

/// The values an app bar exposes as customizable theme properties.
///
/// `Default` yields the stock values; [`AppBarThemeValues::get`] looks a
/// property up by its kebab-case name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AppBarThemeValues {
    /// Base background color.
    pub background_color: &'static str,
    /// Base text color.
    pub color: &'static str,
    /// Primary theme background.
    pub primary: &'static str,
    /// Primary theme text color.
    pub on_primary: &'static str,
    /// Secondary theme background.
    pub secondary: &'static str,
    /// Secondary theme text color.
    pub on_secondary: &'static str,
    /// Default theme background.
    pub default_background_color: &'static str,
    /// Default theme background in light mode.
    pub default_light_background_color: &'static str,
    /// Default theme background in dark mode.
    pub default_dark_background_color: &'static str,
    /// Default theme text color.
    pub default_color: &'static str,
    /// Default theme text color in light mode.
    pub default_light_color: &'static str,
    /// Default theme text color in dark mode.
    pub default_dark_color: &'static str,
    /// Normal height.
    pub height: &'static str,
    /// Dense height.
    pub dense_height: &'static str,
    /// Prominent height.
    pub prominent_height: &'static str,
    /// Prominent and dense height.
    pub prominent_dense_height: &'static str,
}

impl Default for AppBarThemeValues {
    fn default() -> Self {
        Self {
            background_color: "transparent",
            color: "initial",
            primary: PRIMARY_BACKGROUND_COLOR,
            on_primary: PRIMARY_COLOR,
            secondary: SECONDARY_BACKGROUND_COLOR,
            on_secondary: SECONDARY_COLOR,
            default_background_color: DEFAULT_BACKGROUND_COLOR,
            default_light_background_color: DEFAULT_LIGHT_THEME_BACKGROUND_COLOR,
            default_dark_background_color: DEFAULT_DARK_THEME_BACKGROUND_COLOR,
            default_color: DEFAULT_COLOR,
            default_light_color: DEFAULT_LIGHT_THEME_COLOR,
            default_dark_color: DEFAULT_DARK_THEME_COLOR,
            height: HEIGHT,
            dense_height: DENSE_HEIGHT,
            prominent_height: PROMINENT_HEIGHT,
            prominent_dense_height: PROMINENT_DENSE_HEIGHT,
        }
    }
}

impl AppBarThemeValues {
    /// All properties as `(name, value)` pairs.
    pub fn entries(&self) -> [(&'static str, &'static str); 16] {
        [
            ("background-color", self.background_color),
            ("color", self.color),
            ("primary", self.primary),
            ("on-primary", self.on_primary),
            ("secondary", self.secondary),
            ("on-secondary", self.on_secondary),
            ("default-background-color", self.default_background_color),
            (
                "default-light-background-color",
                self.default_light_background_color,
            ),
            (
                "default-dark-background-color",
                self.default_dark_background_color,
            ),
            ("default-color", self.default_color),
            ("default-light-color", self.default_light_color),
            ("default-dark-color", self.default_dark_color),
            ("height", self.height),
            ("dense-height", self.dense_height),
            ("prominent-height", self.prominent_height),
            ("prominent-dense-height", self.prominent_dense_height),
        ]
    }

    /// Look up a property by its kebab-case name (e.g. `"dense-height"`).
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn lookup_known_tokens() {
        assert_eq!(
            token("rmd-app-bar-fixed-elevation"),
            Some(TokenValue::Number(2))
        );
        assert_eq!(
            token("rmd-app-bar-secondary-background-color"),
            Some(TokenValue::Css("var(--rmd-theme-secondary, #f50057)"))
        );
        assert_eq!(
            token("rmd-app-bar-default-dark-theme-background-color"),
            Some(TokenValue::Css("#212121"))
        );
    }

    #[test]
    fn lookup_unknown_token() {
        assert_eq!(token("rmd-app-bar-width"), None);
        // Names are matched exactly, without prefix inference.
        assert_eq!(token("height"), None);
    }

    #[test]
    fn token_names_are_unique_and_prefixed() {
        assert_eq!(TOKENS.len(), 21);
        for (i, (a, _)) in TOKENS.iter().enumerate() {
            assert!(a.starts_with("rmd-app-bar-"), "unprefixed token {a}");
            for (b, _) in &TOKENS[i + 1..] {
                assert_ne!(a, b, "duplicate token name");
            }
        }
    }

    #[test]
    fn token_display() {
        assert_eq!(TokenValue::Number(10).to_string(), "10");
        assert_eq!(TokenValue::Css("3rem").to_string(), "3rem");
    }

    #[test]
    fn theme_values_default() {
        let theme = AppBarThemeValues::default();
        assert_eq!(theme.get("background-color"), Some("transparent"));
        assert_eq!(theme.get("color"), Some("initial"));
        assert_eq!(theme.get("on-primary"), Some(PRIMARY_COLOR));
        assert_eq!(theme.get("dense-height"), Some("3rem"));
        assert_eq!(theme.get("prominent-dense-height"), Some("6rem"));
        assert_eq!(theme.get("z-index"), None);
    }

    // Theme values that mirror scalar tokens stay in step with them.
    #[test]
    fn theme_values_match_tokens() {
        let theme = AppBarThemeValues::default();
        assert_eq!(
            token("rmd-app-bar-primary-background-color"),
            Some(TokenValue::Css(theme.primary))
        );
        assert_eq!(
            token("rmd-app-bar-height"),
            Some(TokenValue::Css(theme.height))
        );
        assert_eq!(
            token("rmd-app-bar-default-light-theme-color"),
            Some(TokenValue::Css(theme.default_light_color))
        );
    }
}
