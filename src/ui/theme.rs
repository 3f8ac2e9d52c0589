//! Day/night theming and ANSI escape sequence generation.
//!
//! The whole UI is drawn from two style variables, `color_dark` (foreground) and
//! `color_light` (background). [`StyleVariables::apply_theme`] swaps them between
//! two fixed palettes:
//!
//! | Variant | `color_dark`     | `color_light`    |
//! |---------|------------------|------------------|
//! | day     | `10, 10, 20`     | `255, 255, 255`  |
//! | night   | `255, 255, 255`  | `10, 10, 20`     |
//!
//! # Example
//!
//! ```rust
//! use book_catalog::ui::theme::{Rgb, StyleVariables, Theme, ThemeVariant};
//!
//! let mut style = StyleVariables::default();
//! style.apply_theme(ThemeVariant::Night);
//! assert_eq!(style.color_dark, Rgb::WHITE);
//! print!("{}{}night{}", Theme::fg(style.color_dark), Theme::bg(style.color_light), Theme::reset());
//! ```

use crate::domain::CatalogError;
use std::fmt;
use std::str::FromStr;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const NEAR_BLACK: Self = Self(10, 10, 20);
    pub const WHITE: Self = Self(255, 255, 255);
}

impl fmt::Display for Rgb {
    /// Formats as a `r, g, b` triple.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Dark/light preference reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Dark,
    Light,
}

impl ColorScheme {
    /// Parses `dark` / `light` (case-insensitive). Anything else is no signal.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// The two theme variants offered by the settings form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeVariant {
    #[default]
    Day,
    Night,
}

impl ThemeVariant {
    /// All variants in selector order.
    pub const ALL: [Self; 2] = [Self::Day, Self::Night];

    /// Picks the startup variant from the host preference, defaulting to day.
    #[must_use]
    pub const fn from_preference(preference: Option<ColorScheme>) -> Self {
        match preference {
            Some(ColorScheme::Dark) => Self::Night,
            Some(ColorScheme::Light) | None => Self::Day,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeVariant {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            other => Err(CatalogError::Config(format!("unknown theme: {other}"))),
        }
    }
}

/// The two global style variables every component draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleVariables {
    /// Foreground color.
    pub color_dark: Rgb,
    /// Background color.
    pub color_light: Rgb,
}

impl Default for StyleVariables {
    fn default() -> Self {
        Self::for_variant(ThemeVariant::Day)
    }
}

impl StyleVariables {
    #[must_use]
    pub const fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Day => Self { color_dark: Rgb::NEAR_BLACK, color_light: Rgb::WHITE },
            ThemeVariant::Night => Self { color_dark: Rgb::WHITE, color_light: Rgb::NEAR_BLACK },
        }
    }

    /// Sets both variables for `variant`. Touches nothing else.
    pub fn apply_theme(&mut self, variant: ThemeVariant) {
        tracing::debug!(theme = %variant, "applying theme");
        *self = Self::for_variant(variant);
    }
}

/// ANSI escape sequence helpers.
pub struct Theme;

impl Theme {
    /// 24-bit foreground color sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(color: Rgb) -> String {
        let Rgb(r, g, b) = color;
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(color: Rgb) -> String {
        let Rgb(r, g, b) = color;
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Foreground and background of the active style variables.
    #[must_use]
    pub fn base(style: &StyleVariables) -> String {
        format!("{}{}", Self::fg(style.color_dark), Self::bg(style.color_light))
    }

    /// Swapped foreground and background, used for selection and highlights.
    #[must_use]
    pub fn inverted(style: &StyleVariables) -> String {
        format!("{}{}", Self::fg(style.color_light), Self::bg(style.color_dark))
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_puts_light_in_front_of_dark() {
        let mut style = StyleVariables::default();
        style.apply_theme(ThemeVariant::Night);
        assert_eq!(style.color_dark, Rgb::WHITE);
        assert_eq!(style.color_light, Rgb::NEAR_BLACK);
    }

    #[test]
    fn day_is_the_inverse_of_night() {
        let mut style = StyleVariables::for_variant(ThemeVariant::Night);
        style.apply_theme(ThemeVariant::Day);
        assert_eq!(style.color_dark, Rgb::NEAR_BLACK);
        assert_eq!(style.color_light, Rgb::WHITE);
        assert_eq!(style.color_dark.to_string(), "10, 10, 20");
    }

    #[test]
    fn preference_selects_initial_variant() {
        assert_eq!(ThemeVariant::from_preference(Some(ColorScheme::Dark)), ThemeVariant::Night);
        assert_eq!(ThemeVariant::from_preference(Some(ColorScheme::Light)), ThemeVariant::Day);
        assert_eq!(ThemeVariant::from_preference(None), ThemeVariant::Day);
    }

    #[test]
    fn parses_scheme_and_variant_names() {
        assert_eq!(ColorScheme::parse(" DARK "), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::parse("sepia"), None);
        assert_eq!("night".parse::<ThemeVariant>().unwrap(), ThemeVariant::Night);
        assert!("dusk".parse::<ThemeVariant>().is_err());
    }

    #[test]
    fn escape_sequences_use_rgb_components() {
        assert_eq!(Theme::fg(Rgb(1, 2, 3)), "\u{1b}[38;2;1;2;3m");
        assert_eq!(Theme::bg(Rgb::WHITE), "\u{1b}[48;2;255;255;255m");
    }
}
