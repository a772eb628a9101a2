//! Brand palette: the bridge from one brand color to concrete CSS values.
//!
//! Themes never do color math themselves. They read the pre-formatted hex
//! strings from a [`BrandPalette`], which is built once per render from the
//! request's brand color.

use fern_color::Color;
use fern_color::contrast::{self, link_color, pick_contrast};

/// Brand color used when none (or an invalid one) is supplied.
pub const DEFAULT_BRAND_HEX: &str = "#3b82f6";

/// HSL lightness (percent) of the tinted page background.
pub const TINT_LIGHTNESS: f32 = 90.0;

/// Body text gray, used for footer text on light tints.
pub const BODY_TEXT: &str = "#51545e";

/// Footer text on dark tints.
pub const FOOTER_TEXT_ON_DARK: &str = "#FFF";

/// Button label on light brands.
pub const BUTTON_TEXT_ON_LIGHT: &str = "#000";

/// Button label on dark brands.
pub const BUTTON_TEXT_ON_DARK: &str = "#FFF";

/// Every brand-derived value a theme can interpolate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPalette {
    /// The brand color as supplied, e.g. `#3b82f6`.
    pub brand: String,
    /// Button label color: dark on light brands, light on dark ones.
    pub button_text: &'static str,
    /// Link color (see [`fern_color::link_color`]).
    pub link: String,
    /// The brand lightened to a pale wash, for page backgrounds.
    pub tint: String,
    /// Footer text color readable on [`tint`](Self::tint).
    pub footer_on_tint: &'static str,
}

impl BrandPalette {
    /// Derive a palette from a parsed brand color.
    ///
    /// `brand` is echoed verbatim so operator-supplied casing survives into
    /// the stylesheet.
    #[must_use]
    pub fn derive(brand: &str, color: Color) -> Self {
        let footer_on_tint = if contrast::lightness_adjusted_luminosity(color, TINT_LIGHTNESS)
            > contrast::LIGHT_BACKGROUND_THRESHOLD
        {
            BODY_TEXT
        } else {
            FOOTER_TEXT_ON_DARK
        };

        Self {
            brand: brand.to_string(),
            button_text: pick_contrast(color, BUTTON_TEXT_ON_LIGHT, BUTTON_TEXT_ON_DARK),
            link: link_color(color).to_hex(),
            tint: color.set_lightness(TINT_LIGHTNESS).to_hex(),
            footer_on_tint,
        }
    }

    /// Derive a palette from a hex string, falling back to the default brand
    /// color when the string does not parse.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        match Color::hex(hex) {
            Some(color) => Self::derive(hex, color),
            None => Self::default(),
        }
    }
}

impl Default for BrandPalette {
    fn default() -> Self {
        let color = Color::hex(DEFAULT_BRAND_HEX).unwrap_or(Color::BLACK);
        Self::derive(DEFAULT_BRAND_HEX, color)
    }
}
