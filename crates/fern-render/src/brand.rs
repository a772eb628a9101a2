//! Validated brand color.

use std::fmt;
use std::sync::LazyLock;

use fern_theme::BrandPalette;
use fern_theme::palette::DEFAULT_BRAND_HEX;
use regex::Regex;
use serde::Serialize;

/// Six-digit hex with a leading hash. Shorthand `#abc` is not accepted.
static BRAND_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#[0-9A-F]{6}$").expect("Failed to compile brand color regex")
});

/// A brand color known to be a `#RRGGBB` hex string.
///
/// Anything else is replaced by [`DEFAULT_BRAND_HEX`] at normalization time,
/// so the renderer never sees an invalid color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BrandColor(String);

impl BrandColor {
    /// Accept `value` if it is a six-digit hex color. Casing is preserved.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        BRAND_COLOR_REGEX
            .is_match(value)
            .then(|| Self(value.to_string()))
    }

    /// Parse `value`, silently substituting the default color.
    #[must_use]
    pub fn or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Every color a theme derives from this brand.
    #[must_use]
    pub fn palette(&self) -> BrandPalette {
        BrandPalette::from_hex(&self.0)
    }
}

impl Default for BrandColor {
    fn default() -> Self {
        Self(DEFAULT_BRAND_HEX.to_string())
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_six_digit_hex() {
        assert_eq!(BrandColor::parse("#10b981").unwrap().as_str(), "#10b981");
        assert_eq!(BrandColor::parse("#FDE047").unwrap().as_str(), "#FDE047");
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["not-a-color", "#abc", "10b981", "#10b98", "#10b9811", "#gggggg", ""] {
            assert_eq!(BrandColor::parse(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn invalid_falls_back_to_default() {
        assert_eq!(BrandColor::or_default(Some("not-a-color")).as_str(), "#3b82f6");
        assert_eq!(BrandColor::or_default(None).as_str(), "#3b82f6");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&BrandColor::default()).unwrap();
        assert_eq!(json, "\"#3b82f6\"");
    }

    #[test]
    fn palette_uses_brand() {
        let brand = BrandColor::parse("#10b981").unwrap();
        assert_eq!(brand.palette().brand, "#10b981");
    }
}
