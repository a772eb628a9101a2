// SPDX-License-Identifier: MIT
//
// Contrast derivation: legible colors computed from a single brand color.
//
// Everything an email theme needs to stay readable comes from one operator
// supplied color:
//
// - button label:    near-black on light brands, near-white on dark ones
// - link color:      bright brands as is, the rest at 40% lightness
// - footer text:     picked against a tinted (lightened) page background
//
// Readability decisions happen in WCAG relative luminance; adjustments happen
// in HSL lightness, because that keeps the hue the operator chose.

use crate::color::{Color, srgb_to_linear};

/// Luminance above which a background counts as "light".
pub const LIGHT_BACKGROUND_THRESHOLD: f64 = 0.5;

/// Brands brighter than this are used as the link color unchanged.
pub const LINK_LUMINANCE_THRESHOLD: f64 = 0.4;

/// HSL lightness (percent) every other brand is set to for links.
pub const LINK_LIGHTNESS: f32 = 40.0;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let r_lin = f64::from(srgb_to_linear(color.r));
    let g_lin = f64::from(srgb_to_linear(color.g));
    let b_lin = f64::from(srgb_to_linear(color.b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether text on `background` should be dark.
#[must_use]
pub fn is_light(background: Color) -> bool {
    relative_luminance(background) > LIGHT_BACKGROUND_THRESHOLD
}

/// Pick between a dark and a light text color for `background`.
///
/// Returns `dark` when the background's luminance exceeds 0.5, else `light`.
#[must_use]
pub fn pick_contrast<T>(background: Color, dark: T, light: T) -> T {
    if is_light(background) { dark } else { light }
}

/// Text color for labels drawn directly on `background` (button labels).
#[must_use]
pub fn contrast_text(background: Color) -> Color {
    pick_contrast(background, Color::BLACK, Color::WHITE)
}

/// Luminance of `color` after its HSL lightness is set to `percent`.
///
/// Used to decide the footer text color on a tinted background without
/// building the tint twice.
#[must_use]
pub fn lightness_adjusted_luminosity(color: Color, percent: f32) -> f64 {
    relative_luminance(color.set_lightness(percent))
}

/// Link color derived from a brand color.
///
/// Brands with luminance above 0.4 are used as is. Everything else keeps its
/// hue and saturation with HSL lightness set to 40%.
#[must_use]
pub fn link_color(brand: Color) -> Color {
    if relative_luminance(brand) > LINK_LUMINANCE_THRESHOLD {
        brand
    } else {
        brand.set_lightness(LINK_LIGHTNESS)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
