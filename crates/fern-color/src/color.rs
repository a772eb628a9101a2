// SPDX-License-Identifier: MIT
//
// fern color system: sRGB storage with an HSL lightness view.
//
// Single-character variable names (r, g, b, h, s, l, c, x, m) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Email clients only understand sRGB hex, so that is what a `Color` stores.
// Lightness adjustments (the tinted theme backgrounds, readable link colors)
// go through HSL, because that is the space CSS authors reason in and the
// one the theme tables are written against.
//
// Conversion pipeline:
//
//   #rrggbb ↔ sRGB (0.0–1.0) ↔ HSL
//                  ↓
//           linear sRGB → relative luminance (see `contrast`)

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with components in `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use fern_color::Color;
///
/// let brand = Color::hex("#3b82f6").unwrap();
///
/// // Tint for a page background
/// let tint = brand.set_lightness(90.0);
/// assert!((tint.lightness() - 90.0).abs() < 1.0);
///
/// assert_eq!(brand.to_hex(), "#3b82f6");
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Red channel, 0.0 to 1.0.
    pub r: f32,
    /// Green channel, 0.0 to 1.0.
    pub g: f32,
    /// Blue channel, 0.0 to 1.0.
    pub b: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from sRGB values (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Create a color from HSL values.
    ///
    /// - `h`: hue angle in degrees (wraps around 360°)
    /// - `s`: saturation, 0.0 to 1.0
    /// - `l`: lightness, 0.0 to 1.0
    #[must_use]
    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        let (r, g, b) = hsl_to_srgb(normalize_hue(h), s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
        Self::srgb(r, g, b)
    }

    /// Create a color from a hex string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without `#`, in either case.
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Pure black.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    /// Pure white.
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    // ─── HSL view ────────────────────────────────────────────────────────

    /// Convert to HSL: hue in degrees `[0, 360)`, saturation and lightness
    /// in `0.0..=1.0`.
    #[must_use]
    pub fn to_hsl(self) -> (f32, f32, f32) {
        srgb_to_hsl(self.r, self.g, self.b)
    }

    /// HSL lightness as a percentage (0 to 100).
    #[must_use]
    pub fn lightness(self) -> f32 {
        self.to_hsl().2 * 100.0
    }

    /// Set HSL lightness to an absolute percentage (clamped to 0–100).
    ///
    /// Hue and saturation are preserved, so `#3b82f6` at 90% becomes a pale
    /// wash of the same blue.
    #[must_use]
    pub fn set_lightness(self, percent: f32) -> Self {
        let (h, s, _) = self.to_hsl();
        Self::hsl(h, s, percent.clamp(0.0, 100.0) / 100.0)
    }

    /// Increase HSL lightness by a ratio of the current lightness
    /// (`l += l * ratio`), clamped to 1.0.
    #[must_use]
    pub fn lighten(self, ratio: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::hsl(h, s, l.mul_add(ratio, l))
    }

    /// Decrease HSL lightness by a ratio of the current lightness
    /// (`l -= l * ratio`), clamped to 0.0.
    #[must_use]
    pub fn darken(self, ratio: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::hsl(h, s, l.mul_add(-ratio, l))
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Convert to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        // Two colors are equal when they serialize to the same hex.
        self.to_rgb8() == other.to_rgb8()
    }
}

impl Eq for Color {}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── HSL ↔ sRGB ──────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Convert sRGB (0.0–1.0) → HSL.
fn srgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) * 0.5;
    let delta = max - min;

    if delta < 1e-6 {
        return (0.0, 0.0, l); // Achromatic: hue is undefined, default to 0
    }

    let s = delta / (1.0 - 2.0f32.mul_add(l, -1.0).abs());

    let h = if (max - r).abs() < f32::EPSILON {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() < f32::EPSILON {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (normalize_hue(h), s.clamp(0.0, 1.0), l)
}

/// Convert HSL → sRGB (0.0–1.0).
fn hsl_to_srgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - 2.0f32.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = c.mul_add(-0.5, l);

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────
//
// sRGB uses a piecewise transfer function (gamma curve) to encode linear
// light values into the perceptual domain. Luminance is defined on linear
// values.

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color string into a Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
