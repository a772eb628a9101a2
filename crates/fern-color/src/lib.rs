// SPDX-License-Identifier: MIT
//
// fern-color: color model for the fern email renderer.
//
// Parses operator-supplied hex colors, exposes an HSL lightness view for
// tinting, and computes WCAG luminance and contrast so themes can derive
// legible button, link and footer colors from a single brand color.
//
// Every function here is pure and total over parsed colors. Validation of
// raw strings happens once, at `Color::hex`; nothing downstream re-checks.

pub mod color;
pub mod contrast;

pub use color::Color;
pub use contrast::{contrast_ratio, contrast_text, link_color, relative_luminance};
