//! # fern-theme: named email themes
//!
//! Turns one brand color into a set of themes the document composer can
//! interpolate into its stylesheet and markup.
//!
//! # Architecture
//!
//! ```text
//! brand color (hex)
//!     │
//!     ▼
//! palette.rs:  derive button text, link, tint and footer colors
//!     │
//!     ▼
//! builtin.rs:  assemble modern / basic / minimal / plain from css.rs
//!     │
//!     ▼
//! registry.rs: name → theme catalog with cascading aspect lookup
//! ```
//!
//! All color math happens once, while building the registry. Resolving an
//! aspect is a pair of map reads and never fails.

pub mod aspect;
pub mod builtin;
pub mod css;
pub mod palette;
pub mod registry;
pub mod theme;

pub use aspect::Aspect;
pub use builtin::{DEFAULT_THEME, builtin_names};
pub use palette::BrandPalette;
pub use registry::ThemeRegistry;
pub use theme::Theme;
