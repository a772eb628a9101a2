//! # fern-render: branded email rendering
//!
//! Turns a declarative email description into a complete HTML document and
//! a matching plain-text body.
//!
//! # Pipeline
//!
//! ```text
//! EmailRequest (JSON, every field optional)
//!     │  request.rs: normalize defaults, validate brand color
//!     ▼
//! EmailSpec
//!     │  blocks.rs:   content blocks → body HTML
//!     │  footer.rs:   copyright / unsubscribe / referrer → footer HTML
//!     │  document.rs: stylesheet + shell, themed through fern-theme
//!     ▼
//! RenderedEmail { html, text }   (text.rs flattens body and footer)
//! ```
//!
//! Rendering never fails. Bad content is dropped or defaulted and reported
//! through a [`DiagnosticSink`]; the copyright year comes from a [`Clock`]
//! so output can be pinned in tests.

pub mod blocks;
pub mod brand;
pub mod clock;
pub mod content;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod footer;
pub mod renderer;
pub mod request;
pub mod samples;
pub mod text;

pub use brand::BrandColor;
pub use clock::{Clock, FixedClock, SystemClock};
pub use content::{Content, ContentBlock, Entry, HeadingLevel};
pub use diagnostics::{CollectingDiagnostics, Diagnostic, DiagnosticSink, TracingDiagnostics};
pub use error::{Error, Result};
pub use renderer::{RenderedEmail, Renderer, render_html, render_text};
pub use request::{EmailRequest, EmailSpec, Recipients, normalize};
