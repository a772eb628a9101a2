//! Non-fatal diagnostics raised while rendering.
//!
//! Rendering never fails on bad input. Whatever gets dropped or defaulted is
//! reported here instead, through a caller-supplied [`DiagnosticSink`].

use std::cell::RefCell;

/// Something in the input was ignored or replaced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("content is {kind}, expected text or blocks; rendering no content")]
    UnsupportedContent { kind: &'static str },

    #[error("content entry {index} skipped: {reason}")]
    MalformedBlock { index: usize, reason: String },

    #[error("unknown theme `{name}`, using `{fallback}`")]
    UnknownTheme { name: String, fallback: &'static str },
}

/// Receiver for render diagnostics.
pub trait DiagnosticSink {
    fn emit(&self, diagnostic: Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn emit(&self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Logs each diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "email input adjusted during render");
    }
}

/// Keeps every diagnostic for later inspection.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    seen: RefCell<Vec<Diagnostic>>,
}

impl CollectingDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.seen.take()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        self.seen.borrow_mut().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collects_in_order() {
        let sink = CollectingDiagnostics::new();
        sink.emit(Diagnostic::UnsupportedContent { kind: "a number" });
        (&sink).emit(Diagnostic::MalformedBlock {
            index: 2,
            reason: "missing field `type`".into(),
        });
        assert_eq!(sink.len(), 2);

        let seen = sink.take();
        assert_eq!(seen[0], Diagnostic::UnsupportedContent { kind: "a number" });
        assert!(sink.is_empty());
    }

    #[test]
    fn messages() {
        let d = Diagnostic::MalformedBlock {
            index: 1,
            reason: "unknown variant `carousel`".into(),
        };
        assert_eq!(d.to_string(), "content entry 1 skipped: unknown variant `carousel`");

        let d = Diagnostic::UnknownTheme {
            name: "fancy".into(),
            fallback: "basic",
        };
        assert_eq!(d.to_string(), "unknown theme `fancy`, using `basic`");
    }
}
