//! Render entry points.

use fern_theme::{Aspect, DEFAULT_THEME, ThemeRegistry};

use crate::blocks::render_content;
use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics};
use crate::document::Composer;
use crate::footer::render_footer;
use crate::request::EmailSpec;
use crate::text::html_to_text;

/// The two halves of a multipart email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub html: String,
    pub text: String,
}

/// Renders [`EmailSpec`]s with an injectable clock and diagnostics sink.
///
/// Stateless apart from those two: the same spec and the same year always
/// yield the same output.
#[derive(Debug, Clone, Default)]
pub struct Renderer<C = SystemClock, D = TracingDiagnostics> {
    clock: C,
    diagnostics: D,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock, D: DiagnosticSink> Renderer<C, D> {
    /// Swap the clock used for copyright years.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Renderer<C2, D> {
        Renderer {
            clock,
            diagnostics: self.diagnostics,
        }
    }

    /// Swap the diagnostics sink.
    #[must_use]
    pub fn with_diagnostics<D2: DiagnosticSink>(self, diagnostics: D2) -> Renderer<C, D2> {
        Renderer {
            clock: self.clock,
            diagnostics,
        }
    }

    /// The complete HTML document.
    #[must_use]
    pub fn render_html(&self, spec: &EmailSpec) -> String {
        let themes = self.themes(spec);
        let composer = Composer::new(spec, &themes);
        let body = render_content(&spec.content, &self.diagnostics);
        let footer = render_footer(
            spec,
            composer.aspect(Aspect::EmailFooterAlignment),
            self.clock.current_year(),
        );
        composer.compose(&body, &footer)
    }

    /// The plain-text version: body text, a blank line, then footer text.
    #[must_use]
    pub fn render_text(&self, spec: &EmailSpec) -> String {
        let themes = self.themes(spec);
        let alignment = themes.resolve(spec.theme.as_deref(), Aspect::EmailFooterAlignment);
        let body = render_content(&spec.content, &self.diagnostics);
        let footer = render_footer(spec, alignment, self.clock.current_year());
        format!("{}\n\n{}", html_to_text(&body), html_to_text(&footer))
    }

    /// Both halves, reading the clock once.
    #[must_use]
    pub fn render(&self, spec: &EmailSpec) -> RenderedEmail {
        let year = self.clock.current_year();
        let themes = self.themes(spec);
        let composer = Composer::new(spec, &themes);
        let body = render_content(&spec.content, &self.diagnostics);
        let footer = render_footer(spec, composer.aspect(Aspect::EmailFooterAlignment), year);

        RenderedEmail {
            text: format!("{}\n\n{}", html_to_text(&body), html_to_text(&footer)),
            html: composer.compose(&body, &footer),
        }
    }

    /// Build the theme catalog for this spec's brand, reporting an unknown
    /// theme name once per render.
    fn themes(&self, spec: &EmailSpec) -> ThemeRegistry {
        let themes = ThemeRegistry::builtin(&spec.brand_color.palette());
        if let Some(name) = spec.theme.as_deref().filter(|name| !themes.contains(name)) {
            self.diagnostics.emit(Diagnostic::UnknownTheme {
                name: name.to_string(),
                fallback: DEFAULT_THEME,
            });
        }
        themes
    }
}

/// Render HTML with the system clock, logging diagnostics via `tracing`.
#[must_use]
pub fn render_html(spec: &EmailSpec) -> String {
    Renderer::new().render_html(spec)
}

/// Render plain text with the system clock, logging diagnostics via
/// `tracing`.
#[must_use]
pub fn render_text(spec: &EmailSpec) -> String {
    Renderer::new().render_text(spec)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::content::Content;
    use crate::diagnostics::CollectingDiagnostics;
    use crate::request::{EmailRequest, normalize};
    use crate::samples;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn renderer() -> Renderer<FixedClock, CollectingDiagnostics> {
        Renderer::new()
            .with_clock(FixedClock(2026))
            .with_diagnostics(CollectingDiagnostics::new())
    }

    fn spec(value: serde_json::Value) -> EmailSpec {
        normalize(serde_json::from_value::<EmailRequest>(value).unwrap())
    }

    #[test]
    fn hello_acme() {
        let s = spec(json!({"content": "Hello", "name": "Acme"}));
        let text = renderer().render_text(&s);
        assert!(text.contains("Hello"));
        assert!(text.contains("Acme"));
        assert!(text.contains("2026"));
        assert!(!text.contains("undefined"));
        assert_eq!(text, "Hello\n\n\u{a9} 2026 Acme. All rights reserved.");
    }

    #[test]
    fn deterministic_with_fixed_clock() {
        let s = spec(json!({"content": "Hi", "name": "Acme", "theme": "modern"}));
        let r = renderer();
        assert_eq!(r.render(&s), r.render(&s));
        assert_eq!(r.render_html(&s), r.render_html(&s));
    }

    #[test]
    fn render_matches_separate_calls() {
        let s = spec(json!({"content": ["a", {"type": "button"}], "showReferrer": true}));
        let r = renderer();
        let both = r.render(&s);
        assert_eq!(both.html, r.render_html(&s));
        assert_eq!(both.text, r.render_text(&s));
    }

    #[test]
    fn malformed_content_still_renders() {
        let r = renderer();
        for content in [json!(42), json!(true), json!([null, 1, {"type": "nope"}]), json!({})] {
            let s = spec(json!({ "content": content }));
            let out = r.render(&s);
            assert!(out.html.contains("</html>"));
            assert!(!out.text.contains("undefined"));
        }
        assert!(!r.diagnostics.is_empty());
    }

    #[test]
    fn missing_optionals_never_print_undefined() {
        let r = renderer();
        for content in [samples::minimal(), samples::basic(), samples::full()] {
            let s = EmailSpec {
                content,
                name: Some("Sendfern".into()),
                ..EmailSpec::default()
            };
            let text = r.render_text(&s);
            assert!(!text.is_empty());
            assert!(!text.contains("undefined"));
        }
    }

    #[test]
    fn full_sample_text() {
        let s = EmailSpec {
            content: samples::full(),
            name: Some("Sendfern".into()),
            ..EmailSpec::default()
        };
        let text = renderer().render_text(&s);
        assert!(text.contains("Example Button [https://example.com]"));
        assert!(text.contains(" * Item One\n * Item Two.\n * Item Three"));
        assert!(text.contains("my-magic-code"));
        assert!(text.contains("THIS IS A H1 HEADING"));
        assert!(text.ends_with("\u{a9} 2026 Sendfern. All rights reserved."));
    }

    #[test]
    fn ordered_list_html() {
        let s = spec(json!({"content": [{"type": "list", "ordered": true, "items": ["A", "B"]}]}));
        let html = renderer().render_html(&s);
        assert!(html.contains("<ol "));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn unknown_heading_level_html() {
        let s = spec(json!({"content": [{"type": "heading", "content": "X", "headingType": "h9"}]}));
        assert!(renderer().render_html(&s).contains("<h2>X</h2>"));
    }

    #[test]
    fn invalid_brand_color_renders_default() {
        let s = spec(json!({"brandColor": "not-a-color", "content": [{"type": "button"}]}));
        assert!(renderer().render_html(&s).contains("background-color: #3b82f6;"));
    }

    #[test]
    fn unknown_theme_is_reported_and_matches_default() {
        let r = renderer();
        let fallback = r.render_html(&spec(json!({"content": "x"})));
        assert!(r.diagnostics.is_empty());

        let unknown = r.render_html(&spec(json!({"content": "x", "theme": "fancy"})));
        assert_eq!(unknown, fallback);
        assert_eq!(
            r.diagnostics.take(),
            vec![Diagnostic::UnknownTheme {
                name: "fancy".into(),
                fallback: "basic",
            }]
        );
    }

    #[test]
    fn default_alias_is_not_reported() {
        let r = renderer();
        let _ = r.render_html(&spec(json!({"theme": "default"})));
        assert!(r.diagnostics.is_empty());
    }

    #[test]
    fn empty_content_text() {
        let s = EmailSpec {
            content: Content::default(),
            ..EmailSpec::default()
        };
        assert_eq!(renderer().render_text(&s), "\n\n\u{a9} 2026. All rights reserved.");
    }

    #[test]
    fn free_functions_render() {
        let s = EmailSpec::default();
        assert!(render_html(&s).contains("<html"));
        assert!(render_text(&s).contains("All rights reserved."));
    }
}
