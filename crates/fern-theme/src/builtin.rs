//! Named preset themes: ready-to-use configurations.
//!
//! Each preset is a specific combination of spacing, type scale, colors and
//! dark-mode treatment. Brand-dependent slots read from the supplied
//! [`BrandPalette`]; everything else is static per theme.
//!
//! Every builtin fills every [`Aspect`], using an empty fragment where the
//! theme wants nothing (e.g. `topBar` outside `modern`).

use crate::aspect::Aspect;
use crate::css;
use crate::palette::BrandPalette;
use crate::theme::Theme;

/// Theme used when a request names no theme, or one we don't know.
pub const DEFAULT_THEME: &str = "basic";

/// Alias accepted for [`DEFAULT_THEME`].
pub const DEFAULT_ALIAS: &str = "default";

/// Muted gray for masthead names and footer text on white pages.
const MUTED: &str = "#a8aaaf";

/// Look up a builtin theme by name, rendered against `palette`.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str, palette: &BrandPalette) -> Option<Theme> {
    Some(match name {
        "modern" => modern(palette),
        DEFAULT_ALIAS | "basic" => basic(palette),
        "minimal" => minimal(palette),
        "plain" => plain(palette),
        _ => return None,
    })
}

/// List all builtin theme names (the alias excluded).
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["modern", "basic", "minimal", "plain"]
}

/// Roboto, brand-colored top bar and masthead, tinted page background.
fn modern(p: &BrandPalette) -> Theme {
    Theme::new("modern")
        .with(Aspect::TopBar, css::top_bar(&p.brand))
        .with(Aspect::Masthead, css::masthead(&p.brand))
        .with(Aspect::BodyContent, "")
        .with(Aspect::BodyDivider, css::divider(25, 16, "#eaeaec"))
        .with(Aspect::BodySpacer, css::spacer(25))
        .with(Aspect::BodyImage, css::body_image(30))
        .with(Aspect::BodyList, css::body_list(30))
        .with(Aspect::BodyAction, css::body_action(30))
        .with(Aspect::ContentCell, css::content_cell(45))
        .with(Aspect::EmailBackgroundColor, p.tint.as_str())
        .with(Aspect::FooterTextColor, p.footer_on_tint)
        .with(Aspect::LinkColor, p.link.as_str())
        .with(Aspect::Button, css::button(&p.brand, p.button_text, false))
        .with(Aspect::FontImport, css::font_import("Roboto"))
        .with(Aspect::FontFamily, css::font_family("Roboto"))
        .with(Aspect::ContentWidth, "570")
        .with(Aspect::Typography, css::typography(16, "1.625"))
        .with(Aspect::EmailFooterAlignment, "center")
        .with(Aspect::DarkMode, css::dark_mode_card())
}

/// Inter on a light gray page with a white card and rounded buttons.
fn basic(p: &BrandPalette) -> Theme {
    Theme::new("basic")
        .with(Aspect::TopBar, "")
        .with(Aspect::Masthead, css::masthead(MUTED))
        .with(Aspect::BodyContent, "")
        .with(Aspect::BodyDivider, css::divider(25, 16, "#eaeaec"))
        .with(Aspect::BodySpacer, css::spacer(25))
        .with(Aspect::BodyImage, css::body_image(30))
        .with(Aspect::BodyList, css::body_list(30))
        .with(Aspect::BodyAction, css::body_action(30))
        .with(Aspect::ContentCell, css::content_cell(45))
        .with(Aspect::EmailBackgroundColor, "#f2f4f6")
        .with(Aspect::FooterTextColor, MUTED)
        .with(Aspect::LinkColor, p.link.as_str())
        .with(Aspect::Button, css::button(&p.brand, p.button_text, true))
        .with(Aspect::FontImport, css::font_import("Inter"))
        .with(Aspect::FontFamily, css::font_family("Inter"))
        .with(Aspect::ContentWidth, "570")
        .with(Aspect::Typography, css::typography(16, "1.625"))
        .with(Aspect::EmailFooterAlignment, "center")
        .with(Aspect::DarkMode, css::dark_mode_card())
}

/// Narrow bordered card on white, tighter spacing.
fn minimal(p: &BrandPalette) -> Theme {
    Theme::new("minimal")
        .with(Aspect::TopBar, "")
        .with(Aspect::Masthead, css::masthead(MUTED))
        .with(Aspect::BodyContent, css::BODY_CONTENT_BORDER)
        .with(Aspect::BodyDivider, css::divider(16, 7, "#dfe3e8"))
        .with(Aspect::BodySpacer, css::spacer(16))
        .with(Aspect::BodyImage, css::body_image(16))
        .with(Aspect::BodyList, css::body_list(16))
        .with(Aspect::BodyAction, css::body_action(16))
        .with(Aspect::ContentCell, css::content_cell(24))
        .with(Aspect::EmailBackgroundColor, "#ffffff")
        .with(Aspect::FooterTextColor, MUTED)
        .with(Aspect::LinkColor, p.link.as_str())
        .with(Aspect::Button, css::button(&p.brand, p.button_text, false))
        .with(Aspect::FontImport, css::font_import("Inter"))
        .with(Aspect::FontFamily, css::font_family("Inter"))
        .with(Aspect::ContentWidth, "470")
        .with(Aspect::Typography, css::typography(15, "20px"))
        .with(Aspect::EmailFooterAlignment, "center")
        .with(Aspect::DarkMode, css::dark_mode_flat(true))
}

/// Letter-style: no card padding, left-aligned footer.
fn plain(p: &BrandPalette) -> Theme {
    Theme::new("plain")
        .with(Aspect::TopBar, "")
        .with(Aspect::Masthead, css::masthead(MUTED))
        .with(Aspect::BodyContent, "")
        .with(Aspect::BodyDivider, css::divider(16, 7, "#dfe3e8"))
        .with(Aspect::BodySpacer, css::spacer(16))
        .with(Aspect::BodyImage, css::body_image(16))
        .with(Aspect::BodyList, css::body_list(16))
        .with(Aspect::BodyAction, css::body_action(16))
        .with(Aspect::ContentCell, "")
        .with(Aspect::EmailBackgroundColor, "#ffffff")
        .with(Aspect::FooterTextColor, MUTED)
        .with(Aspect::LinkColor, p.link.as_str())
        .with(Aspect::Button, css::button(&p.brand, p.button_text, false))
        .with(Aspect::FontImport, css::font_import("Inter"))
        .with(Aspect::FontFamily, css::font_family("Inter"))
        .with(Aspect::ContentWidth, "470")
        .with(Aspect::Typography, css::typography(15, "20px"))
        .with(Aspect::EmailFooterAlignment, "left")
        .with(Aspect::DarkMode, css::dark_mode_flat(false))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn palette() -> BrandPalette {
        BrandPalette::default()
    }

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            let theme = builtin_theme(name, &palette());
            assert!(theme.is_some(), "Builtin '{name}' failed to build");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_theme("nonexistent", &palette()).is_none());
    }

    #[test]
    fn default_list_contains_default_theme() {
        assert!(builtin_names().contains(&DEFAULT_THEME));
    }

    #[test]
    fn default_alias_is_basic() {
        let a = builtin_theme(DEFAULT_ALIAS, &palette()).unwrap();
        let b = builtin_theme("basic", &palette()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn builtins_define_every_aspect() {
        for name in builtin_names() {
            let theme = builtin_theme(name, &palette()).unwrap();
            for aspect in Aspect::ALL {
                assert!(theme.defines(aspect), "'{name}' is missing {aspect}");
            }
        }
    }

    #[test]
    fn theme_names_match_lookup() {
        for name in builtin_names() {
            assert_eq!(builtin_theme(name, &palette()).unwrap().name(), *name);
        }
    }

    #[test]
    fn modern_is_brand_tinted() {
        let p = BrandPalette::from_hex("#10b981");
        let t = builtin_theme("modern", &p).unwrap();
        assert!(t.get(Aspect::TopBar).unwrap().contains("bgcolor=\"#10b981\""));
        assert!(t.get(Aspect::Masthead).unwrap().contains("color: #10b981;"));
        assert_eq!(t.get(Aspect::EmailBackgroundColor), Some(p.tint.as_str()));
    }

    #[test]
    fn brand_only_touches_brand_aspects() {
        let blue = builtin_theme("basic", &BrandPalette::from_hex("#3b82f6")).unwrap();
        let red = builtin_theme("basic", &BrandPalette::from_hex("#ef4444")).unwrap();
        for aspect in Aspect::ALL {
            let brand_dependent = matches!(aspect, Aspect::Button | Aspect::LinkColor);
            assert_eq!(
                blue.get(aspect) != red.get(aspect),
                brand_dependent,
                "unexpected brand sensitivity for {aspect}"
            );
        }
    }

    #[test]
    fn widths_and_alignment() {
        let p = palette();
        let width = |n| builtin_theme(n, &p).unwrap().get(Aspect::ContentWidth).map(str::to_owned);
        assert_eq!(width("modern").as_deref(), Some("570"));
        assert_eq!(width("basic").as_deref(), Some("570"));
        assert_eq!(width("minimal").as_deref(), Some("470"));
        assert_eq!(width("plain").as_deref(), Some("470"));

        let plain = builtin_theme("plain", &p).unwrap();
        assert_eq!(plain.get(Aspect::EmailFooterAlignment), Some("left"));
        assert_eq!(plain.get(Aspect::ContentCell), Some(""));
    }

    #[test]
    fn only_basic_rounds_buttons() {
        let p = palette();
        for name in builtin_names() {
            let button = builtin_theme(name, &p).unwrap().get(Aspect::Button).unwrap().to_owned();
            assert_eq!(button.contains("border-radius"), *name == "basic", "{name}");
        }
    }
}
