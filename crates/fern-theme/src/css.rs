//! CSS fragment builders shared by the builtin themes.
//!
//! Themes differ mostly in spacing, type scale and a handful of colors, so
//! the rule bodies live here once and each theme supplies its numbers.
//! Fragments carry no leading or trailing newline; the composer lays them
//! out.

/// Masthead rules. `name_color` is the brand name / link color.
#[must_use]
pub fn masthead(name_color: &str) -> String {
    format!(
        "\
.email-masthead {{
  padding: 25px 0;
  text-align: center;
}}

.email-masthead_name {{
  font-size: 16px;
  font-weight: bold;
  color: {name_color};
  text-decoration: none;
  text-shadow: 0 1px 0 white;
}}"
    )
}

/// A thin brand-colored bar drawn above the body content.
#[must_use]
pub fn top_bar(brand: &str) -> String {
    format!(
        r#"<table cellpadding="0" cellspacing="0" border="0" style="border:none;border-collapse:separate;font-size:1px;height:2px;line-height:3px;width:100%">
  <tbody>
    <tr>
      <td valign="top" style="background-color:{brand};border:none;width:100%" bgcolor="{brand}"></td>
    </tr>
  </tbody>
</table>"#
    )
}

/// Border drawn around the body content card.
pub const BODY_CONTENT_BORDER: &str = "\
.body-content {
  border: 1px solid #dfe3e8;
}";

/// Divider rule above a `divider` block.
#[must_use]
pub fn divider(margin_top: u32, padding_top: u32, border: &str) -> String {
    format!(
        "\
.body-divider {{
  margin-top: {margin_top}px;
  padding-top: {padding_top}px;
  border-top: 1px solid {border};
  width: 100%;
}}"
    )
}

/// Vertical gap inserted by a `spacer` block.
#[must_use]
pub fn spacer(margin_top: u32) -> String {
    format!(
        "\
.body-spacer {{
  margin-top: {margin_top}px;
  width: 100%;
}}"
    )
}

/// Centered image container.
#[must_use]
pub fn body_image(margin: u32) -> String {
    boxed("body-image", margin, "center", false)
}

/// Left-aligned list container.
#[must_use]
pub fn body_list(margin: u32) -> String {
    boxed("body-list", margin, "left", false)
}

/// Full-width, centered button container.
#[must_use]
pub fn body_action(margin: u32) -> String {
    boxed("body-action", margin, "center", true)
}

fn boxed(class: &str, margin: u32, align: &str, full_width: bool) -> String {
    let width = if full_width { "\n  width: 100%;" } else { "" };
    format!(
        "\
.{class} {{{width}
  margin: {margin}px auto;
  padding: 0;
  -premailer-width: 100%;
  -premailer-cellpadding: 0;
  -premailer-cellspacing: 0;
  text-align: {align};
}}"
    )
}

/// Padding inside the body and footer cells.
#[must_use]
pub fn content_cell(padding: u32) -> String {
    format!(
        "\
.content-cell {{
  padding: {padding}px;
}}"
    )
}

/// Call-to-action button, filled with the brand color.
#[must_use]
pub fn button(brand: &str, label_color: &str, rounded: bool) -> String {
    let radius = if rounded {
        "\n  border-radius: 0.375rem;"
    } else {
        ""
    };
    format!(
        "\
.button {{
  background-color: {brand};
  border-top: 10px solid {brand};
  border-right: 18px solid {brand};
  border-bottom: 10px solid {brand};
  border-left: 18px solid {brand};
  display: inline-block;
  color: {label_color} !important;
  text-decoration: none;{radius}
  -webkit-text-size-adjust: none;
  box-sizing: border-box;
}}

@media only screen and (max-width: 500px) {{
  .button {{
    width: 100% !important;
    text-align: center !important;
  }}
}}"
    )
}

/// Web font `@import` for a Google Fonts family.
#[must_use]
pub fn font_import(family: &str) -> String {
    format!(
        "@import url('https://fonts.googleapis.com/css?family={family}:400,700&display=swap');"
    )
}

/// `font-family` declaration with email-safe fallbacks.
#[must_use]
pub fn font_family(family: &str) -> String {
    format!("font-family: '{family}', Helvetica, Arial, sans-serif;")
}

/// Headings, code, lists and paragraph rhythm.
///
/// `body_size` is the paragraph/cell font size in pixels; `line_height` is
/// a raw CSS value (`1.625`, `20px`).
#[must_use]
pub fn typography(body_size: u32, line_height: &str) -> String {
    format!(
        "\
h1 {{
  margin-top: 0;
  color: #333333;
  font-size: 22px;
  font-weight: bold;
  text-align: left;
}}

h2 {{
  margin-top: 0;
  color: #333333;
  font-size: 16px;
  font-weight: bold;
  text-align: left;
}}

h3 {{
  margin-top: 0;
  color: #333333;
  font-size: 14px;
  font-weight: bold;
  text-align: left;
}}

td,
th {{
  font-size: {body_size}px;
}}

pre {{
  padding: 16px 24px;
  border: 1px solid #EEEEEE;
  background-color: #F4F4F4;
  border-radius: 3px;
  font-family: monospace;
  margin: 0.4em 0 1.1875em;
}}

li {{
  margin: 0 0 0.4em;
}}

p,
ul,
ol,
blockquote {{
  margin: 0.4em 0 1.1875em;
  font-size: {body_size}px;
  line-height: {line_height};
}}

p.sub {{
  font-size: 13px;
}}"
    )
}

/// Text recoloring shared by every dark-mode variant.
const DARK_MODE_TEXT: &str = "\
p,
a,
ul,
ol,
li,
blockquote,
h1,
h2,
h3,
span,
.email-masthead_name {
  text-shadow: none !important;
  color: #D5D5D5 !important;
}";

/// Dark mode with a lighter body card on a dark page.
#[must_use]
pub fn dark_mode_card() -> String {
    format!(
        "\
body,
.email-body,
.email-content,
.email-wrapper,
.email-masthead,
.email-footer {{
  background-color: #202020 !important;
  color: #fff !important;
}}
.email-body_inner {{
  background-color: #333333 !important;
}}
{DARK_MODE_TEXT}"
    )
}

/// Dark mode where the body card blends into the page, optionally keeping
/// a subtle border around the content.
#[must_use]
pub fn dark_mode_flat(bordered: bool) -> String {
    let border = if bordered {
        "\n.body-content {\n  border: 1px solid #333333;\n}"
    } else {
        ""
    };
    format!(
        "\
body,
.email-body,
.email-body_inner,
.email-content,
.email-wrapper,
.email-masthead,
.email-footer {{
  background-color: #202020 !important;
  color: #fff !important;
}}{border}
{DARK_MODE_TEXT}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced(css: &str) -> bool {
        css.matches('{').count() == css.matches('}').count()
    }

    #[test]
    fn fragments_have_balanced_braces() {
        let all = [
            masthead("#a8aaaf"),
            BODY_CONTENT_BORDER.to_string(),
            divider(25, 16, "#eaeaec"),
            spacer(25),
            body_image(30),
            body_list(30),
            body_action(30),
            content_cell(45),
            button("#3b82f6", "#FFF", true),
            typography(16, "1.625"),
            dark_mode_card(),
            dark_mode_flat(true),
            dark_mode_flat(false),
        ];
        for css in &all {
            assert!(balanced(css), "unbalanced fragment:\n{css}");
        }
    }

    #[test]
    fn button_radius_is_optional() {
        assert!(button("#000000", "#FFF", true).contains("border-radius: 0.375rem;"));
        assert!(!button("#000000", "#FFF", false).contains("border-radius"));
    }

    #[test]
    fn button_uses_brand_and_label_color() {
        let css = button("#3b82f6", "#FFF", false);
        assert!(css.contains("background-color: #3b82f6;"));
        assert!(css.contains("border-left: 18px solid #3b82f6;"));
        assert!(css.contains("color: #FFF !important;"));
    }

    #[test]
    fn action_box_is_full_width() {
        assert!(body_action(16).starts_with(".body-action {\n  width: 100%;\n  margin: 16px auto;"));
        assert!(body_image(16).starts_with(".body-image {\n  margin: 16px auto;"));
    }

    #[test]
    fn fragments_have_no_outer_newlines() {
        for css in [masthead("#fff"), typography(15, "20px"), dark_mode_flat(true)] {
            assert!(!css.starts_with('\n') && !css.ends_with('\n'));
        }
    }

    #[test]
    fn font_helpers() {
        assert_eq!(
            font_family("Inter"),
            "font-family: 'Inter', Helvetica, Arial, sans-serif;"
        );
        assert!(font_import("Roboto").contains("family=Roboto:400,700"));
    }
}
