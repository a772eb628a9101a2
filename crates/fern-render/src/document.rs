//! Document composer: wraps rendered body and footer in the full HTML email.
//!
//! Every themed value goes through [`ThemeRegistry::resolve`], so a missing
//! theme or aspect degrades to an empty fragment instead of failing.

use fern_theme::{Aspect, ThemeRegistry};

use crate::request::EmailSpec;

/// Lays out the HTML shell for one request against a theme registry.
pub struct Composer<'a> {
    spec: &'a EmailSpec,
    themes: &'a ThemeRegistry,
}

impl<'a> Composer<'a> {
    #[must_use]
    pub const fn new(spec: &'a EmailSpec, themes: &'a ThemeRegistry) -> Self {
        Self { spec, themes }
    }

    /// Resolve one aspect for the request's theme.
    #[must_use]
    pub fn aspect(&self, aspect: Aspect) -> &'a str {
        self.themes.resolve(self.spec.theme.as_deref(), aspect)
    }

    /// Assemble the complete document around already-rendered fragments.
    #[must_use]
    pub fn compose(&self, body: &str, footer: &str) -> String {
        let style = self.stylesheet();
        let preheader = self
            .spec
            .preview
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!(r#"<span class="preheader">{p}</span>"#))
            .unwrap_or_default();
        let masthead = self.masthead();
        let width = self.aspect(Aspect::ContentWidth);
        let top_bar = self.aspect(Aspect::TopBar);
        let alignment = self.aspect(Aspect::EmailFooterAlignment);

        format!(
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
  <head>
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <meta name="x-apple-disable-message-reformatting" />
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
    <meta name="color-scheme" content="light dark" />
    <meta name="supported-color-schemes" content="light dark" />
    <title></title>
    <style type="text/css" rel="stylesheet" media="all">
{style}
    </style>
    <!--[if mso]>
      <style type="text/css">
        .f-fallback {{
          font-family: Arial, sans-serif;
        }}
      </style>
    <![endif]-->
  </head>
  <body>
    {preheader}
    <table class="email-wrapper" width="100%" cellpadding="0" cellspacing="0" role="presentation">
      <tr>
        <td align="center" style="padding: 0 10px">
          <table class="email-content" width="100%" cellpadding="0" cellspacing="0" role="presentation">
{masthead}
            <!-- Email Body -->
            <tr>
              <td class="email-body" width="{width}" cellpadding="0" cellspacing="0">
                <table class="email-body_inner" align="center" width="{width}" cellpadding="0" cellspacing="0" role="presentation">
                  <!-- Body content -->
                  <tr>
                    <td class="body-content">
{top_bar}
                      <div class="f-fallback content-cell">
{body}
                      </div>
                    </td>
                  </tr>
                </table>
              </td>
            </tr>
            <tr>
              <td>
                <table class="email-footer" align="center" width="{width}" cellpadding="0" cellspacing="0" role="presentation">
                  <tr>
                    <td class="content-cell" align="{alignment}">
{footer}
                    </td>
                  </tr>
                </table>
              </td>
            </tr>
          </table>
        </td>
      </tr>
    </table>
  </body>
</html>
"#
        )
    }

    /// Logo image (linked to the website when there is one), or else the
    /// sender name as a link or plain span.
    fn masthead(&self) -> String {
        let spec = self.spec;
        let name = spec.name.as_deref().unwrap_or_default();
        let website = spec.website.as_deref().filter(|w| !w.is_empty());

        if let Some(logo) = spec.logo.as_deref().filter(|l| !l.is_empty()) {
            let img = format!(
                r#"<img height="auto" src="{logo}"
                          style="border:0;display:block;outline:none;text-decoration:none;height:auto;width:100%;font-size:13px;"
                          width="100" alt="{name}" />"#
            );
            let inner = match website {
                Some(site) => format!(
                    r#"<a href="{site}" target="_blank" class="f-fallback email-masthead_name">
                          {img}
                        </a>"#
                ),
                None => img,
            };
            format!(
                r#"            <tr>
              <td align="center" style="font-size:0px;padding:20px 0;word-break:break-word;">
                <table border="0" cellpadding="0" cellspacing="0" role="presentation" style="border-collapse:collapse;border-spacing:0px;">
                  <tbody>
                    <tr>
                      <td style="width:{width}px;">
                        {inner}
                      </td>
                    </tr>
                  </tbody>
                </table>
              </td>
            </tr>"#,
                width = spec.logo_width,
            )
        } else {
            let inner = match website {
                Some(site) => format!(
                    r#"<a href="{site}" target="_blank" class="f-fallback email-masthead_name">{name}</a>"#
                ),
                None => format!(r#"<span class="f-fallback email-masthead_name">{name}</span>"#),
            };
            format!(
                r#"            <tr>
              <td class="email-masthead">
                {inner}
              </td>
            </tr>"#
            )
        }
    }

    /// The embedded stylesheet.
    fn stylesheet(&self) -> String {
        let a = |aspect| self.aspect(aspect);
        let width = a(Aspect::ContentWidth);
        let background = a(Aspect::EmailBackgroundColor);
        let footer_text = a(Aspect::FooterTextColor);

        let dark_mode = if self.spec.disable_dark_mode {
            String::new()
        } else {
            format!(
                "
@media (prefers-color-scheme: dark) {{
{dark}
}}
",
                dark = a(Aspect::DarkMode)
            )
        };

        format!(
            "\
/* Base ------------------------------ */

{font_import}
body {{
  width: 100% !important;
  height: 100%;
  margin: 0;
  -webkit-text-size-adjust: none;
}}

a {{
  color: {link};
}}

a img {{
  border: none;
}}

td {{
  word-break: break-word;
}}

.preheader {{
  display: none !important;
  visibility: hidden;
  mso-hide: all;
  font-size: 1px;
  line-height: 1px;
  max-height: 0;
  max-width: 0;
  opacity: 0;
  overflow: hidden;
}}

/* Type ------------------------------ */

body,
td,
th {{
  {font_family}
}}

{typography}

/* Utilities ------------------------------ */

.align-right {{
  text-align: right;
}}

.align-left {{
  text-align: left;
}}

.align-center {{
  text-align: center;
}}

/* Buttons ------------------------------ */

{button}

/* Data table ------------------------------ */

body {{
  background-color: {background};
  color: #51545e;
}}

p {{
  color: #51545e;
}}

.email-wrapper {{
  width: 100%;
  margin: 0;
  padding: 0;
  -premailer-width: 100%;
  -premailer-cellpadding: 0;
  -premailer-cellspacing: 0;
  background-color: {background};
}}

.email-content {{
  width: 100%;
  margin: 0;
  padding: 0;
  -premailer-width: 100%;
  -premailer-cellpadding: 0;
  -premailer-cellspacing: 0;
}}

/* Masthead ----------------------- */

{masthead}

/* Body ------------------------------ */

.email-body {{
  width: 100%;
  margin: 0;
  padding: 0;
  -premailer-width: 100%;
  -premailer-cellpadding: 0;
  -premailer-cellspacing: 0;
}}

.email-body_inner {{
  width: {width}px;
  margin: 0 auto;
  padding: 0;
  -premailer-width: {width}px;
  -premailer-cellpadding: 0;
  -premailer-cellspacing: 0;
  background-color: #ffffff;
}}

.email-footer {{
  width: {width}px;
  margin: 0 auto;
  padding: 0;
  -premailer-width: {width}px;
  -premailer-cellpadding: 0;
  -premailer-cellspacing: 0;
  text-align: {alignment};
}}

.email-footer p {{
  color: {footer_text};
}}

.email-footer .referrer {{
  color: {footer_text};
  text-decoration: none;
}}

{body_action}

{body_divider}

{body_spacer}

{body_content}

{body_image}

{body_list}

{content_cell}

/* Media Queries ------------------------------ */

@media only screen and (max-width: 600px) {{
  .email-body_inner,
  .email-footer {{
    width: 100% !important;
  }}
}}
{dark_mode}
:root {{
  color-scheme: light dark;
  supported-color-schemes: light dark;
}}",
            font_import = a(Aspect::FontImport),
            link = a(Aspect::LinkColor),
            font_family = a(Aspect::FontFamily),
            typography = a(Aspect::Typography),
            button = a(Aspect::Button),
            masthead = a(Aspect::Masthead),
            alignment = a(Aspect::EmailFooterAlignment),
            body_action = a(Aspect::BodyAction),
            body_divider = a(Aspect::BodyDivider),
            body_spacer = a(Aspect::BodySpacer),
            body_content = a(Aspect::BodyContent),
            body_image = a(Aspect::BodyImage),
            body_list = a(Aspect::BodyList),
            content_cell = a(Aspect::ContentCell),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
