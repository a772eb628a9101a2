//! Block renderer: one content block in, one HTML fragment out.
//!
//! Field values are interpolated verbatim. Only an image's `alt` text is
//! escaped; labels, list items, code and paragraph text may carry markup on
//! purpose.

use crate::content::{
    ButtonBlock, CodeBlock, Content, ContentBlock, Entry, HeadingBlock, ImageBlock, ListBlock,
    TextBlock,
};
use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Button label when the block has none.
pub const DEFAULT_BUTTON_LABEL: &str = "Learn More";

/// Link target for buttons and unsubscribe links that have none.
pub const PLACEHOLDER_LINK: &str = "#";

/// Render all of `content` to body HTML, reporting anything skipped.
pub fn render_content(content: &Content, diagnostics: &impl DiagnosticSink) -> String {
    match content {
        Content::Text(text) => paragraph(text, false),
        Content::Blocks(entries) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Entry::Block(block) => render_block(block),
                Entry::Malformed { reason } => {
                    diagnostics.emit(Diagnostic::MalformedBlock {
                        index,
                        reason: reason.clone(),
                    });
                    String::new()
                }
            })
            .collect(),
        Content::Unsupported(kind) => {
            diagnostics.emit(Diagnostic::UnsupportedContent { kind: *kind });
            String::new()
        }
    }
}

/// Render one block.
#[must_use]
pub fn render_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Text(TextBlock { content, subdued }) => paragraph(content, *subdued),
        ContentBlock::Button(button) => render_button(button),
        ContentBlock::Image(image) => render_image(image),
        ContentBlock::Divider {} => empty_table("body-divider"),
        ContentBlock::Spacer {} => empty_table("body-spacer"),
        ContentBlock::Code(CodeBlock { content }) => format!("\n<pre>{content}</pre>\n"),
        ContentBlock::Heading(HeadingBlock { content, level }) => format!("<{level}>{content}</{level}>"),
        ContentBlock::List(list) => render_list(list),
    }
}

fn paragraph(content: &str, subdued: bool) -> String {
    let class = if subdued { "f-fallback sub" } else { "f-fallback" };
    format!(
        r#"
<p class="{class}">
  {content}
</p>
"#
    )
}

fn render_button(button: &ButtonBlock) -> String {
    let link = button.link.as_deref().filter(|l| !l.is_empty()).unwrap_or(PLACEHOLDER_LINK);
    let label = button
        .label
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_BUTTON_LABEL);
    format!(
        r#"
<table class="body-action" align="center" width="100%" cellpadding="0" cellspacing="0" role="presentation">
  <tr>
    <td align="center">
      <table width="100%" border="0" cellspacing="0" cellpadding="0" role="presentation">
        <tr>
          <td>
            <a href="{link}" class="f-fallback button" target="_blank">{label}</a>
          </td>
        </tr>
      </table>
    </td>
  </tr>
</table>
"#
    )
}

fn render_image(image: &ImageBlock) -> String {
    let width = image
        .width
        .filter(|w| *w > 0)
        .map_or_else(|| "100%".to_string(), |w| format!("{w}px"));
    let alt = image
        .alt
        .as_deref()
        .filter(|a| !a.is_empty())
        .map(|a| format!(r#" alt="{}""#, html_escape::encode_quoted_attribute(a)))
        .unwrap_or_default();
    let img = format!(
        r#"<img height="auto" src="{source}"
        style="border:0;display:block;outline:none;text-decoration:none;height:auto;width:100%;font-size:13px;"
        width="100"{alt} />"#,
        source = image.source,
    );
    let inner = match image.link.as_deref().filter(|l| !l.is_empty()) {
        Some(link) => format!(
            r#"<a href="{link}" target="_blank" class="f-fallback">
        {img}
      </a>"#
        ),
        None => img,
    };
    format!(
        r#"
<table class="body-image" align="center" border="0" cellpadding="0" cellspacing="0" role="presentation" style="border-collapse:collapse;border-spacing:0px;">
  <tr>
    <td style="width:{width};">
      {inner}
    </td>
  </tr>
</table>
"#
    )
}

fn empty_table(class: &str) -> String {
    format!(
        r#"
<table class="{class}" role="presentation">
  <tr>
    <td>
    </td>
  </tr>
</table>
"#
    )
}

fn render_list(list: &ListBlock) -> String {
    let (tag, marker) = if list.ordered { ("ol", "1") } else { ("ul", "disc") };
    let items: String = list.items.iter().map(|item| format!("<li>{item}</li>")).collect();
    format!(
        r#"
<table class="body-list" role="presentation">
  <tr>
    <td>
      <{tag} style="margin:0; margin-left: 25px; padding:0;" align="left" type="{marker}">
        {items}
      </{tag}>
    </td>
  </tr>
</table>
"#
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
