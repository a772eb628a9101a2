//! HTML to plain text, for the text/plain half of an email.
//!
//! Not a general-purpose converter. It understands the markup the block
//! renderer and footer produce (paragraphs, tables, headings, lists, `pre`,
//! links and images) and flattens everything else to its text.

use scraper::{ElementRef, Html, Node};

/// Convert an HTML fragment to readable plain text.
///
/// - block elements (`p`, `div`, table cells, ...) become paragraphs
///   separated by a blank line, with whitespace collapsed
/// - headings are uppercased
/// - list items become ` * item` or ` 1. item`
/// - `pre` content is kept verbatim
/// - links become `text [href]` unless the href is `#`, empty, or the text
/// - images become `[alt]`
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut writer = TextWriter::default();
    writer.walk(fragment.root_element());
    writer.finish()
}

#[derive(Default)]
struct TextWriter {
    blocks: Vec<String>,
    line: String,
    pending_space: bool,
}

impl TextWriter {
    fn walk(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => self.push_text(text),
                Node::Element(_) => {
                    if let Some(el) = ElementRef::wrap(child) {
                        self.element(el);
                    }
                }
                _ => {}
            }
        }
    }

    fn element(&mut self, el: ElementRef<'_>) {
        match el.value().name() {
            "head" | "title" | "style" | "script" => {}
            "br" => {
                self.line.push('\n');
                self.pending_space = false;
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush();
                self.push_block(inline_text(el).to_uppercase());
            }
            "ul" => self.list(el, false),
            "ol" => self.list(el, true),
            "pre" => {
                self.flush();
                let raw: String = el.text().collect();
                self.push_block(raw.trim_matches('\n').to_string());
            }
            "a" => self.anchor(el),
            "img" => {
                if let Some(alt) = el.value().attr("alt").map(str::trim).filter(|a| !a.is_empty()) {
                    self.push_word(&format!("[{alt}]"));
                }
            }
            "p" | "div" | "table" | "tbody" | "thead" | "tfoot" | "tr" | "td" | "th" | "li"
            | "blockquote" => {
                self.flush();
                self.walk(el);
                self.flush();
            }
            _ => self.walk(el),
        }
    }

    fn anchor(&mut self, el: ElementRef<'_>) {
        self.walk(el);
        let href = el.value().attr("href").map_or("", str::trim);
        if href.is_empty() || href == "#" || href == inline_text(el) {
            return;
        }
        self.push_word(&format!("[{href}]"));
    }

    fn list(&mut self, el: ElementRef<'_>, ordered: bool) {
        self.flush();
        let items: Vec<String> = el
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "li")
            .enumerate()
            .map(|(i, li)| {
                let text = inline_text(li);
                if ordered {
                    format!(" {}. {text}", i + 1)
                } else {
                    format!(" * {text}")
                }
            })
            .collect();
        if !items.is_empty() {
            self.blocks.push(items.join("\n"));
        }
    }

    /// Append inline text, collapsing runs of whitespace to one space.
    fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                self.pending_space = true;
                continue;
            }
            if self.pending_space && !self.line.is_empty() && !self.line.ends_with('\n') {
                self.line.push(' ');
            }
            self.pending_space = false;
            self.line.push(ch);
        }
    }

    /// Append a word separated from what precedes it.
    fn push_word(&mut self, word: &str) {
        self.pending_space = true;
        self.push_text(word);
    }

    fn push_block(&mut self, block: String) {
        if !block.trim().is_empty() {
            self.blocks.push(block);
        }
    }

    fn flush(&mut self) {
        let line = std::mem::take(&mut self.line);
        self.pending_space = false;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            self.blocks.push(trimmed.to_string());
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        self.blocks.join("\n\n")
    }
}

/// Text of `el` on one line.
fn inline_text(el: ElementRef<'_>) -> String {
    let mut writer = TextWriter::default();
    writer.walk(el);
    writer.finish().split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
