//! Content model: the typed blocks that make up an email body.
//!
//! Deserialization is deliberately forgiving. A request's `content` may be a
//! bare string, one block object, or a list mixing strings and blocks; any
//! entry that fails to parse is kept as [`Entry::Malformed`] so the renderer
//! can report it and move on.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// One unit of body content, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text(TextBlock),
    Button(ButtonBlock),
    Image(ImageBlock),
    Divider {},
    Spacer {},
    Code(CodeBlock),
    Heading(HeadingBlock),
    List(ListBlock),
}

impl ContentBlock {
    /// A plain paragraph.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(TextBlock {
            content: content.into(),
            subdued: false,
        })
    }

    /// The `type` discriminator.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Button(_) => "button",
            Self::Image(_) => "image",
            Self::Divider {} => "divider",
            Self::Spacer {} => "spacer",
            Self::Code(_) => "code",
            Self::Heading(_) => "heading",
            Self::List(_) => "list",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    #[serde(deserialize_with = "lenient::string")]
    pub content: String,
    /// Smaller, muted paragraph.
    #[serde(deserialize_with = "lenient::flag")]
    pub subdued: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonBlock {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageBlock {
    #[serde(deserialize_with = "lenient::string")]
    pub source: String,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub link: Option<String>,
    /// Container width in pixels; full width when absent.
    #[serde(deserialize_with = "lenient::width")]
    pub width: Option<u32>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodeBlock {
    #[serde(deserialize_with = "lenient::string")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadingBlock {
    #[serde(deserialize_with = "lenient::string")]
    pub content: String,
    #[serde(rename = "headingType")]
    pub level: HeadingLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListBlock {
    #[serde(deserialize_with = "lenient::items")]
    pub items: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub ordered: bool,
}

/// Field deserializers that accept whatever JSON shows up.
///
/// `null` means absent, scalars are stringified where text is expected and
/// anything unusable falls back to the field's default. A block is only
/// malformed when its `type` is.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn scalar(value: Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Value::deserialize(deserializer).map(|value| scalar(value).unwrap_or_default())
    }

    pub fn optional_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Value::deserialize(deserializer).map(scalar)
    }

    /// Truthiness: `0`, `""`, `false` and `null` are off.
    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        })
    }

    /// A list of strings; scalar items are stringified, `null`s dropped.
    pub fn items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items.into_iter().filter_map(scalar).collect(),
            _ => Vec::new(),
        })
    }

    /// Pixels from a number or a numeric string. Zero and garbage mean
    /// full width.
    pub fn width<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        let value = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(text) => text.trim().trim_end_matches("px").parse::<f64>().ok(),
            _ => None,
        };
        Ok(value.and_then(pixels))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn pixels(px: f64) -> Option<u32> {
        (px.is_finite() && (1.0..=f64::from(u32::MAX)).contains(&px)).then(|| px.round() as u32)
    }
}

// ---------------------------------------------------------------------------
// Heading level
// ---------------------------------------------------------------------------

/// `h1` through `h6`. Anything unrecognized is treated as `h2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Parse a `hN` tag name, falling back to `h2`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "h1" => Self::H1,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "h5" => Self::H5,
            "h6" => Self::H6,
            _ => Self::H2,
        }
    }

    /// The HTML tag name.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for HeadingLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(tag) => Self::from_tag(&tag),
            _ => Self::default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// One item of a content list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Block(ContentBlock),
    /// An entry that is neither a string nor a well-formed block.
    Malformed { reason: String },
}

impl Entry {
    /// Interpret one JSON value as a content entry. Never fails.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Block(ContentBlock::text(text)),
            Value::Object(_) => match serde_json::from_value::<ContentBlock>(value) {
                Ok(block) => Self::Block(block),
                Err(err) => Self::Malformed {
                    reason: err.to_string(),
                },
            },
            other => Self::Malformed {
                reason: format!("expected a string or a block object, found {}", json_kind(&other)),
            },
        }
    }
}

impl From<ContentBlock> for Entry {
    fn from(block: ContentBlock) -> Self {
        Self::Block(block)
    }
}

/// The `content` field of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Shorthand for a single text block.
    Text(String),
    /// An ordered list of entries. A lone block object becomes a list of one.
    Blocks(Vec<Entry>),
    /// A JSON value that cannot hold content (number, boolean). Renders
    /// nothing.
    Unsupported(&'static str),
}

impl Content {
    /// Interpret a JSON value as content. Never fails.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::Blocks(items.into_iter().map(Entry::from_value).collect()),
            Value::Object(_) => Self::Blocks(vec![Entry::from_value(value)]),
            other => Self::Unsupported(json_kind(&other)),
        }
    }

    /// Whether this content renders no blocks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Blocks(entries) => entries.is_empty(),
            Self::Unsupported(_) => true,
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<ContentBlock>> for Content {
    fn from(blocks: Vec<ContentBlock>) -> Self {
        Self::Blocks(blocks.into_iter().map(Entry::Block).collect())
    }
}

impl FromIterator<Entry> for Content {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::Blocks(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn bare_string_is_text() {
        assert_eq!(Content::from_value(json!("Hello")), Content::Text("Hello".into()));
    }

    #[test]
    fn null_is_empty_text() {
        assert_eq!(Content::from_value(Value::Null), Content::default());
        assert!(Content::default().is_empty());
    }

    #[test]
    fn single_object_becomes_list_of_one() {
        let content = Content::from_value(json!({"type": "divider"}));
        assert_eq!(content, Content::Blocks(vec![Entry::Block(ContentBlock::Divider {})]));
    }

    #[test]
    fn scalars_are_unsupported() {
        assert_eq!(Content::from_value(json!(42)), Content::Unsupported("a number"));
        assert_eq!(Content::from_value(json!(true)), Content::Unsupported("a boolean"));
    }

    #[test]
    fn mixed_list() {
        let content = Content::from_value(json!([
            "Intro",
            {"type": "button", "link": "https://example.com", "label": "Go"},
            {"type": "text", "content": "Fine print", "subdued": true},
        ]));
        let Content::Blocks(entries) = content else {
            panic!("expected blocks");
        };
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], Entry::Block(ContentBlock::text("Intro")));
        assert_eq!(
            entries[1],
            Entry::Block(ContentBlock::Button(ButtonBlock {
                label: Some("Go".into()),
                link: Some("https://example.com".into()),
            }))
        );
        assert_eq!(
            entries[2],
            Entry::Block(ContentBlock::Text(TextBlock {
                content: "Fine print".into(),
                subdued: true,
            }))
        );
    }

    #[test]
    fn missing_fields_default() {
        let entry = Entry::from_value(json!({"type": "image"}));
        assert_eq!(entry, Entry::Block(ContentBlock::Image(ImageBlock::default())));

        let entry = Entry::from_value(json!({"type": "list"}));
        assert_eq!(entry, Entry::Block(ContentBlock::List(ListBlock::default())));
    }

    #[test]
    fn unknown_kind_is_malformed() {
        let entry = Entry::from_value(json!({"type": "carousel"}));
        let Entry::Malformed { reason } = entry else {
            panic!("expected malformed entry");
        };
        assert!(reason.contains("carousel"), "{reason}");
    }

    #[test]
    fn missing_type_is_malformed() {
        assert!(matches!(
            Entry::from_value(json!({"content": "orphan"})),
            Entry::Malformed { .. }
        ));
    }

    fn image(value: Value) -> ImageBlock {
        let Entry::Block(ContentBlock::Image(image)) = Entry::from_value(value) else {
            panic!("expected image");
        };
        image
    }

    #[test]
    fn null_fields_take_defaults() {
        assert_eq!(
            Entry::from_value(json!({"type": "text", "content": null, "subdued": null})),
            Entry::Block(ContentBlock::text(""))
        );
        assert_eq!(
            Entry::from_value(json!({"type": "heading", "content": null, "headingType": "h3"})),
            Entry::Block(ContentBlock::Heading(HeadingBlock {
                content: String::new(),
                level: HeadingLevel::H3,
            }))
        );
        assert_eq!(
            Entry::from_value(json!({"type": "button", "label": null, "link": null})),
            Entry::Block(ContentBlock::Button(ButtonBlock::default()))
        );
        assert_eq!(
            Entry::from_value(json!({"type": "list", "items": null, "ordered": null})),
            Entry::Block(ContentBlock::List(ListBlock::default()))
        );
    }

    #[test]
    fn scalar_fields_are_stringified() {
        assert_eq!(
            Entry::from_value(json!({"type": "code", "content": 1234})),
            Entry::Block(ContentBlock::Code(CodeBlock {
                content: "1234".into(),
            }))
        );
        assert_eq!(
            Entry::from_value(json!({"type": "list", "items": ["A", 2, null, true], "ordered": 1})),
            Entry::Block(ContentBlock::List(ListBlock {
                items: vec!["A".into(), "2".into(), "true".into()],
                ordered: true,
            }))
        );
        assert_eq!(
            Entry::from_value(json!({"type": "text", "content": "x", "subdued": "yes"})),
            Entry::Block(ContentBlock::Text(TextBlock {
                content: "x".into(),
                subdued: true,
            }))
        );
    }

    #[test]
    fn image_width_is_forgiving() {
        assert_eq!(image(json!({"type": "image", "width": 300})).width, Some(300));
        assert_eq!(image(json!({"type": "image", "width": "300"})).width, Some(300));
        assert_eq!(image(json!({"type": "image", "width": " 240px "})).width, Some(240));
        assert_eq!(image(json!({"type": "image", "width": 199.6})).width, Some(200));
        assert_eq!(image(json!({"type": "image", "width": "wide"})).width, None);
        assert_eq!(image(json!({"type": "image", "width": 0})).width, None);
        assert_eq!(image(json!({"type": "image", "width": -5})).width, None);
        assert_eq!(image(json!({"type": "image", "width": null})).width, None);
    }

    #[test]
    fn non_object_entries_are_malformed() {
        for value in [json!(null), json!(7), json!([1, 2])] {
            assert!(matches!(Entry::from_value(value), Entry::Malformed { .. }));
        }
    }

    #[test]
    fn heading_levels() {
        let entry = Entry::from_value(json!({"type": "heading", "content": "T", "headingType": "h4"}));
        assert_eq!(
            entry,
            Entry::Block(ContentBlock::Heading(HeadingBlock {
                content: "T".into(),
                level: HeadingLevel::H4,
            }))
        );
    }

    #[test]
    fn unknown_heading_level_is_h2() {
        assert_eq!(HeadingLevel::from_tag("h9"), HeadingLevel::H2);
        assert_eq!(HeadingLevel::from_tag("H1"), HeadingLevel::H2);
        assert_eq!(HeadingLevel::from_tag("h6"), HeadingLevel::H6);

        let entry = Entry::from_value(json!({"type": "heading", "headingType": 3}));
        let Entry::Block(ContentBlock::Heading(heading)) = entry else {
            panic!("expected heading");
        };
        assert_eq!(heading.level, HeadingLevel::H2);
    }

    #[test]
    fn deserializes_through_serde() {
        let content: Content = serde_json::from_str(r#"["a", {"type": "spacer"}]"#).unwrap();
        assert_eq!(
            content,
            Content::Blocks(vec![
                Entry::Block(ContentBlock::text("a")),
                Entry::Block(ContentBlock::Spacer {}),
            ])
        );
    }
}
