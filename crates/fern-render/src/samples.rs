//! Preview content used by the live theme editor and the CLI's demo output.

use crate::content::{
    ButtonBlock, CodeBlock, Content, ContentBlock, HeadingBlock, HeadingLevel, ImageBlock,
    ListBlock, TextBlock,
};

const INTRO: &str = r#"This is a live preview of your emails! Customize my appearance using <a target="_blank" href="https://sendfern.com">Sendfern</a>."#;

/// One line of text.
#[must_use]
pub fn minimal() -> Content {
    Content::from(INTRO)
}

/// Text and a button.
#[must_use]
pub fn basic() -> Content {
    Content::from(vec![ContentBlock::text(INTRO), example_button()])
}

/// One of every block kind.
#[must_use]
pub fn full() -> Content {
    Content::from(vec![
        ContentBlock::text(INTRO),
        example_button(),
        ContentBlock::Spacer {},
        ContentBlock::text("I have a spacer above me!"),
        ContentBlock::Text(TextBlock {
            content: "A spacer inserts a gap in your email content.".into(),
            subdued: true,
        }),
        ContentBlock::Divider {},
        ContentBlock::text("I have a divider above me!"),
        ContentBlock::List(ListBlock {
            items: vec!["Item One".into(), "Item Two.".into(), "Item Three".into()],
            ordered: false,
        }),
        ContentBlock::Code(CodeBlock {
            content: "my-magic-code".into(),
        }),
        ContentBlock::Image(ImageBlock {
            source: "https://media.sendfern.com/6b413fc5-92e3-454b-b6da-3efc1ca91aaa.png".into(),
            link: Some("https://example.com".into()),
            width: Some(200),
            alt: None,
        }),
        heading("This is a h1 heading", HeadingLevel::H1),
        heading("This is a h2 heading", HeadingLevel::H2),
        heading("This is a h3 heading", HeadingLevel::H3),
    ])
}

fn example_button() -> ContentBlock {
    ContentBlock::Button(ButtonBlock {
        label: Some("Example Button".into()),
        link: Some("https://example.com".into()),
    })
}

fn heading(content: &str, level: HeadingLevel) -> ContentBlock {
    ContentBlock::Heading(HeadingBlock {
        content: content.into(),
        level,
    })
}

/// Look up a sample by name (`minimal`, `basic`, `full`).
#[must_use]
pub fn by_name(name: &str) -> Option<Content> {
    match name {
        "minimal" => Some(minimal()),
        "basic" => Some(basic()),
        "full" => Some(full()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Entry;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_has_every_kind() {
        let Content::Blocks(entries) = full() else {
            panic!("expected blocks");
        };
        let mut kinds: Vec<_> = entries
            .iter()
            .filter_map(|e| match e {
                Entry::Block(b) => Some(b.kind()),
                Entry::Malformed { .. } => None,
            })
            .collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(
            kinds,
            ["button", "code", "divider", "heading", "image", "list", "spacer", "text"]
        );
    }

    #[test]
    fn lookup() {
        assert_eq!(by_name("minimal"), Some(minimal()));
        assert!(by_name("huge").is_none());
    }
}
