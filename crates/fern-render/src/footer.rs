//! Footer markup: custom footer text, or the unsubscribe and legal lines.

use crate::blocks::PLACEHOLDER_LINK;
use crate::request::EmailSpec;

/// Referral link appended when `showReferrer` is set.
pub const REFERRER_URL: &str = "https://sendfern.com";

/// Render the footer paragraphs.
///
/// Exactly one of these leads the footer: the caller's `footer_content`, the
/// marketing pair (unsubscribe + copyright with postal address), or a bare
/// copyright line. The referrer line may follow any of them.
#[must_use]
pub fn render_footer(spec: &EmailSpec, alignment: &str, year: i32) -> String {
    let mut lines = Vec::with_capacity(3);

    if !spec.footer_content.is_empty() {
        lines.push(spec.footer_content.clone());
    } else if spec.has_marketing {
        let unsubscribe = spec
            .unsubscribe_link
            .as_deref()
            .filter(|link| !link.is_empty())
            .unwrap_or(PLACEHOLDER_LINK);
        lines.push(format!(
            r#"No longer want to receive these emails? <a href="{unsubscribe}">Unsubscribe</a>."#
        ));
        let copyright = copyright(spec.name.as_deref(), year);
        lines.push(match postal_address(spec) {
            Some(address) => format!("{copyright} {address}."),
            None => copyright,
        });
    } else {
        lines.push(copyright(spec.name.as_deref(), year));
    }

    if spec.show_referrer {
        lines.push(format!(
            r#"Powered by <a class="referrer" href="{REFERRER_URL}">Sendfern</a>."#
        ));
    }

    lines
        .iter()
        .map(|line| {
            format!(
                r#"
<p class="f-fallback sub align-{alignment}">
  {line}
</p>
"#
            )
        })
        .collect()
}

fn copyright(name: Option<&str>, year: i32) -> String {
    match name.filter(|n| !n.is_empty()) {
        Some(name) => format!("&copy; {year} {name}. All rights reserved."),
        None => format!("&copy; {year}. All rights reserved."),
    }
}

/// `street1, street2, city, region zip, country`, skipping blanks.
fn postal_address(spec: &EmailSpec) -> Option<String> {
    let nonblank = |part: &Option<String>| {
        part.as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
    };

    let region_zip = [nonblank(&spec.region), nonblank(&spec.zip)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let parts: Vec<String> = [
        nonblank(&spec.street_address1),
        nonblank(&spec.street_address2),
        nonblank(&spec.city),
        Some(region_zip).filter(|rz| !rz.is_empty()),
        nonblank(&spec.country),
    ]
    .into_iter()
    .flatten()
    .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}
