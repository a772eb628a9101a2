//! Email requests and their normalized form.
//!
//! [`EmailRequest`] is the raw payload as a caller sends it: every field is
//! optional. [`normalize`] fills in defaults and validates the brand color,
//! producing the [`EmailSpec`] the renderer consumes.

use serde::{Deserialize, Serialize};

use crate::brand::BrandColor;
use crate::content::Content;

/// Logo width in pixels when none is given.
pub const DEFAULT_LOGO_WIDTH: u32 = 200;

/// One address or a list of addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

/// A render or send request as received. Keys are camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailRequest {
    // rendering switches
    pub disable_dark_mode: Option<bool>,

    // message
    pub to: Option<Recipients>,
    pub footer_content: Option<String>,
    pub content: Option<Content>,
    pub preview: Option<String>,
    pub subject: Option<String>,
    pub scheduled_at: Option<String>,

    // sender / organization
    pub has_marketing: Option<bool>,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub logo_width: Option<u32>,
    pub brand_color: Option<String>,
    pub theme: Option<String>,
    pub website: Option<String>,
    pub sender_name: Option<String>,
    pub reply_to: Option<String>,
    pub street_address1: Option<String>,
    pub street_address2: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub unsubscribe_link: Option<String>,
    pub show_referrer: Option<bool>,
}

impl EmailRequest {
    /// Parse a request from JSON text.
    ///
    /// # Errors
    ///
    /// Fails when the text is not a JSON object or a field has the wrong
    /// type. Bad `content` never fails; it is reported at render time.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A normalized request, ready to render.
///
/// Serializes to the camelCase shape the delivery API expects, minus
/// `content`, which is replaced by rendered HTML when sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSpec {
    pub disable_dark_mode: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Recipients>,
    pub footer_content: String,
    #[serde(skip_serializing)]
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,

    pub has_marketing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub logo_width: u32,
    pub brand_color: BrandColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribe_link: Option<String>,
    pub show_referrer: bool,
}

impl Default for EmailSpec {
    fn default() -> Self {
        normalize(EmailRequest::default())
    }
}

impl From<EmailRequest> for EmailSpec {
    fn from(request: EmailRequest) -> Self {
        normalize(request)
    }
}

/// Fill in defaults. Never fails; an invalid brand color is replaced
/// silently and a zero logo width counts as unset.
#[must_use]
pub fn normalize(request: EmailRequest) -> EmailSpec {
    EmailSpec {
        disable_dark_mode: request.disable_dark_mode.unwrap_or(false),
        to: request.to,
        footer_content: request.footer_content.unwrap_or_default(),
        content: request.content.unwrap_or_default(),
        preview: request.preview,
        subject: request.subject,
        scheduled_at: request.scheduled_at,
        has_marketing: request.has_marketing.unwrap_or(false),
        name: request.name,
        logo: request.logo,
        logo_width: request
            .logo_width
            .filter(|width| *width > 0)
            .unwrap_or(DEFAULT_LOGO_WIDTH),
        brand_color: BrandColor::or_default(request.brand_color.as_deref()),
        theme: request.theme,
        website: request.website,
        sender_name: request.sender_name,
        reply_to: request.reply_to,
        street_address1: request.street_address1,
        street_address2: request.street_address2,
        city: request.city,
        region: request.region,
        zip: request.zip,
        country: request.country,
        unsubscribe_link: request.unsubscribe_link,
        show_referrer: request.show_referrer.unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_request_defaults() {
        let spec = normalize(EmailRequest::default());
        assert!(!spec.disable_dark_mode);
        assert!(!spec.has_marketing);
        assert!(!spec.show_referrer);
        assert_eq!(spec.footer_content, "");
        assert_eq!(spec.content, Content::Text(String::new()));
        assert_eq!(spec.logo_width, 200);
        assert_eq!(spec.brand_color.as_str(), "#3b82f6");
        assert_eq!(spec.name, None);
        assert_eq!(spec.theme, None);
    }

    #[test]
    fn empty_request_serializes_defaults_only() {
        let json = serde_json::to_value(EmailSpec::default()).unwrap();
        assert_eq!(
            json,
            json!({
                "disableDarkMode": false,
                "footerContent": "",
                "hasMarketing": false,
                "logoWidth": 200,
                "brandColor": "#3b82f6",
                "showReferrer": false,
            })
        );
    }

    #[test]
    fn invalid_brand_color_is_replaced() {
        let request = EmailRequest {
            brand_color: Some("not-a-color".into()),
            ..EmailRequest::default()
        };
        assert_eq!(normalize(request).brand_color.as_str(), "#3b82f6");
    }

    #[test]
    fn valid_brand_color_is_kept_verbatim() {
        let request = EmailRequest {
            brand_color: Some("#10B981".into()),
            ..EmailRequest::default()
        };
        assert_eq!(normalize(request).brand_color.as_str(), "#10B981");
    }

    #[test]
    fn zero_logo_width_is_unset() {
        let request = EmailRequest {
            logo_width: Some(0),
            ..EmailRequest::default()
        };
        assert_eq!(normalize(request).logo_width, DEFAULT_LOGO_WIDTH);
    }

    #[test]
    fn parses_camel_case_payload() {
        let request = EmailRequest::from_json(
            r##"{
                "to": ["a@example.com", "b@example.com"],
                "subject": "Welcome",
                "content": "Hello",
                "name": "Acme",
                "brandColor": "#ef4444",
                "streetAddress1": "1 Main St",
                "hasMarketing": true,
                "unsubscribeLink": "https://example.com/unsub"
            }"##,
        )
        .unwrap();
        assert_eq!(
            request.to,
            Some(Recipients::Many(vec!["a@example.com".into(), "b@example.com".into()]))
        );
        assert_eq!(request.street_address1.as_deref(), Some("1 Main St"));

        let spec = EmailSpec::from(request);
        assert!(spec.has_marketing);
        assert_eq!(spec.content, Content::Text("Hello".into()));
        assert_eq!(spec.brand_color.as_str(), "#ef4444");
    }

    #[test]
    fn bad_content_still_parses() {
        let request = EmailRequest::from_json(r#"{"content": 12}"#).unwrap();
        assert_eq!(request.content, Some(Content::Unsupported("a number")));
    }

    #[test]
    fn wrong_field_type_is_an_error() {
        assert!(EmailRequest::from_json(r#"{"hasMarketing": "yes"}"#).is_err());
        assert!(EmailRequest::from_json("[]").is_err());
    }

    #[test]
    fn serialized_spec_omits_content() {
        let spec = EmailSpec {
            content: Content::Text("secret draft".into()),
            to: Some(Recipients::One("a@example.com".into())),
            ..EmailSpec::default()
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert!(json.get("content").is_none());
        assert_eq!(json["to"], "a@example.com");
    }
}
