//! Style aspects: the named slots every theme can fill.
//!
//! The document composer asks for fragments by aspect. Most aspects hold a
//! block of CSS rules; a few hold a bare value that is interpolated into a
//! rule or an attribute (`contentWidth`, `emailBackgroundColor`, ...).
//!
//! | Aspect                 | Key                    | Holds             |
//! |------------------------|------------------------|-------------------|
//! | `TopBar`               | `topBar`               | markup            |
//! | `Masthead`             | `masthead`             | CSS rules         |
//! | `BodyContent`          | `bodyContent`          | CSS rules         |
//! | `BodyDivider`          | `bodyDivider`          | CSS rules         |
//! | `BodySpacer`           | `bodySpacer`           | CSS rules         |
//! | `BodyImage`            | `bodyImage`            | CSS rules         |
//! | `BodyList`             | `bodyList`             | CSS rules         |
//! | `BodyAction`           | `bodyAction`           | CSS rules         |
//! | `ContentCell`          | `contentCell`          | CSS rules         |
//! | `EmailBackgroundColor` | `emailBackgroundColor` | color value       |
//! | `FooterTextColor`      | `footerTextColor`      | color value       |
//! | `LinkColor`            | `linkColor`            | color value       |
//! | `Button`               | `button`               | CSS rules         |
//! | `FontImport`           | `fontImport`           | `@import` rule    |
//! | `FontFamily`           | `fontFamily`           | CSS declaration   |
//! | `ContentWidth`         | `contentWidth`         | pixels (no unit)  |
//! | `Typography`           | `typography`           | CSS rules         |
//! | `EmailFooterAlignment` | `emailFooterAlignment` | `left` / `center` |
//! | `DarkMode`             | `darkMode`             | CSS rules         |

use std::fmt;
use std::str::FromStr;

/// One named slot within a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Aspect {
    TopBar,
    Masthead,
    BodyContent,
    BodyDivider,
    BodySpacer,
    BodyImage,
    BodyList,
    BodyAction,
    ContentCell,
    EmailBackgroundColor,
    FooterTextColor,
    LinkColor,
    Button,
    FontImport,
    FontFamily,
    ContentWidth,
    Typography,
    EmailFooterAlignment,
    DarkMode,
}

impl Aspect {
    /// Every aspect, in stylesheet order.
    pub const ALL: [Self; 19] = [
        Self::TopBar,
        Self::Masthead,
        Self::BodyContent,
        Self::BodyDivider,
        Self::BodySpacer,
        Self::BodyImage,
        Self::BodyList,
        Self::BodyAction,
        Self::ContentCell,
        Self::EmailBackgroundColor,
        Self::FooterTextColor,
        Self::LinkColor,
        Self::Button,
        Self::FontImport,
        Self::FontFamily,
        Self::ContentWidth,
        Self::Typography,
        Self::EmailFooterAlignment,
        Self::DarkMode,
    ];

    /// The camelCase key used in request payloads and theme tables.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TopBar => "topBar",
            Self::Masthead => "masthead",
            Self::BodyContent => "bodyContent",
            Self::BodyDivider => "bodyDivider",
            Self::BodySpacer => "bodySpacer",
            Self::BodyImage => "bodyImage",
            Self::BodyList => "bodyList",
            Self::BodyAction => "bodyAction",
            Self::ContentCell => "contentCell",
            Self::EmailBackgroundColor => "emailBackgroundColor",
            Self::FooterTextColor => "footerTextColor",
            Self::LinkColor => "linkColor",
            Self::Button => "button",
            Self::FontImport => "fontImport",
            Self::FontFamily => "fontFamily",
            Self::ContentWidth => "contentWidth",
            Self::Typography => "typography",
            Self::EmailFooterAlignment => "emailFooterAlignment",
            Self::DarkMode => "darkMode",
        }
    }

    /// Look up an aspect by its camelCase key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|aspect| aspect.key() == key)
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown aspect key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAspect(pub String);

impl fmt::Display for UnknownAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown style aspect `{}`", self.0)
    }
}

impl std::error::Error for UnknownAspect {}

impl FromStr for Aspect {
    type Err = UnknownAspect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownAspect(s.to_string()))
    }
}
