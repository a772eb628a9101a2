//! Theme assembly: a named table of style fragments.
//!
//! A `Theme` maps [`Aspect`]s to the fragment strings the document composer
//! interpolates. Brand-dependent fragments are already resolved to concrete
//! hex values by the time they land here, so lookups are plain map reads.

use std::collections::BTreeMap;

use crate::aspect::Aspect;

/// A complete (or partial) email theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    aspects: BTreeMap<Aspect, String>,
}

impl Theme {
    /// An empty theme. Aspects it never sets resolve to an empty string.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aspects: BTreeMap::new(),
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, aspect: Aspect, fragment: impl Into<String>) -> Self {
        self.set(aspect, fragment);
        self
    }

    /// Set (or replace) one aspect's fragment.
    pub fn set(&mut self, aspect: Aspect, fragment: impl Into<String>) {
        self.aspects.insert(aspect, fragment.into());
    }

    /// Name of this theme (e.g., "basic", "modern").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fragment for `aspect`, if this theme defines it.
    #[must_use]
    pub fn get(&self, aspect: Aspect) -> Option<&str> {
        self.aspects.get(&aspect).map(String::as_str)
    }

    /// Whether this theme defines `aspect` (an empty fragment still counts).
    #[must_use]
    pub fn defines(&self, aspect: Aspect) -> bool {
        self.aspects.contains_key(&aspect)
    }

    /// Defined aspects and their fragments, in [`Aspect`] order.
    pub fn aspects(&self) -> impl Iterator<Item = (Aspect, &str)> {
        self.aspects.iter().map(|(aspect, css)| (*aspect, css.as_str()))
    }
}
