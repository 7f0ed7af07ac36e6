#![forbid(unsafe_code)]

//! Title localization and icon classification for button-like widgets.
//!
//! When a widget localizes its title, the title is a lookup key. Lookups go
//! through a [`Localizer`]; [`TitleCatalog`] is the in-memory one, with an
//! active locale and a fallback chain. A key no locale provides displays
//! as itself.

use std::collections::HashMap;

/// Looks up display strings for title keys.
pub trait Localizer {
    /// Localized string for `key`, or `None` when unknown.
    fn localize(&self, key: &str) -> Option<String>;
}

/// Per-locale title strings with a fallback chain.
///
/// # Invariants
///
/// 1. A lookup tries the active locale, then each fallback in order, and
///    stops at the first hit.
/// 2. The active locale is never consulted twice.
#[derive(Debug, Clone, Default)]
pub struct TitleCatalog {
    locales: HashMap<String, HashMap<String, String>>,
    active: String,
    fallback_chain: Vec<String>,
}

impl TitleCatalog {
    #[must_use]
    pub fn new(active: impl Into<String>) -> Self {
        Self {
            active: active.into(),
            ..Self::default()
        }
    }

    /// Add (or extend) the strings of a locale.
    pub fn add_strings<K, V>(&mut self, locale: &str, strings: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.locales
            .entry(locale.to_owned())
            .or_default()
            .extend(strings.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Locales tried after the active one, e.g. `["es", "en"]` for `es-MX`.
    pub fn set_fallback_chain(&mut self, chain: Vec<String>) {
        self.fallback_chain = chain;
    }

    pub fn set_active_locale(&mut self, locale: impl Into<String>) {
        self.active = locale.into();
    }

    #[must_use]
    pub fn active_locale(&self) -> &str {
        &self.active
    }

    /// String for `key`, walking the fallback chain.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        std::iter::once(&self.active)
            .chain(self.fallback_chain.iter().filter(|l| **l != self.active))
            .find_map(|locale| self.locales.get(locale)?.get(key))
            .map(String::as_str)
    }
}

impl Localizer for TitleCatalog {
    fn localize(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }
}

/// Resolve the text a widget displays for `title`.
///
/// Without localization, or when the title is empty, the title is shown
/// as is. Otherwise it is looked up, falling back to the key itself.
#[must_use]
pub fn display_title(title: Option<&str>, localize: bool, localizer: Option<&dyn Localizer>) -> String {
    match title {
        Some(key) if localize && !key.is_empty() => localizer
            .and_then(|l| l.localize(key))
            .unwrap_or_else(|| key.to_owned()),
        Some(title) => title.to_owned(),
        None => String::new(),
    }
}

/// Where a widget's icon comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// An image location (the icon text contains a `/`).
    Url,
    /// A sprite class name.
    Sprite,
}

impl IconKind {
    /// Classify an icon string. Empty icons have no kind.
    #[must_use]
    pub fn classify(icon: &str) -> Option<Self> {
        if icon.is_empty() {
            None
        } else if icon.contains('/') {
            Some(Self::Url)
        } else {
            Some(Self::Sprite)
        }
    }
}
