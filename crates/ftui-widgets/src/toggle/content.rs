#![forbid(unsafe_code)]

//! Content-key delegation.
//!
//! A toggle may mirror `value`, `title` and `icon` from properties of an
//! external content object. Which property feeds which slot is decided per
//! slot by [`resolve_content_key`]: a display delegate's override wins,
//! otherwise the widget's own [`ContentKeys`] apply.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A local slot that can be driven from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSlot {
    Value,
    Title,
    Icon,
}

impl ContentSlot {
    /// All slots in synchronization order.
    pub const ALL: [Self; 3] = [Self::Value, Self::Title, Self::Icon];
}

impl fmt::Display for ContentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::Title => "title",
            Self::Icon => "icon",
        })
    }
}

/// Content property names configured on the widget itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentKeys {
    pub value: Option<String>,
    pub title: Option<String>,
    pub icon: Option<String>,
}

impl ContentKeys {
    #[must_use]
    pub fn get(&self, slot: ContentSlot) -> Option<&str> {
        match slot {
            ContentSlot::Value => self.value.as_deref(),
            ContentSlot::Title => self.title.as_deref(),
            ContentSlot::Icon => self.icon.as_deref(),
        }
    }

    /// Replace the key for `slot`, returning the previous one.
    pub fn set(&mut self, slot: ContentSlot, key: Option<String>) -> Option<String> {
        let field = match slot {
            ContentSlot::Value => &mut self.value,
            ContentSlot::Title => &mut self.title,
            ContentSlot::Icon => &mut self.icon,
        };
        std::mem::replace(field, key)
    }

    /// Builder form of [`ContentKeys::set`].
    #[must_use]
    pub fn with(mut self, slot: ContentSlot, key: impl Into<String>) -> Self {
        self.set(slot, Some(key.into()));
        self
    }
}

/// Display delegate that may override content keys.
///
/// Return `None` to defer to the widget's own key.
pub trait ContentKeyDelegate {
    fn content_key(&self, slot: ContentSlot) -> Option<String> {
        let _ = slot;
        None
    }
}

/// Resolve the content key for `slot`: the delegate's override, else `own`.
#[must_use]
pub fn resolve_content_key(
    delegate: Option<&dyn ContentKeyDelegate>,
    own: &ContentKeys,
    slot: ContentSlot,
) -> Option<String> {
    delegate
        .and_then(|d| d.content_key(slot))
        .or_else(|| own.get(slot).map(str::to_owned))
}
