#![forbid(unsafe_code)]

//! Tri-state toggle behavior shared by checkboxes, toggle buttons and
//! radios.
//!
//! - [`value`]: toggle values and toggle equality.
//! - [`state`]: the selection engine ([`compute_state`]) and the on/off
//!   [`ToggleReference`].
//! - [`controller`]: [`ToggleController`], which keeps value and selection
//!   reconciled and mirrors content.
//! - [`content`]: content-key delegation.
//! - [`title`]: title localization and icon classification.
//! - [`config`]: serde configuration.

pub mod config;
pub mod content;
pub mod controller;
pub mod state;
pub mod title;
pub mod value;

pub use config::ToggleConfig;
pub use content::{ContentKeyDelegate, ContentKeys, ContentSlot, resolve_content_key};
pub use controller::{ContentBinding, ToggleContent, ToggleController};
pub use state::{SelectionState, ToggleReference, compute_state};
pub use title::{IconKind, Localizer, TitleCatalog};
pub use value::{Scalar, ToggleValue};
