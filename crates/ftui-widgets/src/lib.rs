#![forbid(unsafe_code)]

//! Widget behavior for FrankenTUI.
//!
//! # Role in FrankenTUI
//! `ftui-widgets` holds widget state machines that sit between application
//! models and rendering. The toggle behavior here keeps a checkbox's or
//! toggle button's application value and its on/off/mixed selection in
//! step, and can mirror value, title and icon from a content object.
//!
//! # How it fits in the system
//! Widget state lives in the reactive slots of `ftui-runtime`. Renderers
//! read [`toggle::ToggleController::selection_state`],
//! [`toggle::ToggleController::display_title`] and
//! [`toggle::ToggleController::display_revision`]; they never write back
//! except through the controller.

pub mod button;
pub mod error;
pub mod toggle;

pub use button::{ButtonBehavior, ToggleButton};
pub use error::ToggleError;
