#![forbid(unsafe_code)]

//! Button action contract.
//!
//! Every button-like widget has a default action (what a click or its
//! keyboard shortcut does). [`ButtonBehavior::trigger_action`] has no
//! meaningful default: a widget that does not provide one reports
//! [`ToggleError::ActionUnimplemented`] instead of doing nothing.

use crate::error::ToggleError;
use crate::toggle::{SelectionState, ToggleController};

pub trait ButtonBehavior {
    fn is_enabled(&self) -> bool {
        true
    }

    /// Perform the default action. `Ok(true)` when it was handled.
    ///
    /// # Errors
    ///
    /// The default implementation always returns
    /// [`ToggleError::ActionUnimplemented`].
    fn trigger_action(&mut self) -> Result<bool, ToggleError> {
        Err(ToggleError::ActionUnimplemented {
            component: std::any::type_name::<Self>().to_owned(),
        })
    }
}

/// A two-state (or mixed) toggle button.
#[derive(Debug)]
pub struct ToggleButton {
    controller: ToggleController,
    enabled: bool,
}

impl Default for ToggleButton {
    fn default() -> Self {
        Self::new(ToggleController::default())
    }
}

impl ToggleButton {
    #[must_use]
    pub fn new(controller: ToggleController) -> Self {
        Self {
            controller,
            enabled: true,
        }
    }

    #[must_use]
    pub const fn controller(&self) -> &ToggleController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ToggleController {
        &mut self.controller
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.controller.selection_state()
    }
}

impl ButtonBehavior for ToggleButton {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the selection. A disabled button ignores the action.
    fn trigger_action(&mut self) -> Result<bool, ToggleError> {
        if !self.enabled {
            return Ok(false);
        }
        let state = self.controller.toggle();
        tracing::debug!(?state, "toggle button action");
        Ok(true)
    }
}
