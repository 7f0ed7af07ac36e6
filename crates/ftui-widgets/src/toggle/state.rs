#![forbid(unsafe_code)]

//! Tri-state selection computed from a toggle value.
//!
//! [`compute_state`] is the whole engine: a total, side-effect free
//! function from a [`ToggleValue`] and the configured on value to
//! [`SelectionState`].
//!
//! # Invariants
//!
//! 1. A scalar is `On` iff it loosely equals the on value, else `Off`.
//!    Scalars never produce `Mixed`.
//! 2. A one-item list behaves exactly like its item.
//! 3. A longer list is `On`/`Off` when every item agrees, and `Mixed` at
//!    the first disagreement. Items after that point are not compared.
//! 4. For a well-formed [`ToggleReference`],
//!    `compute_state(reference.value_for(s), on) == s` for `s` in
//!    {`On`, `Off`}. Writing the reference value back therefore reproduces
//!    the state that asked for it.

use serde::{Deserialize, Serialize};

use super::value::{Scalar, ToggleValue};
use crate::error::ToggleError;

/// Selection state of a toggle widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    On,
    #[default]
    Off,
    /// The value is a list whose items disagree.
    Mixed,
}

impl SelectionState {
    #[must_use]
    pub const fn from_bool(selected: bool) -> Self {
        if selected { Self::On } else { Self::Off }
    }

    #[must_use]
    pub const fn is_mixed(self) -> bool {
        matches!(self, Self::Mixed)
    }

    /// State after a user toggles the widget. `Mixed` resolves to `On`.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off | Self::Mixed => Self::On,
        }
    }
}

/// The on and off ends of a toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleReference {
    on: Scalar,
    off: Scalar,
}

impl Default for ToggleReference {
    fn default() -> Self {
        Self {
            on: Scalar::Bool(true),
            off: Scalar::Bool(false),
        }
    }
}

impl ToggleReference {
    #[must_use]
    pub fn new(on: impl Into<Scalar>, off: impl Into<Scalar>) -> Self {
        Self {
            on: on.into(),
            off: off.into(),
        }
    }

    #[must_use]
    pub const fn on_value(&self) -> &Scalar {
        &self.on
    }

    #[must_use]
    pub const fn off_value(&self) -> &Scalar {
        &self.off
    }

    /// State of `value` against this reference.
    #[must_use]
    pub fn state_of(&self, value: &ToggleValue) -> SelectionState {
        compute_state(value, &self.on)
    }

    /// Value to write for a user-chosen state. `Mixed` has none.
    #[must_use]
    pub fn value_for(&self, state: SelectionState) -> Option<ToggleValue> {
        match state {
            SelectionState::On => Some(ToggleValue::Scalar(self.on.clone())),
            SelectionState::Off => Some(ToggleValue::Scalar(self.off.clone())),
            SelectionState::Mixed => None,
        }
    }

    /// Check that writing either end back reproduces its state.
    ///
    /// # Errors
    ///
    /// [`ToggleError::UnmatchableOnValue`] when the on value does not match
    /// itself (NaN), [`ToggleError::DegenerateReference`] when the off value
    /// matches the on value.
    pub fn validate(&self) -> Result<(), ToggleError> {
        if !self.on.loosely_eq(&self.on) {
            return Err(ToggleError::UnmatchableOnValue {
                on: self.on.clone(),
            });
        }
        if self.off.loosely_eq(&self.on) {
            return Err(ToggleError::DegenerateReference {
                on: self.on.clone(),
                off: self.off.clone(),
            });
        }
        Ok(())
    }
}

/// Compute the selection state of `value` against `on_value`.
#[must_use]
pub fn compute_state(value: &ToggleValue, on_value: &Scalar) -> SelectionState {
    match value {
        ToggleValue::Scalar(v) => SelectionState::from_bool(v.loosely_eq(on_value)),
        ToggleValue::List(items) => match items.as_slice() {
            [only] => SelectionState::from_bool(only.loosely_eq(on_value)),
            _ => fold_state(items, |item| item.loosely_eq(on_value)),
        },
    }
}

/// Fold per-item matches into a state, stopping at the first disagreement.
/// No items is `Off`.
pub(crate) fn fold_state<'a>(
    items: impl IntoIterator<Item = &'a Scalar>,
    mut matches_on: impl FnMut(&Scalar) -> bool,
) -> SelectionState {
    let mut state: Option<bool> = None;
    for item in items {
        let next = matches_on(item);
        match state {
            None => state = Some(next),
            Some(prev) if prev != next => return SelectionState::Mixed,
            Some(_) => {}
        }
    }
    SelectionState::from_bool(state.unwrap_or(false))
}
