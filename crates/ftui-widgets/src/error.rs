#![forbid(unsafe_code)]

//! Errors surfaced by toggle widgets.
//!
//! Reconciliation itself never fails. Errors are configuration-time
//! contract violations and are meant to surface immediately.
//!
//! | Error | Cause |
//! |-------|-------|
//! | `ActionUnimplemented` | `trigger_action` called on a widget that never provided one |
//! | `UnmatchableOnValue` | on value does not match itself (NaN) |
//! | `DegenerateReference` | off value matches the on value |
//! | `Config` | configuration JSON could not be parsed |

use crate::toggle::value::Scalar;

#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error("trigger_action() is not implemented by {component}")]
    ActionUnimplemented { component: String },

    #[error("toggle on value {on} never matches itself")]
    UnmatchableOnValue { on: Scalar },

    #[error("toggle off value {off} matches on value {on}")]
    DegenerateReference { on: Scalar, off: Scalar },

    #[error("invalid toggle configuration: {0}")]
    Config(#[from] serde_json::Error),
}
