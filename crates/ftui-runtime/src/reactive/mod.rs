#![forbid(unsafe_code)]

//! Reactive property substrate for FrankenTUI widgets.
//!
//! - [`Observable`]: a shared, version-tracked slot with synchronous change
//!   notification.
//! - [`PropertyBag`]: a shared keyed object whose notifications name the
//!   changed key, or [`PropertyKey::Any`] for bulk changes.
//! - [`Memo`]: a derived value cached on the versions of its inputs.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//!
//! # Architecture
//!
//! Everything is single-threaded (`Rc<RefCell<..>>`). Subscribers are held
//! weakly and pruned lazily during notification. Notification runs after
//! internal borrows are released, so observers may write further properties
//! and the nested writes finish before the outer write returns.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per write that changes state.
//! 2. Subscribers are notified in registration order.
//! 3. Writing a value equal to the current value is a no-op (no version
//!    bump, no notifications); this is the termination guard for cyclic
//!    reactions built on top.
//! 4. Dropping a [`Subscription`] silences its callback immediately.

pub mod memo;
pub mod observable;
pub mod property;

pub use memo::Memo;
pub use observable::{Observable, Subscription};
pub use property::{PropertyBag, PropertyKey};
