#![forbid(unsafe_code)]

//! Runtime substrate for FrankenTUI widgets.
//!
//! # Role in FrankenTUI
//! `ftui-runtime` owns the reactive property layer that widget state is
//! built on: observable slots, keyed content objects and cached derived
//! values. Widgets (`ftui-widgets`) hold their state in these primitives
//! and run their own reconciliation on top.

pub mod reactive;

pub use reactive::{Memo, Observable, PropertyBag, PropertyKey, Subscription};
