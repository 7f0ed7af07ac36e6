#![forbid(unsafe_code)]

//! Observable slot with change notification and version tracking.
//!
//! # Design
//!
//! [`Observable<T>`] wraps a value of type `T` in shared, reference-counted
//! storage (`Rc<RefCell<..>>`). A write that changes the value (by
//! `PartialEq`) bumps the version and notifies all live subscribers in
//! registration order. A write of an equal value is a no-op and reports
//! `false`, which is what widget controllers use as their recursion guard.
//!
//! # Performance
//!
//! | Operation     | Complexity                 |
//! |---------------|----------------------------|
//! | `get()`       | O(1) + clone               |
//! | `set()`       | O(S) where S = subscribers |
//! | `subscribe()` | O(1) amortized             |
//!
//! # Failure Modes
//!
//! - **Re-entrant set**: subscribers run after every internal borrow is
//!   released, so a subscriber may write this or any other observable.
//!   Nested notifications complete before the outer `set()` returns.
//! - **Subscriber leak**: callbacks live as long as their [`Subscription`]
//!   guard. Dead weak references are pruned lazily during notification.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct ObservableInner<T> {
    value: T,
    version: u64,
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared, version-tracked slot with synchronous change notification.
///
/// Cloning an `Observable` creates a new handle to the **same** slot.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 on each value-changing write.
/// 2. `set(v)` where `v == current` returns `false` and notifies nobody.
/// 3. Subscribers are notified in registration order, synchronously.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish_non_exhaustive()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create a slot holding `value` at version 0.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value for the duration of `f`.
    ///
    /// `f` must not write this observable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Write a new value.
    ///
    /// Returns `true` when the value changed, in which case the version was
    /// bumped and every live subscriber has already been notified.
    pub fn set(&self, value: T) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
        true
    }

    /// Subscribe to changes. The callback receives the value as of the
    /// write that triggered it.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription::new(strong)
    }

    /// Number of value-changing writes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Registered subscribers, including dead ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        let (callbacks, value) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            let callbacks: Vec<CallbackRc<T>> =
                inner.subscribers.iter().filter_map(Weak::upgrade).collect();
            (callbacks, inner.value.clone())
        };
        for cb in &callbacks {
            cb(&value);
        }
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the guard drops the only strong reference to the callback, so
/// the weak entry in the subscriber list stops upgrading immediately.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl Subscription {
    pub(crate) fn new<C: ?Sized + 'static>(strong: Rc<C>) -> Self {
        Self {
            _guard: Box::new(strong),
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_reports_change() {
        let obs = Observable::new(1);
        assert!(obs.set(2));
        assert!(!obs.set(2));
        assert_eq!(obs.get(), 2);
        assert_eq!(obs.version(), 1);
    }

    #[test]
    fn equal_write_does_not_notify() {
        let obs = Observable::new("on".to_string());
        let hits = Rc::new(Cell::new(0u32));
        let hits_clone = Rc::clone(&hits);
        let _sub = obs.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));

        obs.set("on".to_string());
        assert_eq!(hits.get(), 0);
        obs.set("off".to_string());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dropped_subscription_is_silent_and_pruned() {
        let obs = Observable::new(0);
        let hits = Rc::new(Cell::new(0u32));
        let hits_clone = Rc::clone(&hits);
        let sub = obs.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));
        let _other = obs.subscribe(|_| {});

        obs.set(1);
        drop(sub);
        assert_eq!(obs.subscriber_count(), 2);
        obs.set(2);
        assert_eq!(hits.get(), 1);
        assert_eq!(obs.subscriber_count(), 1);
    }

    #[test]
    fn subscriber_may_write_back() {
        // Clamp-to-ten observer: writes the slot from inside its own
        // notification and must converge.
        let obs = Observable::new(0);
        let handle = obs.clone();
        let _sub = obs.subscribe(move |v| {
            if *v > 10 {
                handle.set(10);
            }
        });

        obs.set(42);
        assert_eq!(obs.get(), 10);
        assert_eq!(obs.version(), 2);
    }

    #[test]
    fn notification_order_is_registration_order() {
        let obs = Observable::new(0);
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Vec::new();
        for tag in ['A', 'B', 'C'] {
            let log = Rc::clone(&log);
            subs.push(obs.subscribe(move |_| log.borrow_mut().push(tag)));
        }

        obs.set(1);
        assert_eq!(*log.borrow(), vec!['A', 'B', 'C']);
    }

    #[test]
    fn clones_share_slot() {
        let a = Observable::new(false);
        let b = a.clone();
        a.set(true);
        assert!(b.get());
        assert_eq!(b.version(), 1);
    }

    #[test]
    fn with_borrows_without_clone() {
        let obs = Observable::new(vec![1, 2, 3]);
        assert_eq!(obs.with(Vec::len), 3);
    }

    proptest::proptest! {
        #[test]
        fn version_counts_effective_writes(writes in proptest::collection::vec(0u8..4, 0..64)) {
            let obs = Observable::new(0u8);
            let mut expected = 0u64;
            let mut current = 0u8;
            for w in writes {
                if w != current {
                    expected += 1;
                    current = w;
                }
                obs.set(w);
            }
            proptest::prop_assert_eq!(obs.version(), expected);
            proptest::prop_assert_eq!(obs.get(), current);
        }
    }

    #[test]
    fn debug_format() {
        let dbg = format!("{:?}", Observable::new(42));
        assert!(dbg.contains("Observable"));
        assert!(dbg.contains("42"));
    }
}
