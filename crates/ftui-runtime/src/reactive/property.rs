#![forbid(unsafe_code)]

//! Keyed observable objects.
//!
//! A [`PropertyBag`] is a shared map of named properties. Subscribers are
//! told *which* key changed ([`PropertyKey::Named`]) or that any number of
//! keys may have changed at once ([`PropertyKey::Any`]). Widgets use it as
//! the externally owned content object they mirror.
//!
//! # Invariants
//!
//! 1. `set(key, v)` with `v` equal to the stored value is a no-op.
//! 2. Removing an absent key is a no-op.
//! 3. `replace_all` and `batch` emit exactly one `Any` notification.
//! 4. Notifications are delivered synchronously after internal borrows are
//!    released, so subscribers may read or write the bag.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::observable::Subscription;

/// The key carried by a property change notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// A single named property changed.
    Named(String),
    /// Any property may have changed.
    Any,
}

impl PropertyKey {
    /// Named key.
    #[must_use]
    pub fn named(key: impl Into<String>) -> Self {
        Self::Named(key.into())
    }

    /// Whether a change of `self` concerns the property `key`.
    #[must_use]
    pub fn affects(&self, key: &str) -> bool {
        match self {
            Self::Named(k) => k == key,
            Self::Any => true,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(k) => f.write_str(k),
            Self::Any => f.write_str("*"),
        }
    }
}

type KeyCallbackRc = Rc<dyn Fn(&PropertyKey)>;
type KeyCallbackWeak = Weak<dyn Fn(&PropertyKey)>;

struct BagInner<V> {
    values: BTreeMap<String, V>,
    version: u64,
    subscribers: Vec<KeyCallbackWeak>,
}

/// Shared map of named, observable properties.
///
/// Cloning a `PropertyBag` yields another handle to the same object.
pub struct PropertyBag<V> {
    inner: Rc<RefCell<BagInner<V>>>,
}

impl<V> Clone for PropertyBag<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for PropertyBag<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PropertyBag")
            .field("values", &inner.values)
            .field("version", &inner.version)
            .finish_non_exhaustive()
    }
}

impl<V: Clone + PartialEq + 'static> Default for PropertyBag<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + PartialEq + 'static> PropertyBag<V> {
    /// Empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BagInner {
                values: BTreeMap::new(),
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Bag pre-populated with `entries`. No notifications are sent.
    #[must_use]
    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        let bag = Self::new();
        bag.inner
            .borrow_mut()
            .values
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v)));
        bag
    }

    /// Clone of the property under `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.borrow().values.get(key).cloned()
    }

    /// Whether the bag holds `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().values.contains_key(key)
    }

    /// Write one property. Returns `true` and notifies with
    /// [`PropertyKey::Named`] when the stored value changed.
    pub fn set(&self, key: impl Into<String>, value: V) -> bool {
        let key = key.into();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.values.get(&key) == Some(&value) {
                return false;
            }
            inner.values.insert(key.clone(), value);
            inner.version += 1;
        }
        self.notify(&PropertyKey::Named(key));
        true
    }

    /// Remove one property, returning it. Notifies when something was removed.
    pub fn remove(&self, key: &str) -> Option<V> {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let removed = inner.values.remove(key);
            if removed.is_some() {
                inner.version += 1;
            }
            removed
        };
        if removed.is_some() {
            self.notify(&PropertyKey::Named(key.to_owned()));
        }
        removed
    }

    /// Replace every property at once and emit a single wildcard notification.
    pub fn replace_all<K: Into<String>>(&self, entries: impl IntoIterator<Item = (K, V)>) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.values = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
            inner.version += 1;
        }
        self.notify(&PropertyKey::Any);
    }

    /// Apply several writes with a single wildcard notification at the end.
    pub fn batch(&self, f: impl FnOnce(&mut BTreeMap<String, V>)) {
        {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.values);
            inner.version += 1;
        }
        self.notify(&PropertyKey::Any);
    }

    /// Sorted property names.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().values.keys().cloned().collect()
    }

    /// Number of writes that changed the bag.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Subscribe to key change notifications.
    pub fn subscribe(&self, callback: impl Fn(&PropertyKey) + 'static) -> Subscription {
        let strong: KeyCallbackRc = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription::new(strong)
    }

    /// Whether two handles point at the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self, key: &PropertyKey) {
        let callbacks: Vec<KeyCallbackRc> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        tracing::trace!(key = %key, subscribers = callbacks.len(), "property bag change");
        for cb in &callbacks {
            cb(key);
        }
    }
}
