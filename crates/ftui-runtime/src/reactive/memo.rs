#![forbid(unsafe_code)]

//! Cached derived values keyed on dependency versions.
//!
//! A [`Memo`] remembers the versions of the observables it was computed
//! from. Reading it with the same versions returns the cached value;
//! any version change recomputes. Callers pass versions explicitly, which
//! keeps the dependency list visible at the call site.
//!
//! ```
//! use ftui_runtime::reactive::{Memo, Observable};
//!
//! let title = Observable::new("save".to_string());
//! let upper = Memo::new();
//! let read = || upper.get(&[title.version()], || title.get().to_uppercase());
//!
//! assert_eq!(read(), "SAVE");
//! assert_eq!(read(), "SAVE");
//! assert_eq!(upper.compute_count(), 1);
//!
//! title.set("open".to_string());
//! assert_eq!(read(), "OPEN");
//! assert_eq!(upper.compute_count(), 2);
//! ```

use std::cell::{Cell, RefCell};

/// Cached derived value.
#[derive(Debug)]
pub struct Memo<T> {
    cache: RefCell<Option<(Vec<u64>, T)>>,
    computes: Cell<u64>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self {
            cache: RefCell::new(None),
            computes: Cell::new(0),
        }
    }
}

impl<T: Clone> Memo<T> {
    /// Empty memo; the first read always computes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `deps`, computing it with `compute` on a miss.
    ///
    /// `compute` must not read this memo.
    pub fn get(&self, deps: &[u64], compute: impl FnOnce() -> T) -> T {
        if let Some((cached_deps, value)) = self.cache.borrow().as_ref() {
            if cached_deps.as_slice() == deps {
                return value.clone();
            }
        }
        let value = compute();
        self.computes.set(self.computes.get() + 1);
        *self.cache.borrow_mut() = Some((deps.to_vec(), value.clone()));
        value
    }

    /// Drop the cached value so the next read recomputes.
    pub fn invalidate(&self) {
        self.cache.borrow_mut().take();
    }

    /// How many times the value was computed.
    #[must_use]
    pub fn compute_count(&self) -> u64 {
        self.computes.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_deps_hit_cache() {
        let memo = Memo::new();
        assert_eq!(memo.get(&[1, 2], || 10), 10);
        assert_eq!(memo.get(&[1, 2], || 20), 10);
        assert_eq!(memo.compute_count(), 1);
    }

    #[test]
    fn changed_deps_recompute() {
        let memo = Memo::new();
        memo.get(&[1, 2], || 10);
        assert_eq!(memo.get(&[1, 3], || 20), 20);
        assert_eq!(memo.compute_count(), 2);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let memo = Memo::new();
        memo.get(&[0], || "a".to_string());
        memo.invalidate();
        assert_eq!(memo.get(&[0], || "b".to_string()), "b");
    }
}
