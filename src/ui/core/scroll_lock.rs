//! Scroll lock shared between the artifact panel and the message list.
//!
//! The panel holds a [`ScrollLease`] while it is visible; the message list
//! refuses to scroll while any lease is alive. Leases release on drop, so the
//! lock cannot outlive the component that acquired it.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a lease on the lock
    pub fn acquire(&self) -> ScrollLease {
        self.holders.set(self.holders.get() + 1);
        ScrollLease {
            holders: Rc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }
}

/// RAII guard returned by [`ScrollLock::acquire`]
#[derive(Debug)]
pub struct ScrollLease {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLease {
    fn drop(&mut self) {
        self.holders.set(self.holders.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lease_releases_on_drop() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let lease = lock.acquire();
        assert!(lock.is_locked());
        drop(lease);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_clones_share_state() {
        let lock = ScrollLock::new();
        let observer = lock.clone();

        let first = lock.acquire();
        let second = lock.acquire();
        drop(first);
        assert!(observer.is_locked());
        drop(second);
        assert!(!observer.is_locked());
    }
}
