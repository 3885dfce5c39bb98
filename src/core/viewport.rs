//! Viewport-triggered one-shot effects
//!
//! Intersection callbacks may fire any number of times and in any order across
//! elements. Every effect here goes through a `OneShot` latch so that only the
//! first qualifying intersection of each element does anything.

use std::collections::HashSet;
use std::hash::Hash;

/// Selector for elements that fade in on scroll
pub const REVEAL_SELECTOR: &str = ".scroll-reveal";

/// Class added once an element has been revealed
pub const REVEALED_CLASS: &str = "revealed";

/// Selector for animated counters
pub const COUNTER_SELECTOR: &str = "[data-counter]";

/// Options passed to an `IntersectionObserver`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// 10% visible, with the bottom edge pulled in by 50px
pub const REVEAL_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

/// Half visible
pub const COUNTER_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.5,
    root_margin: "0px",
};

/// A single intersection report for element `key`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection<K> {
    pub key: K,
    pub is_intersecting: bool,
}

/// Remembers which keys have already fired
#[derive(Debug, Clone)]
pub struct OneShot<K> {
    options: ObserverOptions,
    fired: HashSet<K>,
}

impl<K: Eq + Hash + Clone> OneShot<K> {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            fired: HashSet::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Record an intersection. Returns `true` only the first time `key` qualifies.
    pub fn observe(&mut self, entry: &Intersection<K>) -> bool {
        if !entry.is_intersecting || self.fired.contains(&entry.key) {
            return false;
        }
        self.fired.insert(entry.key.clone());
        true
    }

    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(key: usize, is_intersecting: bool) -> Intersection<usize> {
        Intersection {
            key,
            is_intersecting,
        }
    }

    #[test]
    fn test_observer_options() {
        assert_eq!(REVEAL_OBSERVER.threshold, 0.1);
        assert_eq!(REVEAL_OBSERVER.root_margin, "0px 0px -50px 0px");
        assert_eq!(COUNTER_OBSERVER.threshold, 0.5);
    }

    #[test]
    fn test_fires_once_per_key() {
        let mut latch = OneShot::new(REVEAL_OBSERVER);

        assert!(latch.observe(&hit(1, true)));
        assert!(!latch.observe(&hit(1, true)));
        assert!(latch.has_fired(&1));

        // Leaving and re-entering never un-fires or re-fires
        assert!(!latch.observe(&hit(1, false)));
        assert!(!latch.observe(&hit(1, true)));
        assert!(latch.has_fired(&1));
    }

    #[test]
    fn test_non_intersecting_does_not_fire() {
        let mut latch = OneShot::new(COUNTER_OBSERVER);
        assert!(!latch.observe(&hit(7, false)));
        assert!(!latch.has_fired(&7));
        assert_eq!(latch.fired_count(), 0);
    }

    #[test]
    fn test_keys_are_independent_of_order() {
        let mut latch = OneShot::new(REVEAL_OBSERVER);
        for key in [3, 1, 2, 1, 3, 2] {
            latch.observe(&hit(key, true));
        }
        assert_eq!(latch.fired_count(), 3);
    }
}
