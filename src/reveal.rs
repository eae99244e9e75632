//! One-way fade-in of page blocks as they scroll into view.
//!
//! Every block marked for fading registers under a stable key. The first time
//! enough of it is in the viewport it is flagged visible, and it stays visible
//! for the rest of the session even if it scrolls back out. Re-rendering the
//! content (a locale switch) drops the marked set so the blocks rendered next
//! register afresh; keys that already faded in stay visible.

use std::collections::HashSet;

use crate::config::REVEAL_THRESHOLD;

/// Viewport intersection capability: invoke `on_ratio` with the visible
/// fraction of `target` whenever it crosses `threshold`.
pub trait Observe<T> {
    fn observe<F>(&self, target: T, threshold: f64, on_ratio: F)
    where
        F: FnMut(f64) + 'static;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealTracker {
    marked: HashSet<String>,
    visible: HashSet<String>,
}

impl RevealTracker {
    pub fn mark(&mut self, key: &str) {
        self.marked.insert(key.to_string());
    }

    /// Forget which blocks are rendered, ahead of a content re-render.
    pub fn rescan(&mut self) {
        self.marked.clear();
    }

    /// Records an intersection ratio for `key`. Returns true only when this
    /// call is the one that made the block visible.
    pub fn record(&mut self, key: &str, ratio: f64) -> bool {
        if ratio < REVEAL_THRESHOLD || !self.marked.contains(key) {
            return false;
        }
        self.visible.insert(key.to_string())
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.contains(key)
    }

    /// Marked blocks still waiting to fade in.
    pub fn pending(&self) -> usize {
        self.marked.difference(&self.visible).count()
    }
}

/// Marks `key` and subscribes `target` through `observer`; every reported
/// ratio is handed to `on_ratio` along with the key.
pub fn watch<T, O, F>(
    observer: &O,
    tracker: &mut RevealTracker,
    target: T,
    key: String,
    mut on_ratio: F,
) where
    O: Observe<T> + ?Sized,
    F: FnMut(&str, f64) + 'static,
{
    tracker.mark(&key);
    observer.observe(target, REVEAL_THRESHOLD, move |ratio| on_ratio(&key, ratio));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    type Callback = Box<dyn FnMut(f64)>;

    /// Records subscriptions so tests can play intersection changes back.
    #[derive(Default)]
    struct FakeObserver {
        subscriptions: RefCell<HashMap<&'static str, Callback>>,
    }

    impl Observe<&'static str> for FakeObserver {
        fn observe<F>(&self, target: &'static str, threshold: f64, on_ratio: F)
        where
            F: FnMut(f64) + 'static,
        {
            assert_eq!(threshold, REVEAL_THRESHOLD);
            self.subscriptions
                .borrow_mut()
                .insert(target, Box::new(on_ratio));
        }
    }

    impl FakeObserver {
        fn intersect(&self, target: &'static str, ratio: f64) {
            if let Some(cb) = self.subscriptions.borrow_mut().get_mut(target) {
                cb(ratio);
            }
        }
    }

    fn setup(keys: &[&'static str]) -> (FakeObserver, Rc<RefCell<RevealTracker>>) {
        let observer = FakeObserver::default();
        let tracker = Rc::new(RefCell::new(RevealTracker::default()));
        for key in keys {
            let sink = tracker.clone();
            watch(
                &observer,
                &mut tracker.borrow_mut(),
                *key,
                key.to_string(),
                move |k, ratio| {
                    sink.borrow_mut().record(k, ratio);
                },
            );
        }
        (observer, tracker)
    }

    #[test]
    fn test_threshold() {
        let (observer, tracker) = setup(&["hero", "stack"]);
        assert_eq!(tracker.borrow().pending(), 2);

        observer.intersect("hero", 0.1);
        assert!(!tracker.borrow().is_visible("hero"));

        observer.intersect("hero", 0.15);
        assert!(tracker.borrow().is_visible("hero"));
        assert!(!tracker.borrow().is_visible("stack"));
        assert_eq!(tracker.borrow().pending(), 1);
    }

    #[test]
    fn test_visible_is_permanent() {
        let (observer, tracker) = setup(&["exp-0"]);
        observer.intersect("exp-0", 0.8);
        observer.intersect("exp-0", 0.0);
        observer.intersect("exp-0", 0.05);
        assert!(tracker.borrow().is_visible("exp-0"));
    }

    #[test]
    fn test_never_intersecting_stays_hidden() {
        let (_observer, tracker) = setup(&["footer"]);
        assert!(!tracker.borrow().is_visible("footer"));
        assert_eq!(tracker.borrow().pending(), 1);
    }

    #[test]
    fn test_record_reports_first_transition_only() {
        let mut tracker = RevealTracker::default();
        tracker.mark("card");
        assert!(tracker.record("card", 0.5));
        assert!(!tracker.record("card", 0.9));
        // unmarked keys are ignored
        assert!(!tracker.record("ghost", 1.0));
        assert!(!tracker.is_visible("ghost"));
    }

    #[test]
    fn test_rescan_keeps_visible() {
        let mut tracker = RevealTracker::default();
        tracker.mark("exp-0");
        tracker.mark("exp-1");
        tracker.record("exp-0", 1.0);

        tracker.rescan();
        assert_eq!(tracker.pending(), 0);
        assert!(tracker.is_visible("exp-0"));

        // re-rendered blocks register again; stale ratios for
        // unregistered keys don't count
        assert!(!tracker.record("exp-1", 1.0));
        tracker.mark("exp-1");
        tracker.mark("exp-2");
        assert_eq!(tracker.pending(), 2);
        assert!(tracker.record("exp-1", 1.0));
    }
}
