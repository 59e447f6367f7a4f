//! Progress notification bus
//!
//! Multicast channel carrying stage-progress events from in-flight exports
//! to zero or more listeners. Listeners are invoked synchronously, in
//! subscription order; a panicking listener is caught and logged so one
//! misbehaving observer never aborts an export. The bus neither buffers
//! nor replays: a listener added after an event was published never sees
//! that event.
//!
//! The subscriber set is the only mutable state shared across exports. The
//! lock is released before any callback runs, so callbacks may themselves
//! subscribe or unsubscribe.

use crate::domain::progress::ExportProgress;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, Weak};

type Listener = Arc<dyn Fn(&ExportProgress) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Multicast progress channel
///
/// Cheap to clone; clones share the same subscriber set.
#[derive(Clone, Default)]
pub struct ProgressBus {
    inner: Arc<Mutex<BusInner>>,
}

impl ProgressBus {
    /// Create a bus with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; the returned handle removes it again
    pub fn subscribe(
        &self,
        listener: impl Fn(&ExportProgress) + Send + Sync + 'static,
    ) -> Subscription {
        let mut inner = self.inner.lock().expect("progress bus lock poisoned");
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver an event to every current subscriber, in subscription order
    ///
    /// A panicking subscriber is caught and logged; delivery continues to
    /// the remaining subscribers.
    pub fn publish(&self, event: &ExportProgress) {
        let snapshot: Vec<(u64, Listener)> = {
            let inner = self.inner.lock().expect("progress bus lock poisoned");
            inner.listeners.clone()
        };

        for (id, listener) in snapshot {
            if catch_unwind(AssertUnwindSafe(|| listener(event))).is_err() {
                tracing::warn!(
                    subscriber_id = id,
                    stage = %event.stage,
                    "Progress subscriber panicked; continuing delivery"
                );
            }
        }
    }

    /// Current subscriber count
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .expect("progress bus lock poisoned")
            .listeners
            .len()
    }
}

/// Handle to one registration on the bus
///
/// [`unsubscribe`](Subscription::unsubscribe) removes exactly the listener
/// this handle was created for; calling it more than once is a no-op.
/// Dropping the handle does NOT unsubscribe.
pub struct Subscription {
    id: u64,
    inner: Weak<Mutex<BusInner>>,
}

impl Subscription {
    /// Remove the listener this handle closes over
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().expect("progress bus lock poisoned");
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::ExportToken;
    use crate::domain::progress::ExportStage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn event(progress: u8) -> ExportProgress {
        ExportProgress::new(
            ExportToken::new(),
            ExportStage::Preparing,
            progress,
            "test",
        )
    }

    #[test]
    fn test_publish_reaches_subscribers_in_order() {
        let bus = ProgressBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&seen);
        let _a = bus.subscribe(move |_| first.lock().unwrap().push("a"));
        let second = Arc::clone(&seen);
        let _b = bus.subscribe(move |_| second.lock().unwrap().push("b"));

        bus.publish(&event(10));
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_unsubscribe_removes_only_its_listener() {
        let bus = ProgressBus::new();
        let count = Arc::new(AtomicUsize::new(0));

        let keep = Arc::clone(&count);
        let _kept = bus.subscribe(move |_| {
            keep.fetch_add(1, Ordering::SeqCst);
        });
        let gone = Arc::clone(&count);
        let dropped = bus.subscribe(move |_| {
            gone.fetch_add(100, Ordering::SeqCst);
        });

        dropped.unsubscribe();
        bus.publish(&event(10));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_double_unsubscribe_is_a_no_op() {
        let bus = ProgressBus::new();
        let sub = bus.subscribe(|_| {});
        sub.unsubscribe();
        sub.unsubscribe();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_panicking_subscriber_does_not_stop_delivery() {
        let bus = ProgressBus::new();
        let reached = Arc::new(AtomicUsize::new(0));

        let _bad = bus.subscribe(|_| panic!("misbehaving observer"));
        let ok = Arc::clone(&reached);
        let _good = bus.subscribe(move |_| {
            ok.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(&event(10));
        assert_eq!(reached.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_replay_for_late_subscribers() {
        let bus = ProgressBus::new();
        bus.publish(&event(100));

        let count = Arc::new(AtomicUsize::new(0));
        let late = Arc::clone(&count);
        let _sub = bus.subscribe(move |_| {
            late.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subscriber_may_unsubscribe_during_publish() {
        let bus = ProgressBus::new();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let inner_slot = Arc::clone(&slot);
        let sub = bus.subscribe(move |_| {
            if let Some(sub) = inner_slot.lock().unwrap().take() {
                sub.unsubscribe();
            }
        });
        *slot.lock().unwrap() = Some(sub);

        bus.publish(&event(10));
        assert_eq!(bus.subscriber_count(), 0);
    }
}
