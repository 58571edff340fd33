//! Synchronous, ordered delivery of content snapshots to subscribers.
//!
//! Every mutation produces one delivery round. Rounds are delivered in
//! mutation order to listeners in registration order. A mutation issued from
//! inside a listener is queued behind the round in progress, so no listener
//! ever sees rounds out of order or a round it has already moved past.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use tracing::{trace, warn};

use super::store::StoreInner;
use crate::domain::SiteContent;

/// Callback invoked with each new snapshot
pub type Listener = dyn FnMut(&Arc<SiteContent>);

struct ListenerEntry {
    id: u64,

    /// Version of the last snapshot delivered to this listener
    seen: Cell<u64>,

    /// Cleared on unsubscribe so in-flight rounds skip the entry
    active: Cell<bool>,

    callback: RefCell<Box<Listener>>,
}

impl ListenerEntry {
    fn deliver(&self, version: u64, content: &Arc<SiteContent>) {
        if !self.active.get() || self.seen.get() >= version {
            return;
        }
        self.seen.set(version);
        (self.callback.borrow_mut())(content);
    }
}

/// A snapshot waiting to be delivered
struct Delivery {
    version: u64,
    content: Arc<SiteContent>,
}

/// Listener registry plus the pending-round queue.
#[derive(Default)]
pub(crate) struct Propagation {
    listeners: RefCell<Vec<Rc<ListenerEntry>>>,
    queue: RefCell<VecDeque<Delivery>>,
    dispatching: Cell<bool>,
    next_id: Cell<u64>,
}

impl Propagation {
    /// Register a listener and hand it the current snapshot straight away
    pub(crate) fn register(
        &self,
        version: u64,
        content: &Arc<SiteContent>,
        listener: Box<Listener>,
    ) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let entry = Rc::new(ListenerEntry {
            id,
            seen: Cell::new(version),
            active: Cell::new(true),
            callback: RefCell::new(listener),
        });
        self.listeners.borrow_mut().push(Rc::clone(&entry));
        trace!(listener = id, version, "listener registered");

        // The initial delivery counts as dispatch: mutations it triggers queue up.
        if self.dispatching.replace(true) {
            (entry.callback.borrow_mut())(content);
            return id;
        }

        let _dispatch = DispatchGuard(self);
        (entry.callback.borrow_mut())(content);
        self.drain();

        id
    }

    pub(crate) fn unregister(&self, id: u64) {
        let removed = {
            let mut listeners = self.listeners.borrow_mut();
            let position = listeners.iter().position(|entry| entry.id == id);
            position.map(|index| listeners.remove(index))
        };

        // Dropped outside the borrow: the callback may own other subscriptions.
        if let Some(entry) = removed {
            entry.active.set(false);
            trace!(listener = id, "listener removed");
        }
    }

    /// Queue a round for `content` and deliver unless a round is already running
    pub(crate) fn publish(&self, version: u64, content: Arc<SiteContent>) {
        self.queue
            .borrow_mut()
            .push_back(Delivery { version, content });

        if self.dispatching.replace(true) {
            return;
        }

        let _dispatch = DispatchGuard(self);
        self.drain();
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn drain(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(delivery) = next else {
                break;
            };

            // Listeners added during this round got the newer snapshot on registration.
            let round: Vec<Rc<ListenerEntry>> = self.listeners.borrow().clone();
            for entry in round {
                entry.deliver(delivery.version, &delivery.content);
            }
        }
    }
}

/// Ends a dispatch, even when a listener panics.
///
/// Rounds still queued after a panic stay queued and go out, in order, with
/// the next publish.
struct DispatchGuard<'a>(&'a Propagation);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            warn!(
                pending = self.0.queue.borrow().len(),
                "listener panicked during delivery"
            );
        }
        self.0.dispatching.set(false);
    }
}

/// A consumer's live connection to the store.
///
/// Dropping it detaches the listener.
pub struct Subscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Subscription {
    pub(crate) fn new(id: u64, store: Weak<StoreInner>) -> Self {
        Self { id, store }
    }

    /// Whether the backing store is still alive
    pub fn is_active(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Current snapshot, or `None` once the store is gone
    pub fn try_current(&self) -> Option<Arc<SiteContent>> {
        self.store.upgrade().map(|store| store.snapshot())
    }

    /// Current snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the store has been dropped: reading content without a live
    /// store behind the subscription is a wiring bug, not a runtime condition.
    pub fn current(&self) -> Arc<SiteContent> {
        match self.try_current() {
            Some(content) => content,
            None => panic!("content read outside an active subscription: the content store is gone"),
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.propagation.unregister(self.id);
        }
    }
}
