//! Resize event bus.
//!
//! A registry of named publishers. A container registers a name and gets a
//! [`Publisher`] whose `fire(width, height)` reaches every subscriber of
//! that name, in subscription order. Subscriptions are scoped: dropping the
//! returned [`Subscription`] removes the record, so containers that come
//! and go do not leave stale callbacks behind.
//!
//! The bus is single-threaded (`Rc`/`RefCell`). Callbacks run after the
//! subscriber list has been snapshotted, so they may subscribe, unsubscribe
//! or fire again without tripping over the borrow.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

/// Callback invoked with the publisher's latest `(width, height)`.
pub type ResizeCallback = Rc<dyn Fn(f64, f64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    publisher: String,
    callback: ResizeCallback,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    publishers: Vec<(u64, String)>,
    subscribers: Vec<Subscriber>,
}

impl BusInner {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Handle to a resize bus. Cloning shares the same registry.
#[derive(Clone, Default)]
pub struct ResizeBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ResizeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a publisher under `name`. Registering the same name more than
    /// once is allowed; every publisher of a name reaches the same
    /// subscribers.
    pub fn register(&self, name: impl Into<String>) -> Publisher {
        let name = name.into();
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        inner.publishers.push((id, name.clone()));
        Publisher {
            id,
            name,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Subscribe `callback` to broadcasts from `publisher`.
    ///
    /// The callback stays registered until the returned guard is dropped or
    /// [`Subscription::unsubscribe`] is called.
    pub fn subscribe(
        &self,
        publisher: impl Into<String>,
        callback: impl Fn(f64, f64) + 'static,
    ) -> Subscription {
        let publisher = publisher.into();
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id());
        trace!(%publisher, ?id, "subscribe");
        inner.subscribers.push(Subscriber {
            id,
            publisher: publisher.clone(),
            callback: Rc::new(callback),
        });
        Subscription {
            id,
            publisher,
            bus: Rc::downgrade(&self.inner),
            detached: false,
        }
    }

    /// Deliver `(width, height)` to every subscriber of `publisher`.
    /// Returns the number of callbacks invoked.
    pub fn broadcast(&self, publisher: &str, width: f64, height: f64) -> usize {
        deliver(&self.inner, publisher, width, height)
    }

    pub fn subscriber_count(&self, publisher: &str) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.publisher == publisher)
            .count()
    }

    pub fn publisher_count(&self, publisher: &str) -> usize {
        self.inner
            .borrow()
            .publishers
            .iter()
            .filter(|(_, name)| name == publisher)
            .count()
    }
}

impl fmt::Debug for ResizeBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ResizeBus")
            .field("publishers", &inner.publishers.len())
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

fn deliver(inner: &Rc<RefCell<BusInner>>, publisher: &str, width: f64, height: f64) -> usize {
    let callbacks: Vec<ResizeCallback> = inner
        .borrow()
        .subscribers
        .iter()
        .filter(|s| s.publisher == publisher)
        .map(|s| Rc::clone(&s.callback))
        .collect();
    trace!(publisher, width, height, count = callbacks.len(), "broadcast");
    for callback in &callbacks {
        callback(width, height);
    }
    callbacks.len()
}

/// The fire side of a registration. Removing the registration entry happens
/// on drop; subscribers are unaffected.
pub struct Publisher {
    id: u64,
    name: String,
    bus: Weak<RefCell<BusInner>>,
}

impl Publisher {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Broadcast a new size. A publisher that outlived its bus fires into
    /// the void and returns 0.
    pub fn fire(&self, width: f64, height: f64) -> usize {
        match self.bus.upgrade() {
            Some(inner) => deliver(&inner, &self.name, width, height),
            None => 0,
        }
    }
}

impl Drop for Publisher {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.publishers.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

impl fmt::Debug for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher").field("name", &self.name).finish()
    }
}

/// Guard for one subscription record.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: SubscriptionId,
    publisher: String,
    bus: Weak<RefCell<BusInner>>,
    detached: bool,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// Remove the record now.
    pub fn unsubscribe(mut self) {
        self.remove();
    }

    /// Keep the record for the lifetime of the bus.
    pub fn detach(mut self) {
        self.detached = true;
    }

    fn remove(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        if let Some(inner) = self.bus.upgrade() {
            match inner.try_borrow_mut() {
                Ok(mut inner) => {
                    let id = self.id;
                    inner.subscribers.retain(|s| s.id != id);
                    trace!(publisher = %self.publisher, ?id, "unsubscribe");
                }
                Err(_) => {
                    tracing::warn!(
                        publisher = %self.publisher,
                        "bus busy while unsubscribing; record left in place"
                    );
                }
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("publisher", &self.publisher)
            .finish()
    }
}
