//! Typed publish/subscribe for the UI thread.
//!
//! Components that must not know about each other (the link dialog and the
//! preview, for instance) talk through an [`EventBus`]. Every subscription is
//! represented by a [`Subscription`] handle; dropping the handle removes the
//! handler, so a subscriber's lifetime is tied to whoever owns the handle.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Registry<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
}

impl<E> Registry<E> {
    fn contains(&self, id: u64) -> bool {
        self.handlers.iter().any(|(i, _)| *i == id)
    }
}

/// Single-threaded event bus. Clones share one subscriber list.
pub struct EventBus<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> EventBus<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 1,
                handlers: Vec::new(),
            })),
        }
    }

    /// Register `handler`. It stays registered until the returned handle is dropped.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&E) + 'static,
    {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            let handler: Handler<E> = Rc::new(RefCell::new(handler));
            registry.handlers.push((id, handler));
            id
        };

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().handlers.retain(|(i, _)| *i != id);
                }
            })),
        }
    }

    /// Deliver `event` to every current subscriber in registration order.
    ///
    /// Handlers may subscribe or drop subscriptions while being called. A
    /// handler that publishes to itself re-entrantly is skipped for the
    /// nested delivery.
    pub fn publish(&self, event: &E) {
        let snapshot: Vec<(u64, Handler<E>)> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(id, h)| (*id, Rc::clone(h)))
            .collect();

        for (id, handler) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            if let Ok(mut f) = handler.try_borrow_mut() {
                f(event);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

impl<E: 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.registry.borrow().handlers.len())
            .finish()
    }
}

/// Handle for a registered handler. Unsubscribes on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
