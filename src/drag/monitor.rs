//! In-process drop-event stream.
//!
//! Stands in for the gesture bridge's global monitor: UI adapters feed
//! completed drops into [`DragMonitor::emit`], and interested parties hold a
//! [`Subscription`] for as long as they want deliveries. Everything is
//! single-threaded; dispatch happens synchronously on the caller's stack.

use crate::drag::event::DropEvent;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type DropHandler = Rc<dyn Fn(&DropEvent)>;
type SubscriberList = Rc<RefCell<Vec<(u64, DropHandler)>>>;

/// Global drop-event source
#[derive(Default)]
pub struct DragMonitor {
    subscribers: SubscriberList,
    next_id: Cell<u64>,
}

impl DragMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a drop handler for the lifetime of the returned handle
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&DropEvent) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(handler)));
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    /// Delivers one drop event to every live subscriber, in subscription
    /// order
    ///
    /// The subscriber list is copied before dispatch so a handler may
    /// subscribe or unsubscribe reentrantly without poisoning the walk.
    pub fn emit(&self, event: &DropEvent) {
        let handlers: Vec<DropHandler> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

/// Live registration on a [`DragMonitor`]
///
/// Unregisters when dropped, so a subscription held by an owning scope is
/// released through every exit path.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    subscribers: Weak<RefCell<Vec<(u64, DropHandler)>>>,
}

impl Subscription {
    /// Explicit teardown; equivalent to dropping the handle
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::event::{SourceData, TargetData};

    fn event() -> DropEvent {
        DropEvent::new(SourceData::card("todo", 0), vec![TargetData::column("done")])
    }

    #[test]
    fn test_emit_reaches_subscriber() {
        let monitor = DragMonitor::new();
        let seen = Rc::new(Cell::new(0));

        let seen_in_handler = Rc::clone(&seen);
        let _subscription = monitor.subscribe(move |_| {
            seen_in_handler.set(seen_in_handler.get() + 1);
        });

        monitor.emit(&event());
        monitor.emit(&event());

        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_dropped_subscription_stops_delivery() {
        let monitor = DragMonitor::new();
        let seen = Rc::new(Cell::new(0));

        let seen_in_handler = Rc::clone(&seen);
        let subscription = monitor.subscribe(move |_| {
            seen_in_handler.set(seen_in_handler.get() + 1);
        });

        monitor.emit(&event());
        drop(subscription);
        monitor.emit(&event());

        assert_eq!(seen.get(), 1);
        assert_eq!(monitor.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_is_explicit_teardown() {
        let monitor = DragMonitor::new();
        let subscription = monitor.subscribe(|_| {});

        assert_eq!(monitor.subscriber_count(), 1);
        subscription.unsubscribe();
        assert_eq!(monitor.subscriber_count(), 0);
    }

    #[test]
    fn test_subscribers_receive_in_subscription_order() {
        let monitor = DragMonitor::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let _a = monitor.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        let _b = monitor.subscribe(move |_| second.borrow_mut().push("second"));

        monitor.emit(&event());

        assert_eq!(*order.borrow(), ["first", "second"]);
    }
}
