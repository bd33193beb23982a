//! Change notification for stale product views.
//!
//! # Responsibility
//! - Let list/detail consumers register interest in collection changes.
//! - Signal, synchronously and fire-and-forget, after successful writes.
//!
//! # Invariants
//! - Listeners are invoked after the triggering write has returned success.
//! - No listener objects are threaded into the store layer; only the router
//!   calls `notify`.

use crate::router::locator::Locator;
use log::debug;

/// Registry of listeners told when data under a locator went stale.
///
/// Consumers are expected to re-query on signal. Delivery is synchronous
/// with no guarantee beyond "called once per successful mutation".
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<Box<dyn Fn(&Locator)>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for change signals.
    pub fn subscribe(&mut self, listener: impl Fn(&Locator) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Signals every listener that data under `locator` changed.
    pub fn notify(&self, locator: &Locator) {
        debug!(
            "event=change_notify module=notify status=ok locator={locator} listeners={}",
            self.listeners.len()
        );
        for listener in &self.listeners {
            listener(locator);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::ChangeNotifier;
    use crate::router::locator::Locator;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn notify_reaches_every_listener_in_registration_order() {
        let seen = Rc::new(Cell::new(0));
        let mut notifier = ChangeNotifier::new();
        for _ in 0..3 {
            let seen = Rc::clone(&seen);
            notifier.subscribe(move |_| seen.set(seen.get() + 1));
        }

        notifier.notify(&Locator::Collection);
        assert_eq!(seen.get(), 3);
        assert_eq!(notifier.listener_count(), 3);
    }

    #[test]
    fn notify_with_no_listeners_is_a_no_op() {
        let notifier = ChangeNotifier::new();
        notifier.notify(&Locator::Item(7));
    }
}
