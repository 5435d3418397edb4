//! Observable state container.
//!
//! DESIGN
//! ======
//! One owner mutates the state through [`StateHub::update`]; every update
//! pushes a snapshot to all subscribers in registration order. A subscriber
//! that returns `Err` is logged and skipped; the rest still run.
//!
//! Single-threaded by construction (`RefCell`). Subscribers must not call
//! `subscribe` from inside a notification.

#[cfg(test)]
#[path = "hub_test.rs"]
mod hub_test;

use std::cell::RefCell;

/// Callback invoked with the state after each update.
pub type Subscriber<T> = Box<dyn Fn(&T) -> Result<(), String>>;

pub struct StateHub<T> {
    state: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
}

impl<T: Clone> StateHub<T> {
    pub fn new(initial: T) -> Self {
        Self { state: RefCell::new(initial), subscribers: RefCell::new(Vec::new()) }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> T {
        self.state.borrow().clone()
    }

    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(&T) -> Result<(), String> + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Mutate the state, then notify.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        self.notify(&snapshot);
    }

    fn notify(&self, snapshot: &T) {
        for (index, subscriber) in self.subscribers.borrow().iter().enumerate() {
            if let Err(e) = subscriber(snapshot) {
                log::error!("state subscriber {index} failed: {e}");
            }
        }
    }
}

impl<T: Clone + Default> Default for StateHub<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
