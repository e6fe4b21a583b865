//! # Observable State Cell
//!
//! A single-threaded value holder that pushes every new value to its
//! subscribers. New subscribers immediately receive the current value, so a
//! view attached late still renders the latest state.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use thread_core::state_cell::StateCell;
//!
//! let mut cell = StateCell::new(1);
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&seen);
//! cell.subscribe(move |value: &i32| sink.borrow_mut().push(*value));
//! cell.set(2);
//!
//! assert_eq!(*seen.borrow(), vec![1, 2]);
//! ```

use std::fmt;

/// Handle returned by [`StateCell::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Latest-value cell with push notification.
pub struct StateCell<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T> StateCell<T> {
    /// Create a cell holding `value`, with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify every subscriber, in subscription order.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
    }

    /// Replace the value with one derived from the current value.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Register `subscriber`; it is called right away with the current value.
    pub fn subscribe(&mut self, mut subscriber: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        subscriber(&self.value);
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<i32>>>, impl FnMut(&i32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: &i32| sink.borrow_mut().push(*value))
    }

    #[test]
    fn test_replays_latest_on_subscribe() {
        let mut cell = StateCell::new(1);
        cell.set(5);

        let (seen, subscriber) = recorder();
        cell.subscribe(subscriber);
        assert_eq!(*seen.borrow(), vec![5]);
    }

    #[test]
    fn test_publishes_every_set() {
        let mut cell = StateCell::new(0);
        let (seen, subscriber) = recorder();
        cell.subscribe(subscriber);

        cell.set(1);
        cell.set(1);
        cell.update(|v| v + 10);
        assert_eq!(*seen.borrow(), vec![0, 1, 1, 11]);
        assert_eq!(*cell.get(), 11);
    }

    #[test]
    fn test_multiple_readers() {
        let mut cell = StateCell::new(0);
        let (first, a) = recorder();
        let (second, b) = recorder();
        cell.subscribe(a);
        cell.set(3);
        cell.subscribe(b);
        cell.set(4);

        assert_eq!(*first.borrow(), vec![0, 3, 4]);
        assert_eq!(*second.borrow(), vec![3, 4]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut cell = StateCell::new(0);
        let (seen, subscriber) = recorder();
        let id = cell.subscribe(subscriber);

        assert!(cell.unsubscribe(id));
        assert!(!cell.unsubscribe(id));
        assert_eq!(cell.subscriber_count(), 0);

        cell.set(9);
        assert_eq!(*seen.borrow(), vec![0]);
    }
}
