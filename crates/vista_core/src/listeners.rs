//! Listener registries for reactive value subscriptions
//!
//! Each stateful component (scroll tracker, tab controller, theme holder)
//! owns a [`Listeners`] registry and notifies it when its observable value
//! changes. Subscriptions are identified by slot keys so they can be removed
//! without disturbing other subscribers.

use slotmap::{new_key_type, SlotMap};
use std::fmt;

new_key_type! {
    /// Handle returned by [`Listeners::subscribe`]
    pub struct ListenerId;
}

/// Listener callback type
pub type Listener<T> = Box<dyn FnMut(&T)>;

/// Registry of callbacks notified with values of type `T`
pub struct Listeners<T> {
    slots: SlotMap<ListenerId, Listener<T>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }

    /// Register a callback, returning a handle for later removal
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&T) + 'static,
    {
        self.slots.insert(Box::new(listener))
    }

    /// Remove a callback. Returns `false` if the handle was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.slots.remove(id).is_some()
    }

    /// Call every registered listener with `value`
    pub fn notify(&mut self, value: &T) {
        for (_, listener) in self.slots.iter_mut() {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_all_subscribers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();

        let a = seen.clone();
        listeners.subscribe(move |v: &i32| a.borrow_mut().push(*v));
        let b = seen.clone();
        listeners.subscribe(move |v: &i32| b.borrow_mut().push(v * 10));

        listeners.notify(&2);
        let mut values = seen.borrow().clone();
        values.sort_unstable();
        assert_eq!(values, vec![2, 20]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::new();

        let c = count.clone();
        let id = listeners.subscribe(move |_: &()| *c.borrow_mut() += 1);

        listeners.notify(&());
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.notify(&());

        assert_eq!(*count.borrow(), 1);
        assert!(listeners.is_empty());
    }
}
