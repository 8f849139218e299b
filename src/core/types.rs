// ============================================================================
// observable-cell - Type Definitions
// The shared interior behind ObservableCell<T>: value storage and the two
// listener channels
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================================
// CALLBACK TYPES
// =============================================================================

/// Equality function type for comparing cell values
pub type EqualsFn<T> = fn(&T, &T) -> bool;

/// A set-channel listener: receives the newly written value on every write.
pub type SetCallback<T> = Rc<dyn Fn(&T)>;

/// A change-channel listener: receives (old, new) when a write alters the value.
pub type ChangeCallback<T> = Rc<dyn Fn(&T, &T)>;

// =============================================================================
// CELL INNER (the data behind ObservableCell<T>)
// =============================================================================

/// The internal data for an observable cell.
///
/// This is separate from ObservableCell<T> so the public handle can stay a
/// cheap Rc wrapper, and so unsubscribe handles can hold a Weak back-reference
/// to the listener channels without keeping the cell alive.
///
/// Listener records are (id, callback) pairs kept in registration order.
/// The id is what an unsubscribe handle removes by, so registering the same
/// closure twice yields two independently removable records.
pub struct CellInner<T> {
    /// The current value
    value: RefCell<T>,

    /// Equality function deciding whether a write counts as a change
    equals: EqualsFn<T>,

    /// Next listener record id (monotonically increasing, never reused)
    next_listener_id: Cell<u64>,

    /// Set channel: fired on every write, in registration order
    set_listeners: RefCell<Vec<(u64, SetCallback<T>)>>,

    /// Change channel: fired only on value-altering writes, in registration order
    change_listeners: RefCell<Vec<(u64, ChangeCallback<T>)>>,
}

impl<T> CellInner<T> {
    /// Create a new cell interior with the given value and equality function.
    pub fn new_with_equals(value: T, equals: EqualsFn<T>) -> Self {
        Self {
            value: RefCell::new(value),
            equals,
            next_listener_id: Cell::new(0),
            set_listeners: RefCell::new(Vec::new()),
            change_listeners: RefCell::new(Vec::new()),
        }
    }

    /// Get the current value (cloning)
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Get the current value with a closure (avoids clone)
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Write a new value and run the notification pass.
    ///
    /// Order: store the value, then the full set-channel pass, then - only if
    /// old and new differ under the equality function - the change-channel
    /// pass. Both channels are snapshotted before any listener runs, so
    /// listeners registered, removed, or re-entering during the pass cannot
    /// perturb it. No RefCell borrow is held while listeners run, which is
    /// what allows a listener to write back into the same cell: the nested
    /// write completes its own full pass before control returns.
    pub fn set(&self, value: T)
    where
        T: Clone,
    {
        let old = {
            let mut slot = self.value.borrow_mut();
            std::mem::replace(&mut *slot, value.clone())
        };
        let new = value;

        let set_pass: Vec<SetCallback<T>> = self
            .set_listeners
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        let change_pass: Vec<ChangeCallback<T>> = if (self.equals)(&old, &new) {
            Vec::new()
        } else {
            self.change_listeners
                .borrow()
                .iter()
                .map(|(_, cb)| Rc::clone(cb))
                .collect()
        };

        for cb in &set_pass {
            cb(&new);
        }
        for cb in &change_pass {
            cb(&old, &new);
        }
    }

    /// Get the equality function
    pub fn equals_fn(&self) -> EqualsFn<T> {
        self.equals
    }

    /// Append a listener to the set channel, returning its record id.
    pub fn add_set_listener(&self, callback: SetCallback<T>) -> u64 {
        let id = self.next_id();
        self.set_listeners.borrow_mut().push((id, callback));
        id
    }

    /// Append a listener to the change channel, returning its record id.
    pub fn add_change_listener(&self, callback: ChangeCallback<T>) -> u64 {
        let id = self.next_id();
        self.change_listeners.borrow_mut().push((id, callback));
        id
    }

    /// Remove a set-channel record by id. No-op if already removed.
    pub fn remove_set_listener(&self, id: u64) {
        self.set_listeners
            .borrow_mut()
            .retain(|(entry_id, _)| *entry_id != id);
    }

    /// Remove a change-channel record by id. No-op if already removed.
    pub fn remove_change_listener(&self, id: u64) {
        self.change_listeners
            .borrow_mut()
            .retain(|(entry_id, _)| *entry_id != id);
    }

    /// Number of currently registered set-channel listeners
    pub fn set_listener_count(&self) -> usize {
        self.set_listeners.borrow().len()
    }

    /// Number of currently registered change-channel listeners
    pub fn change_listener_count(&self) -> usize {
        self.change_listeners.borrow().len()
    }

    fn next_id(&self) -> u64 {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        id
    }
}

// =============================================================================
// TESTS
// =============================================================================
