// ============================================================================
// observable-cell - Observable Cell Primitive
// The public handle: value accessor, match tests, listener registration
// ============================================================================

use std::rc::Rc;

use crate::core::types::{CellInner, ChangeCallback, EqualsFn, SetCallback};
use crate::primitives::handle::SubscriptionHandle;
use crate::reactivity::equality::text_aware_equals;
use crate::text::ToText;

// =============================================================================
// OBSERVABLECELL<T> - The public cell handle
// =============================================================================

/// A container for a single value that notifies listeners on writes.
///
/// Every write fires the set channel; writes that change the value (under the
/// cell's comparison policy) additionally fire the change channel. Each
/// registration returns a [`SubscriptionHandle`] whose `release()` detaches
/// that one listener.
///
/// The default comparison policy is structural equality, with one special
/// case: cells of `String` or `&'static str` compare case-insensitively.
///
/// # Example
///
/// ```
/// use observable_cell::cell;
///
/// let count = cell(0);
/// assert_eq!(count.get(), 0);
///
/// let handle = count.on_key(|| println!("count changed"), false);
/// count.set(5);
/// assert_eq!(count.get(), 5);
/// handle.release();
/// ```
pub struct ObservableCell<T> {
    inner: Rc<CellInner<T>>,
}

// Manual Clone: shares the same interior, no T: Clone bound needed.
impl<T> Clone for ObservableCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> ObservableCell<T> {
    /// Create a new cell with the given initial value and the default
    /// comparison policy (text-aware equality).
    pub fn new(value: T) -> Self
    where
        T: PartialEq,
    {
        Self::new_with_equals(value, text_aware_equals)
    }

    /// Create a new cell with a custom equality function.
    ///
    /// The equality function decides which writes count as changes, and is
    /// also what [`matches`](Self::matches) tests with.
    pub fn new_with_equals(value: T, equals: EqualsFn<T>) -> Self {
        Self {
            inner: Rc::new(CellInner::new_with_equals(value, equals)),
        }
    }

    /// Get the current value (cloning).
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.get()
    }

    /// Try to get the current value, returning None if the borrow fails.
    ///
    /// In normal usage this always succeeds; it exists for symmetry with
    /// code that cannot rule out a concurrent mutable borrow.
    pub fn try_get(&self) -> Option<T>
    where
        T: Clone,
    {
        Some(self.inner.get())
    }

    /// Access the current value with a closure (avoids cloning).
    ///
    /// # Example
    ///
    /// ```
    /// use observable_cell::cell;
    ///
    /// let items = cell(vec![1, 2, 3]);
    /// let sum = items.with(|v| v.iter().sum::<i32>());
    /// assert_eq!(sum, 6);
    /// ```
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }

    /// Write a new value.
    ///
    /// Fires every set-channel listener with the new value, then, only if the
    /// value changed under the comparison policy, every change-channel
    /// listener with (old, new). Listeners run synchronously on the caller's
    /// stack; a listener may itself write to this cell, in which case the
    /// nested write's notifications complete before the outer pass resumes.
    pub fn set(&self, value: T)
    where
        T: Clone,
    {
        self.inner.set(value);
    }

    /// Update the value in place using a closure.
    ///
    /// Routed through [`set`](Self::set), so notification semantics are
    /// identical to a plain write of the resulting value.
    ///
    /// # Example
    ///
    /// ```
    /// use observable_cell::cell;
    ///
    /// let count = cell(0);
    /// count.update(|n| *n += 1);
    /// assert_eq!(count.get(), 1);
    /// ```
    pub fn update(&self, f: impl FnOnce(&mut T))
    where
        T: Clone,
    {
        let mut next = self.inner.get();
        f(&mut next);
        self.inner.set(next);
    }

    /// Write a new value, returning the previous one.
    pub fn replace(&self, value: T) -> T
    where
        T: Clone,
    {
        let old = self.inner.get();
        self.inner.set(value);
        old
    }

    /// Whether the current value equals `target` under the cell's
    /// comparison policy.
    ///
    /// # Example
    ///
    /// ```
    /// use observable_cell::cell;
    ///
    /// let name = cell(String::from("Hello"));
    /// assert!(name.matches(&String::from("hello"))); // case-insensitive for strings
    /// assert!(!name.matches(&String::from("goodbye")));
    /// ```
    pub fn matches(&self, target: &T) -> bool {
        let equals = self.inner.equals_fn();
        self.inner.with(|current| equals(current, target))
    }

    // =========================================================================
    // Raw channel registration
    // =========================================================================

    /// Register a set-channel listener: called with the written value on
    /// every write, changed or not.
    pub fn on_set(&self, callback: impl Fn(&T) + 'static) -> SubscriptionHandle {
        let id = self.inner.add_set_listener(Rc::new(callback));
        self.detach_set(id)
    }

    /// Register a change-channel listener: called with (old, new) only on
    /// writes that change the value.
    pub fn on_change(&self, callback: impl Fn(&T, &T) + 'static) -> SubscriptionHandle {
        let id = self.inner.add_change_listener(Rc::new(callback));
        self.detach_change(id)
    }

    // =========================================================================
    // Match family: target-conditional registration
    // =========================================================================

    /// Register a combined match/mismatch handler on the change channel.
    ///
    /// On every value-changing write the handler tests the new value against
    /// `target` under the comparison policy and calls `on_match` or
    /// `on_mismatch` accordingly. With `invoke_immediately` the handler also
    /// runs once at registration, evaluated against the current value as a
    /// synthetic old == new == current event.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use observable_cell::cell;
    ///
    /// let state = cell(10);
    /// let matched = Rc::new(Cell::new(0));
    ///
    /// let m = matched.clone();
    /// let _handle = state.on_match(10, move || m.set(m.get() + 1), || {}, true);
    /// assert_eq!(matched.get(), 1); // immediate invocation against current value
    ///
    /// state.set(10); // unchanged: no further call
    /// assert_eq!(matched.get(), 1);
    /// ```
    pub fn on_match(
        &self,
        target: T,
        on_match: impl Fn() + 'static,
        on_mismatch: impl Fn() + 'static,
        invoke_immediately: bool,
    ) -> SubscriptionHandle
    where
        T: Clone,
    {
        let equals = self.inner.equals_fn();
        let handler: ChangeCallback<T> = Rc::new(move |_old: &T, new: &T| {
            if equals(new, &target) {
                on_match();
            } else {
                on_mismatch();
            }
        });

        let id = self.inner.add_change_listener(Rc::clone(&handler));
        if invoke_immediately {
            let current = self.inner.get();
            handler(&current, &current);
        }
        self.detach_change(id)
    }

    /// Register a combined match/mismatch handler on the set channel.
    ///
    /// Like [`on_match`](Self::on_match), but the handler fires on every
    /// write, evaluating the written value whether it changed or not.
    pub fn on_match_always(
        &self,
        target: T,
        on_match: impl Fn() + 'static,
        on_mismatch: impl Fn() + 'static,
        invoke_immediately: bool,
    ) -> SubscriptionHandle
    where
        T: Clone,
    {
        let equals = self.inner.equals_fn();
        let handler: SetCallback<T> = Rc::new(move |value: &T| {
            if equals(value, &target) {
                on_match();
            } else {
                on_mismatch();
            }
        });

        let id = self.inner.add_set_listener(Rc::clone(&handler));
        if invoke_immediately {
            let current = self.inner.get();
            handler(&current);
        }
        self.detach_set(id)
    }

    // =========================================================================
    // Key family: value-ignoring registration
    // =========================================================================

    /// Register a value-ignoring callback on the change channel: fired
    /// whenever the value actually changes.
    ///
    /// With `invoke_immediately` the callback also runs once synchronously at
    /// registration, independent of any write.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use observable_cell::cell;
    ///
    /// let count = cell(5);
    /// let calls = Rc::new(Cell::new(0));
    ///
    /// let c = calls.clone();
    /// let _handle = count.on_key(move || c.set(c.get() + 1), true);
    /// assert_eq!(calls.get(), 1); // immediate, before any write
    /// ```
    pub fn on_key(&self, callback: impl Fn() + 'static, invoke_immediately: bool) -> SubscriptionHandle {
        let callback = Rc::new(callback);
        let handler: ChangeCallback<T> = {
            let callback = Rc::clone(&callback);
            Rc::new(move |_: &T, _: &T| callback())
        };

        let id = self.inner.add_change_listener(handler);
        if invoke_immediately {
            callback();
        }
        self.detach_change(id)
    }

    /// Register a value-ignoring callback on the set channel: fired on every
    /// write, changed or not.
    pub fn on_key_always(
        &self,
        callback: impl Fn() + 'static,
        invoke_immediately: bool,
    ) -> SubscriptionHandle {
        let callback = Rc::new(callback);
        let handler: SetCallback<T> = {
            let callback = Rc::clone(&callback);
            Rc::new(move |_: &T| callback())
        };

        let id = self.inner.add_set_listener(handler);
        if invoke_immediately {
            callback();
        }
        self.detach_set(id)
    }

    // =========================================================================
    // Introspection and rendering
    // =========================================================================

    /// Number of currently registered set-channel listeners.
    pub fn set_listener_count(&self) -> usize {
        self.inner.set_listener_count()
    }

    /// Number of currently registered change-channel listeners.
    pub fn change_listener_count(&self) -> usize {
        self.inner.change_listener_count()
    }

    /// Textual representation of the current value.
    ///
    /// Cells of `Option<T>` render `None` as the literal `"null"`.
    ///
    /// # Example
    ///
    /// ```
    /// use observable_cell::{cell, ObservableCell};
    ///
    /// assert_eq!(cell(42).to_text(), "42");
    ///
    /// let maybe: ObservableCell<Option<i32>> = cell(None);
    /// assert_eq!(maybe.to_text(), "null");
    /// ```
    pub fn to_text(&self) -> String
    where
        T: ToText,
    {
        self.inner.with(ToText::to_text)
    }

    fn detach_set(&self, id: u64) -> SubscriptionHandle {
        let cell = Rc::downgrade(&self.inner);
        SubscriptionHandle::new(move || {
            if let Some(inner) = cell.upgrade() {
                inner.remove_set_listener(id);
            }
        })
    }

    fn detach_change(&self, id: u64) -> SubscriptionHandle {
        let cell = Rc::downgrade(&self.inner);
        SubscriptionHandle::new(move || {
            if let Some(inner) = cell.upgrade() {
                inner.remove_change_listener(id);
            }
        })
    }
}

impl<T: ToText + 'static> std::fmt::Display for ObservableCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.with(|value| {
            f.debug_struct("ObservableCell")
                .field("value", value)
                .field("set_listeners", &self.inner.set_listener_count())
                .field("change_listeners", &self.inner.change_listener_count())
                .finish()
        })
    }
}

// =============================================================================
// CELL CREATION FUNCTIONS
// =============================================================================

/// Create a new observable cell with the default comparison policy.
///
/// # Example
///
/// ```
/// use observable_cell::cell;
///
/// let count = cell(0);
/// let name = cell(String::from("hello"));
///
/// count.set(42);
/// assert_eq!(count.get(), 42);
/// ```
pub fn cell<T>(value: T) -> ObservableCell<T>
where
    T: PartialEq + 'static,
{
    ObservableCell::new(value)
}

/// Create a cell with a custom equality function.
///
/// # Example
///
/// ```
/// use observable_cell::{cell_with_equals, reactivity::equality::never_equals};
///
/// // Every write counts as a change
/// let always_notify = cell_with_equals(0, never_equals);
/// assert!(!always_notify.matches(&0));
/// ```
pub fn cell_with_equals<T>(value: T, equals: EqualsFn<T>) -> ObservableCell<T>
where
    T: 'static,
{
    ObservableCell::new_with_equals(value, equals)
}

// =============================================================================
// TESTS
// =============================================================================
