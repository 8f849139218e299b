// ============================================================================
// observable-cell - Subscription Handle
// Scoped token that detaches exactly one registered listener
// ============================================================================

use std::cell::RefCell;
use std::fmt;

/// The detach action owned by a handle, run at most once
type DetachFn = Box<dyn FnOnce()>;

// =============================================================================
// SUBSCRIPTION HANDLE
// =============================================================================

/// A scoped token produced by every listener registration.
///
/// The handle owns a single detach action that removes exactly the listener
/// record it was created for. `release()` runs that action and clears it, so
/// repeated releases are guaranteed no-ops.
///
/// Releasing is the only unsubscribe path: dropping the handle without
/// releasing leaves the listener registered for the life of the cell. The
/// detach action holds the cell weakly, so an outstanding handle never keeps
/// a cell alive, and releasing after the cell is gone is a silent no-op.
///
/// # Example
///
/// ```
/// use observable_cell::cell;
///
/// let count = cell(0);
/// let handle = count.on_key_always(|| {}, false);
/// assert!(!handle.is_released());
///
/// handle.release();
/// handle.release(); // idempotent
/// assert!(handle.is_released());
/// ```
#[must_use = "dropping the handle without releasing it leaves the listener registered"]
pub struct SubscriptionHandle {
    detach: RefCell<Option<DetachFn>>,
}

impl SubscriptionHandle {
    /// Wrap a detach action in a new handle.
    pub(crate) fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: RefCell::new(Some(Box::new(detach))),
        }
    }

    /// Remove the listener this handle was created for.
    ///
    /// The first call runs the detach action; every later call is a no-op.
    pub fn release(&self) {
        // Drop the borrow before running the action.
        let detach = self.detach.borrow_mut().take();
        if let Some(detach) = detach {
            detach();
        }
    }

    /// Whether `release()` has already run.
    pub fn is_released(&self) -> bool {
        self.detach.borrow().is_none()
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("released", &self.is_released())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
