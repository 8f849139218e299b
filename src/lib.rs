// ============================================================================
// observable-cell - A Single-Value Observable Cell for Rust
// ============================================================================
//
// A container holding one typed value with two notification channels:
// the set channel fires on every write, the change channel only on writes
// that alter the value under the cell's comparison policy. Registrations
// return scoped handles whose release() detaches exactly one listener.
// ============================================================================

mod macros;

pub mod core;
pub mod primitives;
pub mod reactivity;
pub mod text;

// Re-export core items at crate root for ergonomic access
pub use crate::core::types::{CellInner, ChangeCallback, EqualsFn, SetCallback};

// Re-export primitives at crate root
pub use crate::primitives::cell::{cell, cell_with_equals, ObservableCell};
pub use crate::primitives::handle::SubscriptionHandle;

// Re-export the comparison policy functions
pub use crate::reactivity::equality::{
    always_equals, by_field, default_equals_fn, eq_ignore_case, never_equals, strict_equals,
    text_aware_equals,
};

// Re-export textual rendering
pub use crate::text::ToText;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // =========================================================================
    // End-to-end behavior of the public surface
    // =========================================================================

    #[test]
    fn set_channel_count_equals_registered_listeners_per_write() {
        let c = cell(0);
        let calls = Rc::new(Cell::new(0));

        let handles: Vec<SubscriptionHandle> = (0..4)
            .map(|_| {
                let k = calls.clone();
                c.on_key_always(move || k.set(k.get() + 1), false)
            })
            .collect();

        c.set(0); // unchanged write still hits the whole set channel
        assert_eq!(calls.get(), 4);

        handles[1].release();
        c.set(1);
        assert_eq!(calls.get(), 7);
    }

    #[test]
    fn change_channel_fires_each_listener_exactly_once_in_order() {
        let c = cell(0);
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));

        let mut handles = Vec::new();
        for tag in ["first", "second", "third"] {
            let o = order.clone();
            handles.push(c.on_key(move || o.borrow_mut().push(tag), false));
        }

        c.set(1);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);

        order.borrow_mut().clear();
        c.set(1); // unchanged: nobody fires
        assert!(order.borrow().is_empty());
    }

    #[test]
    fn match_family_full_scenario() {
        // Cell at 10; combined handler registered with immediate invocation.
        let c = cell(10);
        let matched = Rc::new(Cell::new(0));
        let mismatched = Rc::new(Cell::new(0));

        let m = matched.clone();
        let mm = mismatched.clone();
        let _handle = c.on_match(
            10,
            move || m.set(m.get() + 1),
            move || mm.set(mm.get() + 1),
            true,
        );
        // Immediate call against the current value: match.
        assert_eq!((matched.get(), mismatched.get()), (1, 0));

        // Write 10 again: unchanged, no call.
        c.set(10);
        assert_eq!((matched.get(), mismatched.get()), (1, 0));

        // Write 20: changed, mismatch.
        c.set(20);
        assert_eq!((matched.get(), mismatched.get()), (1, 1));

        // Write 10: changed, match.
        c.set(10);
        assert_eq!((matched.get(), mismatched.get()), (2, 1));
    }

    #[test]
    fn string_cells_match_case_insensitively() {
        let s = cell(String::from("Hello"));
        assert!(s.matches(&String::from("hello")));
        assert!(!s.matches(&String::from("goodbye")));

        // Non-textual values never case fold
        let wrapped = cell(Some(String::from("Hello")));
        assert!(!wrapped.matches(&Some(String::from("hello"))));
    }

    #[test]
    fn cloned_macro_in_listener() {
        let count = cell(0);
        let label = cell(String::from("-"));

        let _handle = count.on_key(
            cloned!(count, label => move || {
                label.set(format!("count is {}", count.get()));
            }),
            false,
        );

        count.set(2);
        assert_eq!(label.get(), "count is 2");
    }

    #[test]
    fn listener_detaching_itself_mid_pass_leaves_others_intact() {
        let c = cell(0);
        let later = Rc::new(Cell::new(0));

        // First listener releases its own handle during its own invocation.
        let own_handle: Rc<std::cell::RefCell<Option<SubscriptionHandle>>> =
            Rc::new(std::cell::RefCell::new(None));
        let slot = own_handle.clone();
        let handle = c.on_key_always(
            move || {
                if let Some(h) = slot.borrow().as_ref() {
                    h.release();
                }
            },
            false,
        );
        *own_handle.borrow_mut() = Some(handle);

        let l = later.clone();
        let _second = c.on_key_always(move || l.set(l.get() + 1), false);

        c.set(1);
        assert_eq!(later.get(), 1, "self-release must not skip later listeners");
        assert_eq!(c.set_listener_count(), 1);

        c.set(2);
        assert_eq!(later.get(), 2);
    }
}
