// ============================================================================
// observable-cell - Ergonomic Macros
// ============================================================================

/// Helper macro to clone variables into a move closure.
///
/// Listener callbacks are `'static`, so cells and counters usually have to
/// be cloned before moving into them. This trims that boilerplate.
///
/// # Usage
///
/// ```rust
/// use observable_cell::{cell, cloned};
///
/// let count = cell(0);
/// let label = cell(String::from("zero"));
///
/// let _handle = count.on_key(
///     cloned!(count, label => move || {
///         label.set(format!("count is {}", count.get()));
///     }),
///     false,
/// );
///
/// count.set(3);
/// assert_eq!(label.get(), "count is 3");
/// ```
#[macro_export]
macro_rules! cloned {
    ($($n:ident),+ => $e:expr) => {
        {
            $( let $n = $n.clone(); )+
            $e
        }
    };
}
