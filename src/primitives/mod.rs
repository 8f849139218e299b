// ============================================================================
// observable-cell - Primitives Module
// The public primitives: the cell and its unsubscribe handle
// ============================================================================

pub mod cell;
pub mod handle;

// Re-export for convenience
pub use cell::{cell, cell_with_equals, ObservableCell};
pub use handle::SubscriptionHandle;
