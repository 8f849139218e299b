// ============================================================================
// observable-cell - Core Module
// Fundamental types for the cell: value storage and listener channels
// ============================================================================

pub mod types;

// Re-export commonly used items
pub use types::{CellInner, ChangeCallback, EqualsFn, SetCallback};
