// ============================================================================
// observable-cell - Reactivity Module
// Comparison policy for change detection
// ============================================================================

pub mod equality;

// Re-export equality functions
pub use equality::{
    always_equals, by_field, default_equals_fn, eq_ignore_case, never_equals, strict_equals,
    text_aware_equals,
};
