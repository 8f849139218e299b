// ============================================================================
// observable-cell - Textual Rendering
// ToText: the rendering behind ObservableCell::to_text() and Display
// ============================================================================

/// Textual representation of a cell value.
///
/// A dedicated trait rather than `Display` so that `Option<T>` can render
/// its absent state as the literal `"null"` (trait coherence rules out a
/// `Display` blanket impl alongside an `Option` special case).
///
/// # Example
///
/// ```
/// use observable_cell::ToText;
///
/// assert_eq!(42.to_text(), "42");
/// assert_eq!(Some(42).to_text(), "42");
/// assert_eq!(None::<i32>.to_text(), "null");
/// ```
pub trait ToText {
    /// Render the value as text.
    fn to_text(&self) -> String;
}

impl<T: ToText> ToText for Option<T> {
    fn to_text(&self) -> String {
        match self {
            Some(value) => value.to_text(),
            None => String::from("null"),
        }
    }
}

macro_rules! impl_to_text_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToText for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_to_text_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    &'static str,
);

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_render_via_display() {
        assert_eq!(42i32.to_text(), "42");
        assert_eq!(true.to_text(), "true");
        assert_eq!('x'.to_text(), "x");
        assert_eq!(1.5f64.to_text(), "1.5");
    }

    #[test]
    fn strings_render_verbatim() {
        assert_eq!(String::from("hello").to_text(), "hello");
        assert_eq!("hello".to_text(), "hello");
    }

    #[test]
    fn option_renders_null_when_absent() {
        assert_eq!(None::<i32>.to_text(), "null");
        assert_eq!(Some(42).to_text(), "42");
        assert_eq!(Some(String::from("hi")).to_text(), "hi");

        // Nesting forwards until the first absent layer
        assert_eq!(Some(Some(1)).to_text(), "1");
        assert_eq!(Some(None::<i32>).to_text(), "null");
    }
}
