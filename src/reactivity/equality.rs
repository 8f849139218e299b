// ============================================================================
// observable-cell - Equality Functions
// The comparison policy deciding whether a write counts as a change
// ============================================================================

use std::any::Any;

use crate::core::types::EqualsFn;

// =============================================================================
// STRICT EQUALITY
// =============================================================================

/// Strict structural equality using PartialEq.
///
/// # Example
/// ```
/// use observable_cell::reactivity::equality::strict_equals;
///
/// assert!(strict_equals(&42, &42));
/// assert!(!strict_equals(&42, &43));
/// assert!(!strict_equals(&"Hello", &"hello")); // case matters here
/// ```
pub fn strict_equals<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

// =============================================================================
// TEXT-AWARE EQUALITY (Default)
// =============================================================================

/// The default comparison policy: structural equality, except that textual
/// values (`String` and `&'static str`) compare case-insensitively.
///
/// The "is this T textual?" check is a runtime type check per concrete
/// instantiation, so one generic definition serves every cell type while
/// only the string types get case folding. Wrapper types such as
/// `Option<String>` are not textual and compare strictly.
///
/// # Example
/// ```
/// use observable_cell::reactivity::equality::text_aware_equals;
///
/// assert!(text_aware_equals(&String::from("Hello"), &String::from("hello")));
/// assert!(!text_aware_equals(&String::from("Hello"), &String::from("goodbye")));
/// assert!(text_aware_equals(&"HELLO", &"hello"));
///
/// // Non-textual types never case fold
/// assert!(!text_aware_equals(&Some(String::from("Hello")), &Some(String::from("hello"))));
/// assert!(text_aware_equals(&42, &42));
/// ```
pub fn text_aware_equals<T: PartialEq + Any>(a: &T, b: &T) -> bool {
    if let (Some(a), Some(b)) = (as_text(a), as_text(b)) {
        return eq_ignore_case(a, b);
    }
    a == b
}

/// Case-insensitive string comparison using per-char case folding.
///
/// Folding is locale-independent (ordinal): the unconditional Unicode
/// lowercase mappings, never locale-specific rules.
///
/// # Example
/// ```
/// use observable_cell::reactivity::equality::eq_ignore_case;
///
/// assert!(eq_ignore_case("Hello", "hELLO"));
/// assert!(!eq_ignore_case("Hello", "goodbye"));
/// assert!(eq_ignore_case("ÜBER", "über"));
/// ```
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// View a value as text if its concrete type is one of the textual types.
fn as_text<T: Any>(value: &T) -> Option<&str> {
    let any: &dyn Any = value;
    if let Some(s) = any.downcast_ref::<String>() {
        return Some(s.as_str());
    }
    if let Some(s) = any.downcast_ref::<&'static str>() {
        return Some(*s);
    }
    None
}

// =============================================================================
// FACTORY FUNCTIONS
// =============================================================================

/// Never equal - always returns false, so every write counts as a change.
///
/// # Example
/// ```
/// use observable_cell::reactivity::equality::never_equals;
///
/// assert!(!never_equals(&42, &42));
/// ```
pub fn never_equals<T>(_a: &T, _b: &T) -> bool {
    false
}

/// Always equal - always returns true, so no write ever counts as a change.
///
/// # Example
/// ```
/// use observable_cell::reactivity::equality::always_equals;
///
/// assert!(always_equals(&1, &2));
/// ```
pub fn always_equals<T>(_a: &T, _b: &T) -> bool {
    true
}

/// Create an equality closure comparing a single projected field.
///
/// Note the result is a closure, not an `EqualsFn<T>` function pointer;
/// for a cell's construction-time policy use a plain `fn` instead.
///
/// # Example
/// ```
/// use observable_cell::reactivity::equality::by_field;
///
/// #[derive(Clone)]
/// struct Point { x: i32, y: i32 }
///
/// let eq_by_x = by_field(|p: &Point| p.x);
/// assert!(eq_by_x(&Point { x: 1, y: 5 }, &Point { x: 1, y: 9 }));
/// ```
pub fn by_field<T, F, R>(field_fn: F) -> impl Fn(&T, &T) -> bool
where
    F: Fn(&T) -> R,
    R: PartialEq,
{
    move |a, b| field_fn(a) == field_fn(b)
}

/// Get the default comparison policy for a type (text-aware equality).
pub fn default_equals_fn<T: PartialEq + Any>() -> EqualsFn<T> {
    text_aware_equals
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_equals() {
        assert!(strict_equals(&42, &42));
        assert!(!strict_equals(&42, &43));
        assert!(strict_equals(&"hello", &"hello"));
        assert!(!strict_equals(&"Hello", &"hello"));
    }

    #[test]
    fn test_text_aware_string() {
        assert!(text_aware_equals(
            &String::from("Hello"),
            &String::from("hello")
        ));
        assert!(text_aware_equals(
            &String::from("HELLO"),
            &String::from("hello")
        ));
        assert!(!text_aware_equals(
            &String::from("Hello"),
            &String::from("goodbye")
        ));
        assert!(text_aware_equals(&String::new(), &String::new()));
    }

    #[test]
    fn test_text_aware_static_str() {
        assert!(text_aware_equals(&"Hello", &"hELLO"));
        assert!(!text_aware_equals(&"Hello", &"world"));
    }

    #[test]
    fn test_text_aware_non_textual_never_folds() {
        // The special case is for the string types only
        assert!(!text_aware_equals(
            &Some(String::from("Hello")),
            &Some(String::from("hello"))
        ));
        assert!(!text_aware_equals(
            &vec![String::from("Hello")],
            &vec![String::from("hello")]
        ));
        assert!(text_aware_equals(&42, &42));
        assert!(!text_aware_equals(&42, &43));
    }

    #[test]
    fn test_eq_ignore_case_unicode() {
        assert!(eq_ignore_case("über", "ÜBER"));
        assert!(eq_ignore_case("ΣΟΦΙΑ", "σοφια"));
        assert!(!eq_ignore_case("straße", "strasse")); // ß does not fold to ss
    }

    #[test]
    fn test_eq_ignore_case_length_mismatch() {
        assert!(!eq_ignore_case("abc", "ab"));
        assert!(!eq_ignore_case("", "a"));
        assert!(eq_ignore_case("", ""));
    }

    #[test]
    fn test_never_equals() {
        assert!(!never_equals(&42, &42));
        assert!(!never_equals(&"same", &"same"));
    }

    #[test]
    fn test_always_equals() {
        assert!(always_equals(&42, &43));
        assert!(always_equals(&"different", &"values"));
    }

    #[test]
    fn test_by_field() {
        #[derive(Clone)]
        struct Session {
            token: u64,
            last_seen: u32,
        }

        let eq_by_token = by_field(|s: &Session| s.token);

        let a = Session { token: 9, last_seen: 100 };
        let b = Session { token: 9, last_seen: 250 };
        let c = Session { token: 10, last_seen: 100 };

        // Same token counts as equal even when other fields drift
        assert!(eq_by_token(&a, &b));
        assert!(!eq_by_token(&a, &c));
    }

    #[test]
    fn test_default_equals_fn_is_text_aware() {
        let eq: EqualsFn<String> = default_equals_fn();
        assert!(eq(&String::from("A"), &String::from("a")));

        let eq_int: EqualsFn<i32> = default_equals_fn();
        assert!(eq_int(&1, &1));
        assert!(!eq_int(&1, &2));
    }
}
