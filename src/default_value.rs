//! The "is this the default value" predicate shared by `Maybe` and `Either`.
//!
//! Both [`Maybe::bind`](crate::Maybe::bind) and
//! [`Either::bind`](crate::Either::bind) refuse to invoke the bound function
//! when the wrapped value is the default value of its type. This module
//! decides what "default" means.
//!
//! Every type that is `Default + PartialEq` gets the predicate for free:
//!
//! - numeric types: zero
//! - `String`, `&str`, `Vec<T>` and other collections: empty
//! - `Option<T>`: `None`
//! - user structs deriving `Default` and `PartialEq`: the zero-initialized form
//!
//! # Examples
//!
//! ```rust
//! use monadex::DefaultValue;
//!
//! assert!(0_i32.is_default());
//! assert!(!42_i32.is_default());
//!
//! assert!("".is_default());
//! assert!(String::new().is_default());
//! assert!(!"hello".is_default());
//!
//! assert!(None::<u8>.is_default());
//! assert!(!Some(0_u8).is_default());
//! ```

/// Types whose values can be recognised as the type's default value.
///
/// The blanket implementation compares against `Self::default()`, so a
/// user type opts in by deriving `Default` and `PartialEq`:
///
/// ```rust
/// use monadex::DefaultValue;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// assert!(Point::default().is_default());
/// assert!(!Point { x: 1, y: 0 }.is_default());
/// ```
pub trait DefaultValue {
    /// Returns `true` if `self` equals the default value of its type.
    fn is_default(&self) -> bool;
}

impl<T> DefaultValue for T
where
    T: Default + PartialEq,
{
    #[inline]
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Default, PartialEq)]
    struct Account {
        owner: String,
        balance: u64,
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(-1, false)]
    #[case(i64::MAX, false)]
    fn integers_compare_to_zero(#[case] value: i64, #[case] expected: bool) {
        assert_eq!(value.is_default(), expected);
    }

    #[rstest]
    fn floats_compare_to_zero() {
        assert!(0.0_f64.is_default());
        assert!((-0.0_f64).is_default());
        assert!(!f64::NAN.is_default());
        assert!(!0.5_f32.is_default());
    }

    #[rstest]
    #[case("", true)]
    #[case(" ", false)]
    #[case("text", false)]
    fn strings_compare_to_empty(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(value.is_default(), expected);
        assert_eq!(value.to_string().is_default(), expected);
    }

    #[rstest]
    fn collections_compare_to_empty() {
        assert!(Vec::<i32>::new().is_default());
        assert!(!vec![0].is_default());
    }

    #[rstest]
    fn option_none_is_default() {
        assert!(None::<String>.is_default());
        assert!(!Some(String::new()).is_default());
    }

    #[rstest]
    fn bool_false_is_default() {
        assert!(false.is_default());
        assert!(!true.is_default());
    }

    #[rstest]
    fn derived_struct_compares_to_zero_initialized_form() {
        assert!(Account::default().is_default());
        assert!(
            !Account {
                owner: String::new(),
                balance: 10,
            }
            .is_default()
        );
    }
}
