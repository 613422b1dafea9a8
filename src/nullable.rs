//! A value that is either present or absent.
//!
//! `Nullable<T>` is the container the demos are built around. Every way of
//! getting a value out of it is explicit about what happens when nothing is
//! there: fall back eagerly, fall back lazily, raise a caller-built error, or
//! fail with [`Error::IllegalState`].

use crate::error::{Error, Result};
use std::fmt;

pub const ABSENT_VALUE_GIVEN: &str = "absent value was given";
pub const NO_VALUE_PRESENT: &str = "no value present";

// =============================================================================
// Milestone 1: The container and its factories
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    Present(T),
    Absent,
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> Nullable<T> {
    /// Wraps a value known to exist.
    pub const fn present(value: T) -> Self {
        Nullable::Present(value)
    }

    /// Wraps a raw value that the caller claims is there.
    /// An absent input is a caller bug and is reported as `InvalidArgument`.
    pub fn try_present(raw: Option<T>) -> Result<Self> {
        match raw {
            Some(value) => Ok(Nullable::Present(value)),
            None => Err(Error::invalid_argument(ABSENT_VALUE_GIVEN)),
        }
    }

    pub const fn empty() -> Self {
        Nullable::Absent
    }

    /// Absent input becomes `empty()`, anything else becomes `present(value)`.
    pub fn from_nullable(raw: Option<T>) -> Self {
        match raw {
            Some(value) => Nullable::present(value),
            None => Nullable::empty(),
        }
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Nullable::Present(_))
    }

    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Present(value) => Nullable::Present(value),
            Nullable::Absent => Nullable::Absent,
        }
    }

    // =========================================================================
    // Milestone 2: Combinators
    // =========================================================================

    /// Transforms the held value. `transform` is never called on an absent container.
    pub fn map<U, F>(self, transform: F) -> Nullable<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Nullable::Present(value) => Nullable::Present(transform(value)),
            Nullable::Absent => Nullable::Absent,
        }
    }

    /// Like [`map`](Self::map), but a transform that yields `None` produces `empty()`.
    pub fn map_nullable<U, F>(self, transform: F) -> Nullable<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(|value| Nullable::from_nullable(transform(value)))
    }

    pub fn and_then<U, F>(self, transform: F) -> Nullable<U>
    where
        F: FnOnce(T) -> Nullable<U>,
    {
        match self {
            Nullable::Present(value) => transform(value),
            Nullable::Absent => Nullable::Absent,
        }
    }

    /// Keeps the held value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Nullable::Present(value) if predicate(&value) => Nullable::Present(value),
            _ => Nullable::Absent,
        }
    }

    // =========================================================================
    // Milestone 3: Extraction
    // =========================================================================

    /// Eager fallback: `fallback` has already been computed by the time this runs.
    pub fn get_or_else(self, fallback: T) -> T {
        match self {
            Nullable::Present(value) => value,
            Nullable::Absent => fallback,
        }
    }

    /// Lazy fallback: `supplier` runs only when the container is absent.
    pub fn get_or_else_compute<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Nullable::Present(value) => value,
            Nullable::Absent => supplier(),
        }
    }

    /// Returns the held value, or the error built by `error_supplier`.
    pub fn get_or_throw<E, F>(self, error_supplier: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Nullable::Present(value) => Ok(value),
            Nullable::Absent => Err(error_supplier()),
        }
    }

    /// Reads the held value without a fallback.
    ///
    /// Callers are expected to check [`is_present`](Self::is_present) first;
    /// an absent container fails with `IllegalState` instead of yielding anything.
    pub fn get(self) -> Result<T> {
        self.get_or_throw(|| Error::illegal_state(NO_VALUE_PRESENT))
    }

    /// Hands the held value to `consumer`; does nothing when absent.
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Nullable::Present(value) = self {
            consumer(value);
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Present(value) => Some(value),
            Nullable::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(raw: Option<T>) -> Self {
        Nullable::from_nullable(raw)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(nullable: Nullable<T>) -> Self {
        nullable.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nullable::Present(value) => write!(f, "Nullable[{}]", value),
            Nullable::Absent => write!(f, "Nullable.empty"),
        }
    }
}

/// Yields the held value once, or nothing. Lets `flatten` drop absent entries.
impl<T> IntoIterator for Nullable<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_factories() {
        assert!(Nullable::present("Definitely not null value").is_present());
        assert!(Nullable::<&str>::empty().is_absent());
        assert!(Nullable::from_nullable(Some("Possibly nullable")).is_present());
        assert!(Nullable::<&str>::from_nullable(None).is_absent());
    }

    #[test]
    fn test_try_present_rejects_absent_input() {
        let result = Nullable::<String>::try_present(None);
        match result {
            Err(Error::InvalidArgument { message }) => assert_eq!(message, ABSENT_VALUE_GIVEN),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        assert_eq!(Nullable::try_present(Some(3)).unwrap(), Nullable::present(3));
    }

    #[test]
    fn test_get_on_absent_is_illegal_state() {
        let err = Nullable::<i32>::empty().get().unwrap_err();
        assert!(matches!(err, Error::IllegalState { .. }));
        assert!(err.to_string().contains(NO_VALUE_PRESENT));
    }

    #[test]
    fn test_map_on_empty_never_calls_transform() {
        let calls = Cell::new(0);
        let mapped = Nullable::<i32>::empty().map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });
        assert_eq!(mapped, Nullable::empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_nullable_flattens_absent_result() {
        let mapped = Nullable::present("x").map_nullable(|_| None::<String>);
        assert!(mapped.is_absent());

        let mapped = Nullable::present("4").map_nullable(|s| s.parse::<i32>().ok());
        assert_eq!(mapped, Nullable::present(4));
    }

    #[test]
    fn test_filter() {
        assert_eq!(Nullable::present(4).filter(|x| x % 2 == 0), Nullable::present(4));
        assert!(Nullable::present(3).filter(|x| x % 2 == 0).is_absent());
        assert!(Nullable::<i32>::empty().filter(|_| true).is_absent());
    }

    #[test]
    fn test_get_or_else_compute_is_lazy() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            "fallback".to_string()
        };

        let value = Nullable::present("held".to_string()).get_or_else_compute(supplier);
        assert_eq!(value, "held");
        assert_eq!(calls.get(), 0);

        let value = Nullable::empty().get_or_else_compute(supplier);
        assert_eq!(value, "fallback");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_get_or_else_argument_is_evaluated_at_call_site() {
        let calls = Cell::new(0);
        let eager = || {
            calls.set(calls.get() + 1);
            "fallback"
        };

        assert_eq!(Nullable::present("held").get_or_else(eager()), "held");
        assert_eq!(calls.get(), 1);
        assert_eq!(Nullable::empty().get_or_else(eager()), "fallback");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_get_or_throw() {
        let ok: std::result::Result<i32, Error> =
            Nullable::present(7).get_or_throw(|| Error::user_raised("boom"));
        assert_eq!(ok.unwrap(), 7);

        let err = Nullable::<i32>::empty()
            .get_or_throw(|| Error::user_raised("boom"))
            .unwrap_err();
        assert!(err.is_user_raised());
    }

    #[test]
    fn test_if_present() {
        let seen = Cell::new(None);
        Nullable::present(5).if_present(|v| seen.set(Some(*v)));
        assert_eq!(seen.get(), Some(5));

        let calls = Cell::new(0);
        Nullable::<i32>::empty().if_present(|_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_option_conversions_and_iteration() {
        let n: Nullable<i32> = Some(1).into();
        let back: Option<i32> = n.into();
        assert_eq!(back, Some(1));
        assert_eq!(Nullable::<i32>::default(), Nullable::empty());
        assert_eq!(Nullable::present("One").to_string(), "Nullable[One]");
        assert_eq!(Nullable::<&str>::empty().to_string(), "Nullable.empty");

        let values: Vec<i32> = vec![Nullable::present(1), Nullable::empty(), Nullable::present(3)]
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(values, vec![1, 3]);
    }

    proptest! {
        #[test]
        fn prop_from_nullable_some_round_trips(s in ".*") {
            let n = Nullable::from_nullable(Some(s.clone()));
            prop_assert!(n.is_present());
            prop_assert_eq!(n.get().unwrap(), s);
        }

        #[test]
        fn prop_map_matches_direct_application(x in any::<i64>()) {
            let f = |v: i64| v.wrapping_mul(3).wrapping_add(1);
            prop_assert_eq!(Nullable::present(x).map(f), Nullable::present(f(x)));
        }

        #[test]
        fn prop_lazy_supplier_untouched_when_present(x in any::<u32>()) {
            let calls = Cell::new(0);
            let value = Nullable::present(x).get_or_else_compute(|| {
                calls.set(calls.get() + 1);
                0
            });
            prop_assert_eq!(value, x);
            prop_assert_eq!(calls.get(), 0);
        }
    }
}
