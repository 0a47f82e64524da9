//! # Option - Presence or Absence
//!
//! `Option<T>` is the coproduct `T + 1`: either a value (`Some`) or the
//! unit point (`None`). Which injection holds is fixed at construction; every
//! combinator builds a new value instead of mutating the receiver.
//!
//! ## Laziness
//!
//! Combinators that take a producer (`map_or_else`, `unwrap_or_else`,
//! `ok_or_else`, `and_then`, `or_else`) call it at most once, and only on the
//! branch that needs it. The value-taking forms (`and`, `or`, `unwrap_or`)
//! receive an argument the caller has already evaluated.

use std::slice;

use crate::error::{violation, UNWRAP_NONE};
use crate::result::Result::{self, Err, Ok};

use self::Option::{None, Some};

/// A value of type `T` that may or may not be present.
///
/// Ordering follows the standard library: `None < Some(_)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<T> {
    /// No value.
    None,
    /// Exactly one value.
    Some(T),
}

impl<T> Option<T> {
    // ========================================================================
    // Queries
    // ========================================================================

    /// `true` for `Some`.
    pub fn is_some(&self) -> bool {
        matches!(self, Some(_))
    }

    /// `true` for `Some(v)` where `f(v)` holds.
    pub fn is_some_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Some(v) => f(v),
            None => false,
        }
    }

    /// `true` for `None`.
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// `true` for `None`, or for `Some(v)` where `f(v)` holds.
    pub fn is_none_or(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Some(v) => f(v),
            None => true,
        }
    }

    /// Borrow the payload: `Option<T>` → `Option<&T>`.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Some(v) => Some(v),
            None => None,
        }
    }

    /// Mutably borrow the payload. The variant itself stays fixed.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Some(v) => Some(v),
            None => None,
        }
    }

    // ========================================================================
    // Transformations
    // ========================================================================

    /// Functor map: `Some(v)` → `Some(f(v))`, `None` → `None`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
        match self {
            Some(v) => Some(f(v)),
            None => None,
        }
    }

    /// `f(v)` for `Some(v)`, `default` for `None`.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Some(v) => f(v),
            None => default,
        }
    }

    /// `f(v)` for `Some(v)`, `default()` for `None`.
    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Some(v) => f(v),
            None => default(),
        }
    }

    /// Observe the payload without consuming it, then pass `self` through.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Some(v) = &self {
            f(v);
        }
        self
    }

    /// Keep `Some(v)` only if `predicate(&v)` holds.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Some(v) if predicate(&v) => Some(v),
            _ => None,
        }
    }

    /// Pair two present values; `None` if either side is absent.
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        match (self, other) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    // ========================================================================
    // Narrowing accessors
    // ========================================================================

    /// Extract the payload, raising an [`InvariantViolation`] carrying `msg`
    /// on `None`.
    ///
    /// [`InvariantViolation`]: crate::InvariantViolation
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Some(v) => v,
            None => violation("Option::expect", msg),
        }
    }

    /// Extract the payload, raising an [`InvariantViolation`] on `None`.
    ///
    /// [`InvariantViolation`]: crate::InvariantViolation
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Some(v) => v,
            None => violation("Option::unwrap", UNWRAP_NONE),
        }
    }

    /// The payload, or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Some(v) => v,
            None => default,
        }
    }

    /// The payload, or `default()`.
    pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Some(v) => v,
            None => default(),
        }
    }

    /// The payload, or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // ========================================================================
    // Conversion to Result
    // ========================================================================

    /// `Some(v)` → `Ok(v)`, `None` → `Err(err)`.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Some(v) => Ok(v),
            None => Err(err),
        }
    }

    /// `Some(v)` → `Ok(v)`, `None` → `Err(err())`.
    pub fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Some(v) => Ok(v),
            None => Err(err()),
        }
    }

    // ========================================================================
    // Boolean combinators
    // ========================================================================

    /// `other` if `self` is present, otherwise `None`.
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Some(_) => other,
            None => None,
        }
    }

    /// Monadic bind: `f(v)` for `Some(v)`; `f` is never called on `None`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
        match self {
            Some(v) => f(v),
            None => None,
        }
    }

    /// `self` if present, otherwise `other`.
    pub fn or(self, other: Option<T>) -> Option<T> {
        match self {
            Some(v) => Some(v),
            None => other,
        }
    }

    /// `self` if present, otherwise `f()`; `f` is never called on `Some`.
    pub fn or_else(self, f: impl FnOnce() -> Option<T>) -> Option<T> {
        match self {
            Some(v) => Some(v),
            None => f(),
        }
    }

    /// Exactly one of the two present: that one. Otherwise `None`.
    pub fn xor(self, other: Option<T>) -> Option<T> {
        match (self, other) {
            (Some(v), None) => Some(v),
            (None, Some(v)) => Some(v),
            _ => None,
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterate over the payload: one item for `Some`, none for `None`.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        match self {
            Some(v) => slice::from_ref(v).iter(),
            None => <&[T]>::default().iter(),
        }
    }
}

impl<T> Option<Option<T>> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> Option<T> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Option<Result<T, E>> {
    /// `Option<Result<T, E>>` → `Result<Option<T>, E>`.
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self {
            Some(Ok(v)) => Ok(Some(v)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

impl<T: Clone> Option<&T> {
    /// Clone the borrowed payload into an owned option.
    pub fn cloned(self) -> Option<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> Option<&T> {
    /// Copy the borrowed payload into an owned option.
    pub fn copied(self) -> Option<T> {
        self.map(|v| *v)
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        None
    }
}

impl<T> From<T> for Option<T> {
    fn from(value: T) -> Self {
        Some(value)
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
