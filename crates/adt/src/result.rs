//! # Result - Success or Failure
//!
//! `Result<T, E>` is the coproduct `T + E`. `Ok` carries the success value,
//! `Err` carries a typed error, and errors propagate structurally: every
//! success-path combinator passes an `Err` through untouched.
//!
//! ## Asymmetry of the boolean combinators
//!
//! - `and` / `and_then` fix `E` and let the success type change.
//! - `or` / `or_else` fix `T` and let the error type change.
//!
//! Chaining on the success path never requires the two error types to agree,
//! and recovering on the failure path never requires two success types to
//! agree.

use std::fmt;
use std::slice;

use crate::error::violation;
use crate::option::Option::{self, None, Some};

use self::Result::{Err, Ok};

/// The outcome of an operation: a success value or a typed error.
///
/// Ordering follows the standard library: `Ok(_) < Err(_)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    /// Success value.
    Ok(T),
    /// Error value.
    Err(E),
}

impl<T, E> Result<T, E> {
    // ========================================================================
    // Queries
    // ========================================================================

    /// `true` for `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    /// `true` for `Ok(v)` where `f(v)` holds.
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Ok(v) => f(v),
            Err(_) => false,
        }
    }

    /// `true` for `Err`.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// `true` for `Err(e)` where `f(e)` holds.
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Ok(_) => false,
            Err(e) => f(e),
        }
    }

    /// Borrow both sides: `Result<T, E>` → `Result<&T, &E>`.
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e),
        }
    }

    /// Mutably borrow the payload. The variant itself stays fixed.
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e),
        }
    }

    // ========================================================================
    // Projections to Option
    // ========================================================================

    /// Keep the success value, discarding any error.
    pub fn ok(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(_) => None,
        }
    }

    /// Keep the error value, discarding any success.
    pub fn err(self) -> Option<E> {
        match self {
            Ok(_) => None,
            Err(e) => Some(e),
        }
    }

    // ========================================================================
    // Transformations
    // ========================================================================

    /// `Ok(v)` → `Ok(f(v))`; errors pass through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            Ok(v) => Ok(f(v)),
            Err(e) => Err(e),
        }
    }

    /// `f(v)` for `Ok(v)`, `default` for `Err`.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Ok(v) => f(v),
            Err(_) => default,
        }
    }

    /// `f(v)` for `Ok(v)`, `default(e)` for `Err(e)`.
    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Ok(v) => f(v),
            Err(e) => default(e),
        }
    }

    /// `Err(e)` → `Err(f(e))`; successes pass through.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(f(e)),
        }
    }

    /// Observe the success value, then pass `self` through.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Ok(v) = &self {
            f(v);
        }
        self
    }

    /// Observe the error value, then pass `self` through.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Err(e) = &self {
            f(e);
        }
        self
    }

    // ========================================================================
    // Narrowing accessors
    // ========================================================================

    /// Extract the success value; on `Err(e)` raise an
    /// [`InvariantViolation`] reading `"{msg}: {e:?}"`.
    ///
    /// [`InvariantViolation`]: crate::InvariantViolation
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Ok(v) => v,
            Err(e) => violation("Result::expect", format!("{msg}: {e:?}")),
        }
    }

    /// Extract the success value; raise an [`InvariantViolation`] on `Err`.
    ///
    /// [`InvariantViolation`]: crate::InvariantViolation
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Ok(v) => v,
            Err(e) => violation(
                "Result::unwrap",
                format!("called unwrap on an error value: {e:?}"),
            ),
        }
    }

    /// Extract the error value; on `Ok(v)` raise an [`InvariantViolation`]
    /// reading `"{msg}: {v:?}"`.
    ///
    /// [`InvariantViolation`]: crate::InvariantViolation
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Ok(v) => violation("Result::expect_err", format!("{msg}: {v:?}")),
            Err(e) => e,
        }
    }

    /// Extract the error value; raise an [`InvariantViolation`] on `Ok`.
    ///
    /// [`InvariantViolation`]: crate::InvariantViolation
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Ok(v) => violation(
                "Result::unwrap_err",
                format!("called unwrap_err on a success value: {v:?}"),
            ),
            Err(e) => e,
        }
    }

    /// The success value, or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Ok(v) => v,
            Err(_) => default,
        }
    }

    /// The success value, or `f(e)` computed from the error.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Ok(v) => v,
            Err(e) => f(e),
        }
    }

    /// The success value, or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(_) => T::default(),
        }
    }

    // ========================================================================
    // Boolean combinators
    // ========================================================================

    /// `other` if `self` is `Ok`; otherwise the original error.
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Ok(_) => other,
            Err(e) => Err(e),
        }
    }

    /// Monadic bind on the success path; `f` is never called on `Err`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        match self {
            Ok(v) => f(v),
            Err(e) => Err(e),
        }
    }

    /// `self` if `Ok`; otherwise `other`, whose error type may differ.
    pub fn or<F>(self, other: Result<T, F>) -> Result<T, F> {
        match self {
            Ok(v) => Ok(v),
            Err(_) => other,
        }
    }

    /// Recover from `Err(e)` with `f(e)`; `f` is never called on `Ok`.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => f(e),
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterate over the success value: one item for `Ok`, none for `Err`.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        match self {
            Ok(v) => slice::from_ref(v).iter(),
            Err(_) => <&[T]>::default().iter(),
        }
    }
}

impl<T, E> Result<Option<T>, E> {
    /// `Result<Option<T>, E>` → `Option<Result<T, E>>`.
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Ok(Some(v)) => Some(Ok(v)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
