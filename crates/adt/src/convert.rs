//! # Conversion Glue
//!
//! Construction functions plus the bridges between this crate's types and the
//! standard library's.
//!
//! ## Construction
//!
//! `some(v)`, `none()`, `ok(v)` and `err(e)` only name the side they build.
//! The other type parameter is inferred from the use site (a `let` binding,
//! a function's return type, a combinator argument):
//!
//! ```rust
//! use compositional_adt::{err, ok, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16, String> {
//!     match raw.parse() {
//!         std::result::Result::Ok(port) => ok(port),
//!         std::result::Result::Err(_) => err(format!("not a port: {raw}")),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080"), ok(8080));
//! assert!(parse_port("http").is_err());
//! ```
//!
//! ## Standard-library boundary
//!
//! Conversions to and from `std::option::Option` / `std::result::Result` are
//! lossless in both directions, so host code can lean on `?` at the edges.

use crate::option::Option::{self, None, Some};
use crate::result::Result::{self, Err, Ok};

/// Build `Some(value)`.
pub fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// Build `None` for whatever `T` the context asks for.
pub fn none<T>() -> Option<T> {
    None
}

/// Build `Ok(value)`; the error type comes from context.
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Build `Err(error)`; the success type comes from context.
pub fn err<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

// ============================================================================
// Standard-library interop
// ============================================================================

impl<T> Option<T> {
    /// Convert into `std::option::Option<T>`.
    pub fn into_std(self) -> std::option::Option<T> {
        self.into()
    }
}

impl<T, E> Result<T, E> {
    /// Convert into `std::result::Result<T, E>`.
    pub fn into_std(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(value: std::option::Option<T>) -> Self {
        match value {
            std::option::Option::Some(v) => Some(v),
            std::option::Option::None => None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => std::option::Option::Some(v),
            None => std::option::Option::None,
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            std::result::Result::Ok(v) => Ok(v),
            std::result::Result::Err(e) => Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => std::result::Result::Ok(v),
            Err(e) => std::result::Result::Err(e),
        }
    }
}

// ============================================================================
// Collecting
// ============================================================================

/// Collect until the first `None`; items after it are never pulled.
impl<T, C: FromIterator<T>> FromIterator<Option<T>> for Option<C> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        let mut missing = false;
        let collected: C = iter
            .into_iter()
            .map_while(|item| {
                let item = item.into_std();
                missing = item.is_none();
                item
            })
            .collect();

        if missing {
            None
        } else {
            Some(collected)
        }
    }
}

/// Collect until the first `Err`, which becomes the result.
impl<T, E, C: FromIterator<T>> FromIterator<Result<T, E>> for Result<C, E> {
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|item| match item {
                Ok(v) => std::option::Option::Some(v),
                Err(e) => {
                    failure = Some(e);
                    std::option::Option::None
                }
            })
            .collect();

        match failure {
            Some(e) => Err(e),
            None => Ok(collected),
        }
    }
}
