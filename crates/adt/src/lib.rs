//! # ADT - Option and Result as Composable Values
//!
//! This crate provides two closed, two-variant algebraic data types:
//!
//! - **Option**: presence (`Some`) or absence (`None`) of a value
//! - **Result**: success (`Ok`) or typed failure (`Err`) of an operation
//! - **Conversions**: construction functions, `Option ⇄ Result`, and
//!   lossless bridges to the standard library's types
//! - **Errors**: the single `InvariantViolation` raised by asserting accessors
//!
//! ## Design Philosophy
//!
//! Absence and failure are values, not control flow. A pipeline of
//! combinators (`map`, `and_then`, `or_else`, ...) carries `None`/`Err`
//! through structurally, so nothing has to be checked until the end.
//! Only the narrowing accessors (`unwrap`, `expect`, `unwrap_err`,
//! `expect_err`) can fail, and they fail loudly.
//!
//! ```rust
//! use compositional_adt::{none, some, Option};
//!
//! fn parse(raw: &str) -> Option<u16> {
//!     raw.parse::<u16>().ok().into()
//! }
//!
//! let port = some("8080").and_then(parse).filter(|p| *p > 1024);
//! assert_eq!(port, some(8080));
//!
//! let missing = none::<&str>().and_then(parse);
//! assert!(missing.is_none());
//! ```
//!
//! ## Naming
//!
//! The types deliberately share their names with the prelude's. Import them
//! by name (or through an alias) where both are in play; the standard ones
//! stay reachable as `std::option::Option` and `std::result::Result`.

#![warn(missing_docs)]

pub mod convert;
pub mod error;
pub mod option;
pub mod result;

// Re-export key types at crate root for convenience
pub use convert::{err, none, ok, some};
pub use error::{catch_violation, InvariantViolation};
pub use option::Option;
pub use result::Result;
