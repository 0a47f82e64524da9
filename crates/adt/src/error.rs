//! # Invariant Violations
//!
//! The library has exactly one failure mode: a narrowing accessor
//! (`unwrap`, `expect`, `unwrap_err`, `expect_err`) was called on the
//! wrong variant. The caller asserted a variant it never checked, so the
//! call path unwinds with the violation itself as the panic payload.
//!
//! `None` and `Err` never travel this way. They flow structurally through
//! the combinators; only the asserting accessors raise.
//!
//! Hosts that want to recover wrap the asserting code in [`catch_violation`]
//! and get the violation back as a plain value. Outside such a frame the
//! unwind carries a formatted `"{accessor}: {message}"` string instead, so a
//! host that simply terminates still prints why.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, Location, UnwindSafe};

use thiserror::Error;

/// Default message for `Option::unwrap` on `None`.
pub(crate) const UNWRAP_NONE: &str = "called unwrap on an absent value";

thread_local! {
    /// Number of `catch_violation` frames active on this thread.
    static CATCHING: Cell<usize> = const { Cell::new(0) };
}

/// An attempt to extract a value from the wrong variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvariantViolation {
    /// The accessor that failed, e.g. `"Result::unwrap_err"`.
    pub accessor: &'static str,
    /// Caller-supplied (`expect`) or default (`unwrap`) message.
    pub message: String,
    /// `file:line:column` of the asserting call site.
    pub location: String,
}

impl InvariantViolation {
    /// Build a violation attributed to the caller's location.
    #[track_caller]
    pub fn new(accessor: &'static str, message: impl Into<String>) -> Self {
        Self {
            accessor,
            message: message.into(),
            location: Location::caller().to_string(),
        }
    }

    /// Abort the current call path with this violation.
    ///
    /// Emits one `error` event (with the `tracing` feature), then unwinds.
    /// Under [`catch_violation`] the payload is `self`, recovered intact;
    /// otherwise it is the formatted message the panic hook prints.
    #[track_caller]
    pub fn raise(self) -> ! {
        #[cfg(feature = "tracing")]
        tracing::error!(
            accessor = self.accessor,
            location = %self.location,
            "invariant violation: {}",
            self.message
        );
        if CATCHING.with(Cell::get) > 0 {
            panic::panic_any(self);
        }
        panic!("{}: {}", self.accessor, self.message)
    }

    /// Recover a violation from a caught panic payload.
    ///
    /// Only payloads raised inside [`catch_violation`] carry the typed value.
    /// Hands the payload back untouched when it is some other panic.
    pub fn from_payload(
        payload: Box<dyn Any + Send>,
    ) -> std::result::Result<Self, Box<dyn Any + Send>> {
        payload.downcast::<Self>().map(|violation| *violation)
    }
}

/// Raise with the caller's location. Shared by all narrowing accessors.
#[track_caller]
pub(crate) fn violation(accessor: &'static str, message: impl Into<String>) -> ! {
    InvariantViolation::new(accessor, message).raise()
}

/// Run `f`, turning an [`InvariantViolation`] unwind into an `Err`.
///
/// Any other panic is resumed unchanged: foreign failures are never
/// swallowed here.
pub fn catch_violation<F, R>(f: F) -> std::result::Result<R, InvariantViolation>
where
    F: FnOnce() -> R + UnwindSafe,
{
    let _frame = CatchFrame::enter();
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match InvariantViolation::from_payload(payload) {
            Ok(violation) => Err(violation),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Marks a `catch_violation` frame for the lifetime of the guard.
struct CatchFrame;

impl CatchFrame {
    fn enter() -> Self {
        CATCHING.with(|depth| depth.set(depth.get() + 1));
        CatchFrame
    }
}

impl Drop for CatchFrame {
    fn drop(&mut self) {
        CATCHING.with(|depth| depth.set(depth.get() - 1));
    }
}
