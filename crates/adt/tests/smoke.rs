//! Smoke tests for the adt crate.
//!
//! These walk the concrete scenarios a caller hits first:
//! - Mapping and chaining over present/absent values
//! - Success/failure chaining with typed errors
//! - Narrowing accessors raising `InvariantViolation`
//! - Producers running only on the branch that needs them

use std::cell::Cell;

use compositional_adt::option::Option::{self, None, Some};
use compositional_adt::result::Result::{self, Err, Ok};
use compositional_adt::{catch_violation, err, none, ok, some};

// ============================================================================
// Option Scenarios
// ============================================================================

#[test]
fn smoke_some_map_increments() {
    assert_eq!(some(1).map(|x| x + 1), Some(2));
}

#[test]
fn smoke_none_map_never_calls_mapper() {
    let calls = Cell::new(0);
    let out = none::<i32>().map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });

    assert_eq!(out, None);
    assert_eq!(calls.get(), 0);
}

#[test]
fn smoke_xor() {
    assert_eq!(some(1).xor(none()), Some(1));
    assert_eq!(some(1).xor(some(2)), None);
}

#[test]
fn smoke_none_unwrap_raises() {
    let violation = catch_violation(|| none::<i32>().unwrap()).unwrap_err();
    assert_eq!(violation.accessor, "Option::unwrap");
    assert_eq!(violation.to_string(), "called unwrap on an absent value");
    assert!(violation.location.contains("smoke.rs"), "got {}", violation.location);
}

#[test]
fn smoke_option_and_then_short_circuits() {
    let calls = Cell::new(0);
    let step = |v: i32| {
        calls.set(calls.get() + 1);
        Some(v * 2)
    };

    assert_eq!(none::<i32>().and_then(step), None);
    assert_eq!(calls.get(), 0);
    assert_eq!(some(4).and_then(step), Some(8));
    assert_eq!(calls.get(), 1);
}

#[test]
fn smoke_option_producers_run_at_most_once() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        0
    };

    assert_eq!(some(3).unwrap_or_else(fallback), 3);
    assert_eq!(some(3).map_or_else(fallback, |v| v), 3);
    assert_eq!(some(3).ok_or_else(|| fallback()), Ok(3));
    assert_eq!(calls.get(), 0);

    assert_eq!(none().unwrap_or_else(fallback), 0);
    assert_eq!(calls.get(), 1);
}

// ============================================================================
// Result Scenarios
// ============================================================================

#[test]
fn smoke_and_then_on_ok_and_err() {
    let calls = Cell::new(0);
    let next = |_: i32| {
        calls.set(calls.get() + 1);
        ok::<i32, i32>(0)
    };

    assert_eq!(ok::<i32, i32>(1).and_then(next), Ok(0));
    assert_eq!(calls.get(), 1);
    assert_eq!(err::<i32, i32>(1).and_then(next), Err(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn smoke_result_projections() {
    assert_eq!(ok::<i32, i32>(1).ok(), Some(1));
    assert_eq!(err::<i32, i32>(1).ok(), None);
    assert_eq!(err::<i32, i32>(1).err(), Some(1));
}

#[test]
fn smoke_error_producers_see_the_error() {
    let res: Result<u32, String> = err("timeout".to_string());
    let len = res.clone().map_or_else(|e| e.len() as u32, |v| v);
    assert_eq!(len, 7);
    assert_eq!(res.unwrap_or_else(|e| e.len() as u32 + 1), 8);
}

#[test]
fn smoke_result_accessor_violations() {
    let v = catch_violation(|| err::<i32, &str>("refused").expect("connect")).unwrap_err();
    assert_eq!(v.accessor, "Result::expect");
    assert_eq!(v.message, "connect: \"refused\"");

    let v = catch_violation(|| ok::<i32, &str>(1).unwrap_err()).unwrap_err();
    assert_eq!(v.accessor, "Result::unwrap_err");
}

// ============================================================================
// Cross-Type Pipelines
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum LookupError {
    Missing(&'static str),
    Invalid(&'static str),
}

fn lookup(key: &'static str) -> Option<&'static str> {
    match key {
        "port" => Some("8080"),
        "host" => Some("localhost"),
        "retries" => Some("many"),
        _ => None,
    }
}

fn numeric(key: &'static str) -> Result<u32, LookupError> {
    lookup(key)
        .ok_or(LookupError::Missing(key))
        .and_then(|raw| {
            Result::from(raw.parse::<u32>()).map_err(|_| LookupError::Invalid(key))
        })
}

#[test]
fn smoke_config_pipeline() {
    assert_eq!(numeric("port"), Ok(8080));
    assert_eq!(numeric("retries"), Err(LookupError::Invalid("retries")));
    assert_eq!(numeric("timeout"), Err(LookupError::Missing("timeout")));

    let with_default = numeric("timeout").or_else(|_| ok::<u32, ()>(30));
    assert_eq!(with_default, Ok(30));
}

#[test]
fn smoke_inspect_observes_without_changing() {
    let logged = Cell::new(None);
    let out = lookup("host").inspect(|h| logged.set(Some(h.len())));

    assert_eq!(out, Some("localhost"));
    assert_eq!(logged.get(), Some(9));
}

#[test]
fn smoke_equality_is_structural() {
    assert_eq!(some(String::from("a")), some(String::from("a")));
    assert_eq!(none::<i32>(), none::<i32>());
    assert_ne!(ok::<i32, i32>(1), err::<i32, i32>(1));
    assert_ne!(Option::Some(1), Option::None);
}
