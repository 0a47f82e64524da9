//! Combinators: Option and Result pipelines
//!
//! Run with: cargo run --example combinators
//!
//! This example demonstrates:
//! - Chaining over present/absent values without checking them
//! - Typed errors flowing through success-path combinators
//! - Converting between Option and Result
//! - Recovering from an asserting accessor with `catch_violation`

use compositional_adt::{self as adt, catch_violation, err, none, ok, some};

#[derive(Debug, Clone, PartialEq)]
enum ConfigError {
    Missing(&'static str),
    NotANumber(&'static str),
}

fn lookup(key: &'static str) -> adt::Option<&'static str> {
    match key {
        "port" => some("8080"),
        "workers" => some("four"),
        _ => none(),
    }
}

fn numeric(key: &'static str) -> adt::Result<u32, ConfigError> {
    lookup(key)
        .ok_or_else(|| ConfigError::Missing(key))
        .and_then(|raw| match raw.parse::<u32>() {
            Ok(n) => ok(n),
            Err(_) => err(ConfigError::NotANumber(key)),
        })
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Combinators ===\n");

    // -------------------------------------------------------------------------
    // Option
    // -------------------------------------------------------------------------
    println!("1. Option");
    println!("---------");

    let doubled = some(21).map(|x| x * 2);
    println!("some(21).map(x * 2)         = {:?}", doubled);

    let nothing = none::<i32>().map(|x| x * 2);
    println!("none().map(x * 2)           = {:?}", nothing);

    println!("some(1).xor(none())         = {:?}", some(1).xor(none()));
    println!("some(1).xor(some(2))        = {:?}", some(1).xor(some(2)));
    println!("some(7).filter(even)        = {:?}", some(7).filter(|v| v % 2 == 0));
    println!();

    // -------------------------------------------------------------------------
    // Result
    // -------------------------------------------------------------------------
    println!("2. Result");
    println!("---------");

    for key in ["port", "workers", "timeout"] {
        let value = numeric(key);
        println!("numeric({key:?}) = {:?}", value);
    }

    // Recover on the failure path; the error type may change.
    let timeout = numeric("timeout").or_else(|_| ok::<u32, String>(30));
    println!("timeout with default        = {:?}", timeout);
    println!();

    // -------------------------------------------------------------------------
    // Conversions
    // -------------------------------------------------------------------------
    println!("3. Conversions");
    println!("--------------");

    println!("some(1).ok_or(\"e\").ok()     = {:?}", some(1).ok_or("e").ok());
    println!("numeric(\"workers\").err()    = {:?}", numeric("workers").err());

    let std_side: Option<u32> = numeric("port").ok().into_std();
    println!("into std                    = {:?}", std_side);
    println!();

    // -------------------------------------------------------------------------
    // Invariant violations
    // -------------------------------------------------------------------------
    println!("4. Invariant violations");
    println!("-----------------------");

    match catch_violation(|| numeric("timeout").expect("timeout must be configured")) {
        Ok(v) => println!("unexpected value {v}"),
        Err(violation) => println!(
            "{} failed at {}: {}",
            violation.accessor, violation.location, violation
        ),
    }
}
