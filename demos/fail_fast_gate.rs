//! Fail-Fast Gating
//!
//! This example demonstrates fail-fast validation for cheap gating, where
//! the first broken rule is enough to reject and later, possibly more
//! expensive, checks should never run.
//!
//! Key concepts:
//! - Fail-fast strategy selection
//! - Rule order as check order
//! - Reusing one builder for both policies
//!
//! Run with: cargo run --example fail_fast_gate

use verdict::Validator;

fn main() {
    println!("=== Fail-Fast Gate ===\n");

    let builder = Validator::builder()
        .rule("payload must not be empty", |p: &Vec<u8>| !p.is_empty())
        .rule("payload must fit in one frame", |p: &Vec<u8>| {
            p.len() <= 4096
        })
        .rule("payload must be valid UTF-8", |p: &Vec<u8>| {
            std::str::from_utf8(p).is_ok()
        });

    // Same rule set, both policies: the full report for diagnostics,
    // the fail-fast gate for the hot path.
    let reporter = builder.build();
    let gate = builder.fail_fast().build();

    let payloads = [
        Vec::new(),
        vec![0xff; 8192],
        vec![0xff, 0xfe],
        b"hello".to_vec(),
    ];

    for payload in &payloads {
        let messages = gate.validate(payload);
        if messages.is_empty() {
            println!("{:>5} bytes: accepted", payload.len());
        } else {
            println!("{:>5} bytes: rejected ({})", payload.len(), messages[0]);
        }
    }

    println!("\nFull report for the oversized payload:");
    for message in reporter.validate(&payloads[1]) {
        println!("  - {message}");
    }
}
