//! Signup Form Validation
//!
//! This example demonstrates collect-all validation for user-facing forms,
//! where reporting every problem in one pass beats making the user fix
//! them one at a time.
//!
//! Key concepts:
//! - Rules over a domain struct
//! - Collect-all strategy (the default)
//! - Serializable validation reports
//!
//! Run with: cargo run --example user_signup

use verdict::Validator;

struct SignupForm {
    username: String,
    email: String,
    age: u32,
}

fn main() {
    println!("=== Signup Form Validation ===\n");

    let validator = Validator::builder()
        .rule("username must be at least 3 characters", |f: &SignupForm| {
            f.username.chars().count() >= 3
        })
        .rule("username must be alphanumeric", |f: &SignupForm| {
            f.username.chars().all(char::is_alphanumeric)
        })
        .rule("email must contain '@'", |f: &SignupForm| {
            f.email.contains('@')
        })
        .rule("age must be at least 13", |f: &SignupForm| f.age >= 13)
        .build();

    let form = SignupForm {
        username: "a!".to_string(),
        email: "not-an-email".to_string(),
        age: 11,
    };

    let report = validator.report(&form);
    if report.is_valid() {
        println!("Form accepted");
    } else {
        println!("Form rejected:");
        for message in report.messages() {
            println!("  - {message}");
        }
    }

    println!(
        "\nAs JSON: {}",
        serde_json::to_string(&report).expect("report serializes")
    );

    let valid = SignupForm {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        age: 30,
    };
    println!("\nValid form accepted: {}", validator.is_valid(&valid));
}
