//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ventanilla_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("ventanilla_core version={}", ventanilla_core::core_version());
    // An empty record exercises diagnostic rendering with every field unset.
    println!("ventanilla_core empty_record={}", ventanilla_core::Pqrs::new());
}
