//! Transfer records for the ventanilla única PQRS workflow.
//! This crate is the single source of truth for the record shapes shared
//! between the service and presentation layers.

pub mod logging;
pub mod model;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::pqrs::Pqrs;
pub use model::summary::{ArchivoAdjunto, Oficina, UserSummary};
pub use validation::{validate_for_submit, FieldViolation, RequiredField};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
