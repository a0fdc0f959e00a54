//! Presence validation for PQRS submission.
//!
//! # Responsibility
//! - Check required fields before the API layer accepts a create/update.
//! - Report every missing field in one pass, not just the first.
//!
//! # Invariants
//! - Presence means the `Option` is set; content rules (blank text, state
//!   vocabulary, deadline ordering) belong to the workflow layer.
//! - Validation never panics and never mutates the record.

use crate::model::pqrs::Pqrs;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fields that must be present before a create/update submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Titulo,
    FechaCreacion,
    Estado,
}

impl RequiredField {
    /// Wire-facing field name as exposed to API clients.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Titulo => "titulo",
            Self::FechaCreacion => "fechaCreacion",
            Self::Estado => "estado",
        }
    }
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// One required-field violation reported to the submitting caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: RequiredField,
    pub message: String,
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Error for FieldViolation {}

/// Checks the record for submission readiness.
///
/// Returns `Ok(())` when every required field is present, or the full list
/// of violations otherwise. The record itself raises no errors; rejection
/// surfaces to the caller as this violation list.
pub fn validate_for_submit(record: &Pqrs) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if record.titulo.is_none() {
        violations.push(missing(RequiredField::Titulo));
    }
    if record.fecha_creacion.is_none() {
        violations.push(missing(RequiredField::FechaCreacion));
    }
    if record.estado.is_none() {
        violations.push(missing(RequiredField::Estado));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        debug!(
            "event=validation_failed module=ventanilla_core violations={} persisted={}",
            violations.len(),
            record.is_persisted()
        );
        Err(violations)
    }
}

fn missing(field: RequiredField) -> FieldViolation {
    FieldViolation {
        field,
        message: "must be present".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_for_submit, RequiredField};
    use crate::model::pqrs::Pqrs;
    use chrono::{TimeZone, Utc};

    #[test]
    fn empty_record_reports_all_required_fields() {
        let violations = validate_for_submit(&Pqrs::new()).unwrap_err();
        let fields: Vec<RequiredField> = violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                RequiredField::Titulo,
                RequiredField::FechaCreacion,
                RequiredField::Estado,
            ]
        );
    }

    #[test]
    fn complete_record_passes() {
        let mut record = Pqrs::new();
        record.titulo = Some("Alumbrado dañado".to_string());
        record.fecha_creacion = Some(Utc.with_ymd_and_hms(2026, 3, 10, 8, 30, 0).unwrap());
        record.estado = Some("Recibido".to_string());

        assert!(validate_for_submit(&record).is_ok());
    }

    #[test]
    fn presence_check_accepts_empty_text() {
        // Mirrors @NotNull semantics: set-but-blank is the workflow
        // layer's problem, not a presence violation.
        let mut record = Pqrs::new();
        record.titulo = Some(String::new());
        record.fecha_creacion = Some(Utc.with_ymd_and_hms(2026, 3, 10, 8, 30, 0).unwrap());
        record.estado = Some(String::new());

        assert!(validate_for_submit(&record).is_ok());
    }

    #[test]
    fn violation_display_names_the_wire_field() {
        let violations = validate_for_submit(&Pqrs::new()).unwrap_err();
        assert_eq!(violations[0].to_string(), "titulo: must be present");
        assert_eq!(violations[1].to_string(), "fechaCreacion: must be present");
    }
}
