//! PQRS transfer record.
//!
//! # Responsibility
//! - Hold a flat snapshot of one citizen request (petición, queja, reclamo,
//!   sugerencia) while it moves between the service and presentation layers.
//! - Provide identity-based equality and diagnostic rendering.
//!
//! # Invariants
//! - Equality and hashing derive from `id` alone; a record without an `id`
//!   equals only the very same instance, never a field-wise duplicate.
//! - `titulo`, `fecha_creacion` and `estado` must be present before a
//!   create/update submission; see [`crate::validation::validate_for_submit`].
//! - `fecha_limite_respuesta`, when set, is expected on or after
//!   `fecha_creacion`; the deadline rule is owned by the workflow layer and
//!   not enforced here.

use crate::model::summary::{ArchivoAdjunto, Oficina, UserSummary};
use crate::model::{render_flag, render_instant, render_nested, render_text};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Flat transfer record for one PQRS.
///
/// Every field is freely mutable during assembly by the mapping layer; the
/// shape itself allows incomplete instances and defers required-field
/// enforcement to the validation module. Wire naming follows the external
/// camelCase schema, including the legacy `archivosAdjuntosDTO` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pqrs {
    /// Storage identifier; `None` until the record is first persisted.
    pub id: Option<String>,
    /// Short subject line. Required for submission.
    pub titulo: Option<String>,
    /// Free-form body text.
    pub descripcion: Option<String>,
    /// Filing instant. Required for submission.
    pub fecha_creacion: Option<DateTime<Utc>>,
    /// Response deadline managed by the workflow layer.
    pub fecha_limite_respuesta: Option<DateTime<Utc>>,
    /// Workflow state code, e.g. `Recibido`, `En Proceso`, `Respondido`.
    /// Required for submission; transitions are decided elsewhere.
    pub estado: Option<String>,
    /// Office responsible for the response.
    pub oficina_responder: Option<Oficina>,
    /// Attachment summaries, unique by the summary's own equality.
    /// Iteration order is unspecified and must not be relied upon.
    #[serde(rename = "archivosAdjuntosDTO")]
    pub archivos_adjuntos: Option<HashSet<ArchivoAdjunto>>,
    /// Full name of the filing party, when disclosed.
    pub submitter_full_name: Option<String>,
    pub submitter_email: Option<String>,
    pub submitter_phone_number: Option<String>,
    /// Tri-state disclosure flag: unset, anonymous, or identified.
    pub is_anonymous: Option<bool>,
    /// Authenticated owner, when the filer was logged in.
    pub user: Option<UserSummary>,
}

impl Pqrs {
    /// Creates an empty record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record carrying a storage identifier.
    ///
    /// Used by mapping paths where identity already exists in storage.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Returns whether this record already has a storage identity.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

// Deliberately not `Eq`: two distinct unpersisted records are never equal,
// so the relation is not reflexive across instances.
impl PartialEq for Pqrs {
    /// Identity-based equality for persisted records.
    ///
    /// - The same instance is always equal to itself.
    /// - Otherwise both `id`s must be set and match; a record with an unset
    ///   `id` is never equal to another instance, even a field-wise copy.
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (&self.id, &other.id) {
            (Some(own), Some(theirs)) => own == theirs,
            _ => false,
        }
    }
}

impl Hash for Pqrs {
    /// Hashes `id` alone, consistent with [`PartialEq`]; an unset `id`
    /// hashes as the fixed `None` marker.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Pqrs {
    /// Single-line diagnostic rendering for logs.
    ///
    /// Fields are named by their wire keys and unset values render as the
    /// literal `null`. Not a serialization format; never parsed back.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pqrs{{id={}, titulo={}, descripcion={}, fechaCreacion={}, \
             fechaLimiteRespuesta={}, estado={}, oficinaResponder={}, \
             archivosAdjuntosDTO={}, submitterFullName={}, submitterEmail={}, \
             submitterPhoneNumber={}, isAnonymous={}, user={}}}",
            render_text(self.id.as_deref()),
            render_text(self.titulo.as_deref()),
            render_text(self.descripcion.as_deref()),
            render_instant(self.fecha_creacion.as_ref()),
            render_instant(self.fecha_limite_respuesta.as_ref()),
            render_text(self.estado.as_deref()),
            render_nested(self.oficina_responder.as_ref()),
            render_attachments(self.archivos_adjuntos.as_ref()),
            render_text(self.submitter_full_name.as_deref()),
            render_text(self.submitter_email.as_deref()),
            render_text(self.submitter_phone_number.as_deref()),
            render_flag(self.is_anonymous),
            render_nested(self.user.as_ref()),
        )
    }
}

/// Renders the attachment set sorted, so log lines stay stable even though
/// set iteration order is unspecified.
fn render_attachments(value: Option<&HashSet<ArchivoAdjunto>>) -> String {
    match value {
        Some(archivos) => {
            let mut items: Vec<String> = archivos.iter().map(ToString::to_string).collect();
            items.sort();
            format!("[{}]", items.join(", "))
        }
        None => "null".to_string(),
    }
}
