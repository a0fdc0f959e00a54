//! Summary shapes referenced by the PQRS record.
//!
//! # Responsibility
//! - Mirror the office, attachment and user summaries supplied by their
//!   owning subsystems.
//! - Keep wire naming aligned with the external camelCase schema.
//!
//! # Invariants
//! - These shapes are carried by value; this crate never constructs or
//!   validates them on behalf of their owning subsystems.
//! - `ArchivoAdjunto` equality covers every field, so the attachment set
//!   dedupes by the summary's own equality.

use crate::model::{render_instant, render_text};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Office responsible for answering a PQRS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Oficina {
    pub id: Option<String>,
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    /// Hierarchy level code within the entity's org chart.
    pub nivel: Option<String>,
    /// Identifier of the parent office, when not top-level.
    pub oficina_padre: Option<String>,
}

impl Display for Oficina {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Oficina{{id={}, nombre={}, descripcion={}, nivel={}, oficinaPadre={}}}",
            render_text(self.id.as_deref()),
            render_text(self.nombre.as_deref()),
            render_text(self.descripcion.as_deref()),
            render_text(self.nivel.as_deref()),
            render_text(self.oficina_padre.as_deref()),
        )
    }
}

/// Uploaded file summary produced by the attachment subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivoAdjunto {
    pub id: Option<String>,
    /// Original file name as shown to the citizen.
    pub nombre: Option<String>,
    /// MIME type reported at upload time.
    pub tipo: Option<String>,
    pub url_archivo: Option<String>,
    pub fecha_subida: Option<DateTime<Utc>>,
}

impl Display for ArchivoAdjunto {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ArchivoAdjunto{{id={}, nombre={}, tipo={}, urlArchivo={}, fechaSubida={}}}",
            render_text(self.id.as_deref()),
            render_text(self.nombre.as_deref()),
            render_text(self.tipo.as_deref()),
            render_text(self.url_archivo.as_deref()),
            render_instant(self.fecha_subida.as_ref()),
        )
    }
}

/// Authenticated account reference supplied by the user subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Option<String>,
    pub login: Option<String>,
}

impl Display for UserSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UserSummary{{id={}, login={}}}",
            render_text(self.id.as_deref()),
            render_text(self.login.as_deref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{ArchivoAdjunto, Oficina, UserSummary};

    #[test]
    fn oficina_rendering_marks_unset_fields() {
        let oficina = Oficina {
            id: Some("of-1".to_string()),
            nombre: Some("Atención al Ciudadano".to_string()),
            ..Oficina::default()
        };
        let rendered = oficina.to_string();
        assert!(rendered.contains("id='of-1'"));
        assert!(rendered.contains("nombre='Atención al Ciudadano'"));
        assert!(rendered.contains("oficinaPadre=null"));
    }

    #[test]
    fn archivo_set_dedupes_by_value_equality() {
        let archivo = ArchivoAdjunto {
            id: Some("a-1".to_string()),
            nombre: Some("soporte.pdf".to_string()),
            ..ArchivoAdjunto::default()
        };
        let mut set = std::collections::HashSet::new();
        set.insert(archivo.clone());
        set.insert(archivo);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn user_summary_rendering_never_fails_when_empty() {
        assert_eq!(
            UserSummary::default().to_string(),
            "UserSummary{id=null, login=null}"
        );
    }
}
