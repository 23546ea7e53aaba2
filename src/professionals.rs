//! Static roster of selectable professionals.
//!
//! Not sourced from any backend — the roster is configuration data shown in
//! the booking form's picker. The first entry is the placeholder; its value
//! is empty and it is never a valid selection.

use serde::Serialize;

/// One picker entry: display label (name + role) and submitted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Professional {
    pub label: &'static str,
    pub value: &'static str,
}

/// Placeholder entry shown before the user picks anyone.
pub const PLACEHOLDER: Professional = Professional {
    label: "Selecione um profissional",
    value: "",
};

/// Full roster, placeholder first, in display order.
pub const PROFESSIONALS: &[Professional] = &[
    PLACEHOLDER,
    Professional { label: "Dr. João Silva - Psicólogo", value: "Dr. João Silva" },
    Professional { label: "Dra. Maria Santos - Psiquiatra", value: "Dra. Maria Santos" },
    Professional { label: "Dr. Pedro Costa - Terapeuta", value: "Dr. Pedro Costa" },
    Professional { label: "Dra. Ana Oliveira - Psicóloga", value: "Dra. Ana Oliveira" },
    Professional { label: "Dr. Carlos Lima - Psiquiatra", value: "Dr. Carlos Lima" },
];

/// Whether `value` is a selectable roster entry (placeholder excluded).
pub fn is_selectable(value: &str) -> bool {
    !value.is_empty() && PROFESSIONALS.iter().any(|p| p.value == value)
}
