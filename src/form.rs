//! Booking form state.
//!
//! One structured record instead of per-field mutable variables; the UI
//! updates it through `set`, keyed by field, so every input path funnels
//! through the same place (and the CPF mask is applied uniformly).

use serde::{Deserialize, Serialize};

use crate::cpf;

/// Current contents of the booking form. Everything is a string, as typed;
/// validation happens at submission time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    /// Display-masked CPF (`XXX.XXX.XXX-XX`), maintained by `set`.
    pub cpf: String,
    pub phone: String,
    pub email: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
    /// Roster value of the selected professional, empty while the
    /// placeholder is shown.
    pub professional: String,
}

/// Form fields, for reducer-style updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Cpf,
    Phone,
    Email,
    Date,
    Time,
    Professional,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` into `field`. The CPF field is masked on every
    /// keystroke; all other fields are stored as typed.
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Cpf => self.cpf = cpf::format(value),
            FormField::Phone => self.phone = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::Date => self.date = value.to_string(),
            FormField::Time => self.time = value.to_string(),
            FormField::Professional => self.professional = value.to_string(),
        }
    }

    /// Resets every field to its default after a successful submission.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True if every field is at its default.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_empty() {
        let form = BookingForm::new();
        assert!(form.is_empty());
        assert_eq!(form.professional, "");
    }

    #[test]
    fn set_stores_plain_fields_as_typed() {
        let mut form = BookingForm::new();
        form.set(FormField::Name, "  Maria Silva ");
        form.set(FormField::Email, "a@b.com");
        assert_eq!(form.name, "  Maria Silva ");
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn set_masks_cpf_as_typed() {
        let mut form = BookingForm::new();
        form.set(FormField::Cpf, "1114");
        assert_eq!(form.cpf, "111.4");
        form.set(FormField::Cpf, "11144477735");
        assert_eq!(form.cpf, "111.444.777-35");
        // Re-feeding the masked value is a no-op.
        let masked = form.cpf.clone();
        form.set(FormField::Cpf, &masked);
        assert_eq!(form.cpf, masked);
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut form = BookingForm::new();
        form.set(FormField::Name, "Maria");
        form.set(FormField::Cpf, "11144477735");
        form.set(FormField::Date, "2026-09-01");
        form.set(FormField::Professional, "Dr. João Silva");
        assert!(!form.is_empty());

        form.clear();
        assert!(form.is_empty());
    }
}
