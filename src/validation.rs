//! Submission validation pipeline.
//!
//! Runs the checks in a fixed order, short-circuiting on the first failure;
//! the order is user-visible (it decides which notice is shown) and matches
//! the booking screen's established behavior. On success, produces the wire
//! payload for the scheduling API.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, Utc};

use crate::client::SessionRequest;
use crate::form::BookingForm;
use crate::{cpf, professionals};

/// A failed submission check. `Display` is the user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Preencha todos os campos obrigatórios")]
    MissingRequiredFields,

    #[error("CPF inválido")]
    InvalidCpf,

    #[error("Selecione um profissional")]
    NoProfessional,

    #[error("Preencha a data e horário da consulta")]
    MissingSchedule,

    #[error("Informe uma data e horário válidos no futuro")]
    ScheduleNotInFuture,
}

/// Validates the form against `now` and builds the request payload.
///
/// Check order: required fields, CPF checksum, professional selection,
/// date/time presence, then date/time validity and future check. `now` is
/// injected so the future check is testable; the controller passes
/// `Local::now()`.
pub fn validate(form: &BookingForm, now: DateTime<Local>) -> Result<SessionRequest, BookingError> {
    if form.name.trim().is_empty()
        || form.cpf.trim().is_empty()
        || form.phone.trim().is_empty()
        || form.email.trim().is_empty()
    {
        return Err(BookingError::MissingRequiredFields);
    }

    if !cpf::is_valid(&form.cpf) {
        return Err(BookingError::InvalidCpf);
    }

    if !professionals::is_selectable(&form.professional) {
        return Err(BookingError::NoProfessional);
    }

    if form.date.is_empty() || form.time.is_empty() {
        return Err(BookingError::MissingSchedule);
    }

    let session_start = parse_local_instant(&form.date, &form.time)
        .ok_or(BookingError::ScheduleNotInFuture)?;
    if session_start <= now {
        return Err(BookingError::ScheduleNotInFuture);
    }

    Ok(SessionRequest {
        nome: form.name.trim().to_string(),
        cpf: cpf::strip(&form.cpf),
        telefone: form.phone.clone(),
        email: form.email.clone(),
        data_sessao: to_wire_instant(session_start),
        profissional: form.professional.clone(),
    })
}

/// Interprets `date`T`time` in the local zone. Unparseable input and local
/// times that do not exist (or are ambiguous) across a DST transition both
/// yield `None`.
fn parse_local_instant(date: &str, time: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(&format!("{date}T{time}"), "%Y-%m-%dT%H:%M").ok()?;
    naive.and_local_timezone(Local).single()
}

/// RFC 3339 UTC with millisecond precision, e.g. `2026-09-01T18:00:00.000Z`.
fn to_wire_instant(instant: DateTime<Local>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).single().unwrap()
    }

    fn filled_form() -> BookingForm {
        BookingForm {
            name: "Maria Silva".into(),
            cpf: "111.444.777-35".into(),
            phone: "11999998888".into(),
            email: "a@b.com".into(),
            date: "2026-03-11".into(),
            time: "14:30".into(),
            professional: "Dr. João Silva".into(),
        }
    }

    #[test]
    fn valid_form_produces_payload() {
        let request = validate(&filled_form(), fixed_now()).unwrap();
        assert_eq!(request.nome, "Maria Silva");
        assert_eq!(request.cpf, "11144477735");
        assert_eq!(request.telefone, "11999998888");
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.profissional, "Dr. João Silva");
    }

    #[test]
    fn payload_name_is_trimmed() {
        let mut form = filled_form();
        form.name = "  Maria Silva  ".into();
        let request = validate(&form, fixed_now()).unwrap();
        assert_eq!(request.nome, "Maria Silva");
    }

    #[test]
    fn payload_instant_is_utc_rfc3339() {
        let request = validate(&filled_form(), fixed_now()).unwrap();
        assert!(request.data_sessao.ends_with('Z'));

        // Round-trips to the instant the user typed, interpreted locally.
        let parsed = DateTime::parse_from_rfc3339(&request.data_sessao).unwrap();
        let expected = Local
            .with_ymd_and_hms(2026, 3, 11, 14, 30, 0)
            .single()
            .unwrap();
        assert_eq!(parsed.with_timezone(&Utc), expected.with_timezone(&Utc));
    }

    #[test]
    fn empty_name_refused() {
        let mut form = filled_form();
        form.name = "   ".into();
        assert_eq!(
            validate(&form, fixed_now()),
            Err(BookingError::MissingRequiredFields)
        );
    }

    #[test]
    fn empty_phone_and_email_refused() {
        let mut form = filled_form();
        form.phone.clear();
        assert_eq!(
            validate(&form, fixed_now()),
            Err(BookingError::MissingRequiredFields)
        );

        let mut form = filled_form();
        form.email.clear();
        assert_eq!(
            validate(&form, fixed_now()),
            Err(BookingError::MissingRequiredFields)
        );
    }

    #[test]
    fn bad_cpf_refused() {
        let mut form = filled_form();
        form.cpf = "111.444.777-34".into();
        assert_eq!(validate(&form, fixed_now()), Err(BookingError::InvalidCpf));
    }

    #[test]
    fn placeholder_professional_refused() {
        let mut form = filled_form();
        form.professional.clear();
        assert_eq!(validate(&form, fixed_now()), Err(BookingError::NoProfessional));
    }

    #[test]
    fn unknown_professional_refused() {
        let mut form = filled_form();
        form.professional = "Dr. Nobody".into();
        assert_eq!(validate(&form, fixed_now()), Err(BookingError::NoProfessional));
    }

    #[test]
    fn missing_date_or_time_refused() {
        let mut form = filled_form();
        form.date.clear();
        assert_eq!(validate(&form, fixed_now()), Err(BookingError::MissingSchedule));

        let mut form = filled_form();
        form.time.clear();
        assert_eq!(validate(&form, fixed_now()), Err(BookingError::MissingSchedule));
    }

    #[test]
    fn unparseable_schedule_refused() {
        let mut form = filled_form();
        form.date = "2026-02-30".into();
        assert_eq!(
            validate(&form, fixed_now()),
            Err(BookingError::ScheduleNotInFuture)
        );

        let mut form = filled_form();
        form.time = "25:00".into();
        assert_eq!(
            validate(&form, fixed_now()),
            Err(BookingError::ScheduleNotInFuture)
        );
    }

    #[test]
    fn past_schedule_refused() {
        let mut form = filled_form();
        let past = fixed_now() - Duration::hours(1);
        form.date = past.format("%Y-%m-%d").to_string();
        form.time = past.format("%H:%M").to_string();
        assert_eq!(
            validate(&form, fixed_now()),
            Err(BookingError::ScheduleNotInFuture)
        );
    }

    #[test]
    fn schedule_equal_to_now_refused() {
        // Strictly later than now: the exact minute is not enough.
        let now = fixed_now();
        let mut form = filled_form();
        form.date = now.format("%Y-%m-%d").to_string();
        form.time = now.format("%H:%M").to_string();
        assert_eq!(validate(&form, now), Err(BookingError::ScheduleNotInFuture));
    }

    #[test]
    fn cpf_check_precedes_professional_check() {
        // Both wrong; the CPF notice wins.
        let mut form = filled_form();
        form.cpf = "123".into();
        form.professional.clear();
        assert_eq!(validate(&form, fixed_now()), Err(BookingError::InvalidCpf));
    }

    #[test]
    fn presence_check_precedes_cpf_check() {
        let mut form = filled_form();
        form.name.clear();
        form.cpf = "123".into();
        assert_eq!(
            validate(&form, fixed_now()),
            Err(BookingError::MissingRequiredFields)
        );
    }

    #[test]
    fn professional_check_precedes_schedule_check() {
        let mut form = filled_form();
        form.professional.clear();
        form.date.clear();
        assert_eq!(validate(&form, fixed_now()), Err(BookingError::NoProfessional));
    }

    #[test]
    fn notices_match_screen_copy() {
        assert_eq!(
            BookingError::MissingRequiredFields.to_string(),
            "Preencha todos os campos obrigatórios"
        );
        assert_eq!(BookingError::InvalidCpf.to_string(), "CPF inválido");
        assert_eq!(
            BookingError::NoProfessional.to_string(),
            "Selecione um profissional"
        );
        assert_eq!(
            BookingError::MissingSchedule.to_string(),
            "Preencha a data e horário da consulta"
        );
        assert_eq!(
            BookingError::ScheduleNotInFuture.to_string(),
            "Informe uma data e horário válidos no futuro"
        );
    }
}
