//! Submission controller — validates the booking form and issues the one
//! outbound scheduling call.
//!
//! Two states, Idle and Submitting, guarded by a mutex: `try_lock` on
//! submission means at most one request is ever in flight and a re-entrant
//! trigger is ignored instead of queued. The guard is released when the call
//! settles, success or not, so every path returns to Idle.

use std::sync::Mutex;

use chrono::Local;
use serde::Serialize;

use crate::client::SchedulingApi;
use crate::form::BookingForm;
use crate::validation;

/// Acknowledgment shown when the backend confirms the booking.
pub const SUCCESS_MESSAGE: &str = "Agendamento realizado com sucesso!";

/// Shown when the backend refuses without a message of its own.
pub const GENERIC_REFUSAL_NOTICE: &str = "Erro ao realizar agendamento";

/// Shown on any transport-level failure.
pub const CONNECTIVITY_NOTICE: &str = "Erro de conexão. Verifique sua internet.";

/// How a submission trigger settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Backend confirmed; every form field has been cleared.
    Scheduled { message: String },
    /// A validation check failed; nothing was sent.
    Invalid { notice: String },
    /// Backend responded `success: false`; form preserved for correction.
    Refused { notice: String },
    /// No usable response from the backend; form preserved.
    ConnectionFailed { notice: String },
    /// Another submission is in flight; this trigger was ignored.
    InFlight,
}

/// Orchestrates validate → POST → clear-or-preserve for the booking screen.
pub struct SubmissionController<C: SchedulingApi> {
    client: C,
    /// Held for the duration of the outbound call. Idle ⇔ unlocked.
    lock: Mutex<()>,
}

impl<C: SchedulingApi> SubmissionController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            lock: Mutex::new(()),
        }
    }

    /// Whether a submission is in flight. The UI disables the trigger
    /// control while this is true.
    pub fn is_submitting(&self) -> bool {
        self.lock.try_lock().is_err()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Runs the validation pipeline and, if every check passes, sends the
    /// booking. Validation failures never reach the Submitting state; the
    /// network call settles exactly once per accepted trigger.
    pub fn submit(&self, form: &mut BookingForm) -> SubmissionOutcome {
        let request = match validation::validate(form, Local::now()) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(notice = %e, "submission refused by validation");
                return SubmissionOutcome::Invalid { notice: e.to_string() };
            }
        };

        let Ok(_guard) = self.lock.try_lock() else {
            tracing::debug!("submission trigger ignored, one already in flight");
            return SubmissionOutcome::InFlight;
        };

        tracing::info!(
            professional = %request.profissional,
            session = %request.data_sessao,
            "submitting booking"
        );

        match self.client.create_session(&request) {
            Ok(response) if response.success => {
                form.clear();
                tracing::info!("booking confirmed by backend");
                SubmissionOutcome::Scheduled {
                    message: SUCCESS_MESSAGE.to_string(),
                }
            }
            Ok(response) => {
                let notice = response
                    .message
                    .unwrap_or_else(|| GENERIC_REFUSAL_NOTICE.to_string());
                tracing::warn!(notice = %notice, "booking refused by backend");
                SubmissionOutcome::Refused { notice }
            }
            Err(e) => {
                tracing::error!(error = %e, "booking request failed");
                SubmissionOutcome::ConnectionFailed {
                    notice: CONNECTIVITY_NOTICE.to_string(),
                }
            }
        }
    }
}
