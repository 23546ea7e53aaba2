//! Amparo client core — the non-visual half of the session booking screen.
//!
//! The embedding UI shell owns rendering and navigation hosting; this crate
//! owns form state, CPF handling, the submission validation pipeline, the
//! scheduling API call and the route table.

pub mod client; // Scheduling API wire contract + HTTP client
pub mod config;
pub mod controller; // Idle/Submitting state machine around the one outbound call
pub mod cpf; // Mask + mod-11 checksum
pub mod form; // Booking form state
pub mod professionals; // Static picker roster
pub mod routes; // Navigation route table
pub mod validation; // Submission checks, in screen order

use tracing_subscriber::EnvFilter;

/// Initializes tracing for the embedding shell. `RUST_LOG` wins over the
/// built-in default filter. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core starting v{}", config::APP_NAME, config::APP_VERSION);
}
