//! # Observability
//!
//! Structured logging for the SDK. The engine loop emits `info!`/`warn!`
//! events with structured fields for every dispatch, and client entry points
//! open spans, so a single `RUST_LOG=debug` run shows the complete path of
//! a registration from proxy to provider and back.

/// Initializes structured logging for the process.
///
/// Levels come from `RUST_LOG`. Module paths are hidden; the structured
/// `type_token`/`name` fields identify the resource instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
