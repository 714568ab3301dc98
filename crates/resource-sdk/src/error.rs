//! # Registration Errors
//!
//! This module defines the common error type used throughout the SDK.
//! Bindings surface exactly two kinds of failure: local precondition errors
//! raised before anything is dispatched, and opaque remote provider failures
//! delivered through output resolution.

/// Errors raised during resource registration and output resolution.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// A required input property was absent or empty at dispatch time.
    /// Raised locally; no request has been sent when this occurs.
    #[error("missing required property '{0}'")]
    MissingProperty(&'static str),
    /// The engine channel is closed; the request could not be sent.
    #[error("engine closed")]
    EngineClosed,
    /// The engine dropped the response channel before answering.
    #[error("engine dropped response channel")]
    EngineDropped,
    /// No resource with the given identifier is known to the provider.
    #[error("resource not found: {0}")]
    NotFound(String),
    /// The remote provider rejected the resource. Opaque to this layer; the
    /// whole resource fails, never individual fields.
    #[error("provider failure: {0}")]
    Provider(String),
    /// The provider answered, but a declared output was not in the response.
    #[error("provider response missing output '{0}'")]
    MissingOutput(&'static str),
}
