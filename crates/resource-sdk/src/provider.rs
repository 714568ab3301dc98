//! # Provider Seam
//!
//! The engine never creates anything itself; it dispatches to a
//! [`ResourceProvider`]. In production that is a plugin process reached over
//! RPC; in tests it is an in-memory stub. Either way the engine treats
//! failures as opaque: the whole resource fails, never individual fields.

use crate::message::{RegisterRequest, RegisterResponse};
use async_trait::async_trait;

/// Contract the engine dispatches resource requests to.
#[async_trait]
pub trait ResourceProvider: Send + Sync + 'static {
    /// Provider-specific failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create the resource described by a registration envelope and report
    /// its outputs.
    async fn construct(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, Self::Error>;

    /// Resolve the outputs of an existing resource by identifier.
    async fn read(
        &self,
        type_token: &str,
        name: &str,
        id: &str,
    ) -> Result<RegisterResponse, Self::Error>;
}
