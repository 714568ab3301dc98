//! # Engine Messages
//!
//! The request envelope and the channel message types exchanged between
//! resource proxies and the engine dispatch loop.

use crate::error::RegistrationError;
use crate::options::ResourceOptions;
use crate::property::PropertyMap;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// One-shot response channel carried inside every engine request.
pub type Response<T> = oneshot::Sender<Result<T, RegistrationError>>;

/// The envelope for one resource registration.
///
/// `type_token` is the fixed string identifying this resource kind to the
/// provider; `name` is the caller-chosen unique resource name. Properties
/// hold only the fields the caller actually set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "type")]
    pub type_token: String,
    pub name: String,
    pub properties: PropertyMap,
    pub options: ResourceOptions,
}

/// Provider answer for a registration or a lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub urn: String,
    pub outputs: PropertyMap,
}

/// Messages accepted by the engine dispatch loop.
///
/// Each variant carries a `respond_to` channel; the requesting proxy holds
/// the receiving end and resolves its output cells from the answer.
#[derive(Debug)]
pub enum EngineRequest {
    /// Create a new resource from a validated envelope.
    Register {
        request: RegisterRequest,
        respond_to: Response<RegisterResponse>,
    },
    /// Bind to an existing resource by provider identifier. No inputs are
    /// validated or sent for this path.
    Lookup {
        type_token: String,
        name: String,
        id: String,
        respond_to: Response<RegisterResponse>,
    },
}
