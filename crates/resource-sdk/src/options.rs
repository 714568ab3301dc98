//! # Resource Options
//!
//! Caller-supplied configuration affecting how a registration is dispatched.
//! The SDK treats these as pass-through: apart from default merging, every
//! field travels to the engine untouched.

use serde::{Deserialize, Serialize};

/// Options controlling dispatch of a single resource registration.
///
/// Two fields change the dispatch path itself:
/// - `id` binds to an existing resource instead of creating one; inputs are
///   neither validated nor sent.
/// - `urn` skips required-field validation while still registering.
///
/// Everything else is forwarded verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOptions {
    /// Provider identifier of an existing resource to bind to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Logical resource URN, when already known to the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urn: Option<String>,
    /// URN of the parent resource, for parent/child grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Provider plugin version to route the request to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Refuse deletion of the created resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protect: Option<bool>,
}

impl ResourceOptions {
    /// Options binding to an existing resource by provider identifier.
    pub fn import(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Fill unset fields from `defaults`. Fields the caller set always win.
    ///
    /// The client merges its construction-time defaults into every
    /// registration this way, so there is no global SDK state to consult.
    pub fn merge_defaults(&mut self, defaults: &ResourceOptions) {
        if self.id.is_none() {
            self.id = defaults.id.clone();
        }
        if self.urn.is_none() {
            self.urn = defaults.urn.clone();
        }
        if self.parent.is_none() {
            self.parent = defaults.parent.clone();
        }
        if self.version.is_none() {
            self.version = defaults.version.clone();
        }
        if self.protect.is_none() {
            self.protect = defaults.protect;
        }
    }
}
