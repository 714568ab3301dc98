//! # Engine Client & Resource Proxy
//!
//! This module defines the client half of the SDK: a cheap-to-clone handle
//! that validates inputs, builds the request envelope, sends it over the
//! engine channel, and hands back a [`RawResource`] whose output cells are
//! still pending. The caller gets the resource back immediately; a resolver
//! task fills the cells when the oneshot answer arrives.

use crate::error::RegistrationError;
use crate::message::{EngineRequest, RegisterRequest, RegisterResponse};
use crate::options::ResourceOptions;
use crate::output::{pending, Output, OutputSlot};
use crate::property::{PropertyValue, ResourceInputs};
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// A type-safe proxy for registering resources with the engine.
///
/// Holds only a sender plus the option defaults merged into every
/// registration, so cloning is inexpensive and clones can be shared across
/// tasks.
#[derive(Clone)]
pub struct EngineClient {
    sender: mpsc::Sender<EngineRequest>,
    defaults: ResourceOptions,
}

impl EngineClient {
    pub fn new(sender: mpsc::Sender<EngineRequest>) -> Self {
        Self {
            sender,
            defaults: ResourceOptions::default(),
        }
    }

    /// Replace the option defaults merged into every registration.
    ///
    /// This is where a binding pins its plugin version; there is no global
    /// SDK state to fall back on.
    pub fn with_defaults(mut self, defaults: ResourceOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Register one resource and return its pending outputs immediately.
    ///
    /// Dispatch order:
    /// 1. options naming an existing `id` bind to it; nothing is validated
    ///    and no registration envelope is built;
    /// 2. otherwise required inputs are checked locally (skipped when `urn`
    ///    is set) and the call fails before anything reaches the channel;
    /// 3. exactly one envelope is sent, tagged with `type_token`; the
    ///    returned resource carries one unresolved cell per declared output
    ///    key.
    #[instrument(skip_all, fields(type_token = %type_token, name = %name))]
    pub async fn register(
        &self,
        type_token: &str,
        name: &str,
        inputs: &dyn ResourceInputs,
        mut options: ResourceOptions,
        output_keys: &'static [&'static str],
    ) -> Result<RawResource, RegistrationError> {
        options.merge_defaults(&self.defaults);

        if let Some(id) = options.id.clone() {
            debug!(%id, "Binding to existing resource");
            let (respond_to, response) = oneshot::channel();
            self.sender
                .send(EngineRequest::Lookup {
                    type_token: type_token.to_string(),
                    name: name.to_string(),
                    id,
                    respond_to,
                })
                .await
                .map_err(|_| RegistrationError::EngineClosed)?;
            return Ok(RawResource::unresolved(response, output_keys));
        }

        if options.urn.is_none() {
            inputs.validate()?;
        }

        let request = RegisterRequest {
            type_token: type_token.to_string(),
            name: name.to_string(),
            properties: inputs.to_properties(),
            options,
        };

        debug!("Sending registration envelope");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EngineRequest::Register {
                request,
                respond_to,
            })
            .await
            .map_err(|_| RegistrationError::EngineClosed)?;

        Ok(RawResource::unresolved(response, output_keys))
    }
}

/// A registered resource whose outputs have not necessarily arrived.
///
/// Owned by the proxy call that created it. Every cell is written at most
/// once, by the resolver task, from the single engine answer.
#[derive(Debug)]
pub struct RawResource {
    urn: Output<String>,
    outputs: HashMap<&'static str, Output<Option<PropertyValue>>>,
}

impl RawResource {
    fn unresolved(
        response: oneshot::Receiver<Result<RegisterResponse, RegistrationError>>,
        output_keys: &'static [&'static str],
    ) -> Self {
        let (urn_slot, urn) = pending();
        let mut slots: Vec<(&'static str, OutputSlot<Option<PropertyValue>>)> =
            Vec::with_capacity(output_keys.len());
        let mut outputs = HashMap::with_capacity(output_keys.len());
        for &key in output_keys {
            let (slot, output) = pending();
            slots.push((key, slot));
            outputs.insert(key, output);
        }

        // One answer fills every cell in a single pass. A response field
        // that is absent resolves its cell to an absent value, not an
        // error; a failure fans out to every cell with the same reason.
        tokio::spawn(async move {
            match response.await {
                Ok(Ok(response)) => {
                    urn_slot.resolve(response.urn);
                    for (key, slot) in slots {
                        slot.resolve(response.outputs.get(key).cloned());
                    }
                }
                Ok(Err(e)) => {
                    let reason = match e {
                        RegistrationError::Provider(reason) => reason,
                        other => other.to_string(),
                    };
                    urn_slot.fail(reason.clone());
                    for (_, slot) in slots {
                        slot.fail(reason.clone());
                    }
                }
                // Responder dropped: dropping the slots lets readers
                // observe it.
                Err(_) => {}
            }
        });

        Self { urn, outputs }
    }

    /// URN assigned by the engine.
    pub fn urn(&self) -> Output<String> {
        self.urn.clone()
    }

    /// Handle for a declared output key. Undeclared keys read as
    /// permanently absent.
    pub fn output(&self, key: &str) -> Output<Option<PropertyValue>> {
        match self.outputs.get(key) {
            Some(output) => output.clone(),
            None => Output::ready(None),
        }
    }
}
