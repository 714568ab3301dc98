//! # Engine Dispatch Loop
//!
//! This module defines the [`Engine`], the server half of the SDK. It owns
//! the receiving end of the request channel and forwards each registration
//! or lookup to the provider, answering the requesting proxy through the
//! oneshot channel carried in the message.
//!
//! # Concurrency Model
//! One engine task serves every client clone. Requests are processed
//! sequentially within the loop, so no locking is needed here; the remote
//! call is asynchronous relative to the *caller* because the proxy returns
//! before the answer arrives, not because the engine interleaves work.

use crate::client::EngineClient;
use crate::error::RegistrationError;
use crate::message::EngineRequest;
use crate::provider::ResourceProvider;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The dispatch loop standing between resource proxies and a provider.
///
/// # Usage Pattern
///
/// 1. **Create**: [`Engine::new`] returns the engine and its connected
///    [`EngineClient`].
/// 2. **Run**: spawn [`Engine::run`] with the provider; the provider is
///    injected here rather than at construction time, so clients can be
///    handed out before the provider exists.
/// 3. **Shutdown**: drop every client; the loop drains and exits.
pub struct Engine {
    receiver: mpsc::Receiver<EngineRequest>,
}

impl Engine {
    /// Creates an engine and the client proxy connected to it.
    ///
    /// `buffer_size` caps the request channel; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, EngineClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { receiver }, EngineClient::new(sender))
    }

    /// Runs the dispatch loop until every client is dropped.
    pub async fn run<P: ResourceProvider>(mut self, provider: P) {
        info!("Engine started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                EngineRequest::Register {
                    request,
                    respond_to,
                } => {
                    debug!(type_token = %request.type_token, name = %request.name, "Register");
                    let result = provider
                        .construct(&request)
                        .await
                        .map_err(|e| RegistrationError::Provider(e.to_string()));
                    match &result {
                        Ok(response) => {
                            info!(name = %request.name, urn = %response.urn, "Registered")
                        }
                        Err(e) => warn!(name = %request.name, error = %e, "Register failed"),
                    }
                    let _ = respond_to.send(result);
                }
                EngineRequest::Lookup {
                    type_token,
                    name,
                    id,
                    respond_to,
                } => {
                    debug!(%type_token, %name, %id, "Lookup");
                    let result = provider
                        .read(&type_token, &name, &id)
                        .await
                        .map_err(|e| RegistrationError::Provider(e.to_string()));
                    match &result {
                        Ok(_) => info!(%name, %id, "Bound to existing resource"),
                        Err(e) => warn!(%name, %id, error = %e, "Lookup failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!("Engine shutdown");
    }
}
