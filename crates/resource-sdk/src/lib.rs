//! # Resource SDK
//!
//! Client-side plumbing for declaring cloud resources inside an
//! infrastructure-as-code program. This crate contains no provisioning
//! logic; it implements the one mechanism such bindings need: a typed
//! resource-registration and remote-dispatch protocol.
//!
//! ## The Mechanism
//!
//! Three pieces, and nothing else:
//!
//! - **Property schema** ([`property`]): named, typed, optional-or-required
//!   input fields with explicit presence. Unset is absent, on the wire and
//!   when read back; absent is never `null` and never a default.
//! - **Input validator + remote proxy** ([`client`]): checks required fields
//!   right before dispatch (a local precondition, failing before anything is
//!   sent), then forwards exactly one envelope tagged with the resource
//!   kind's fixed type token.
//! - **Deferred outputs** ([`output`]): the proxy returns immediately;
//!   provider-produced values land later in write-once cells that can be
//!   read (as not-yet-available) or awaited.
//!
//! The [`engine`] module hosts the dispatch loop that stands in for the
//! orchestration engine, and [`provider`] is the seam it hands requests to.
//! Real create/read work (storage buckets, CDN distributions, DNS records)
//! belongs to an out-of-process provider plugin behind that seam.
//!
//! ## Architecture Layers
//!
//! 1. **Inputs** ([`ResourceInputs`]): your typed argument structs.
//! 2. **Dispatch** ([`EngineClient`], [`Engine`]): channel plumbing,
//!    validation ordering, envelope construction.
//! 3. **Resolution** ([`Output`], [`RawResource`]): write-once cells filled
//!    from the single provider answer.
//!
//! ## Quick Start
//!
//! ```rust
//! use async_trait::async_trait;
//! use resource_sdk::{
//!     Engine, PropertyMap, RegisterRequest, RegisterResponse, RegistrationError,
//!     ResourceInputs, ResourceOptions, ResourceProvider,
//! };
//!
//! // 1. Define typed inputs
//! #[derive(Debug, Default)]
//! struct QueueArgs {
//!     queue_name: Option<String>,
//! }
//!
//! impl ResourceInputs for QueueArgs {
//!     fn validate(&self) -> Result<(), RegistrationError> {
//!         match self.queue_name.as_deref() {
//!             Some(name) if !name.is_empty() => Ok(()),
//!             _ => Err(RegistrationError::MissingProperty("queueName")),
//!         }
//!     }
//!
//!     fn to_properties(&self) -> PropertyMap {
//!         let mut properties = PropertyMap::new();
//!         if let Some(name) = &self.queue_name {
//!             properties.set("queueName", name.clone());
//!         }
//!         properties
//!     }
//! }
//!
//! // 2. A provider stub (production providers live out of process)
//! struct EchoProvider;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("echo provider does not fail")]
//! struct EchoError;
//!
//! #[async_trait]
//! impl ResourceProvider for EchoProvider {
//!     type Error = EchoError;
//!
//!     async fn construct(
//!         &self,
//!         request: &RegisterRequest,
//!     ) -> Result<RegisterResponse, Self::Error> {
//!         let mut outputs = PropertyMap::new();
//!         outputs.set("url", format!("https://queues.example/{}", request.name));
//!         Ok(RegisterResponse {
//!             urn: format!("urn:demo::{}", request.name),
//!             outputs,
//!         })
//!     }
//!
//!     async fn read(
//!         &self,
//!         _type_token: &str,
//!         name: &str,
//!         _id: &str,
//!     ) -> Result<RegisterResponse, Self::Error> {
//!         Ok(RegisterResponse {
//!             urn: format!("urn:demo::{name}"),
//!             outputs: PropertyMap::new(),
//!         })
//!     }
//! }
//!
//! // 3. Wire and register
//! #[tokio::main]
//! async fn main() {
//!     let (engine, client) = Engine::new(8);
//!     tokio::spawn(engine.run(EchoProvider));
//!
//!     let args = QueueArgs {
//!         queue_name: Some("jobs".to_string()),
//!     };
//!     let queue = client
//!         .register("demo:index:Queue", "jobs", &args, ResourceOptions::default(), &["url"])
//!         .await
//!         .unwrap();
//!
//!     // Outputs are pending until the provider answers; await them.
//!     let url = queue.output("url").resolved().await.unwrap();
//!     assert_eq!(url.unwrap().as_str(), Some("https://queues.example/jobs"));
//! }
//! ```
//!
//! ## Error Model
//!
//! Two kinds only ([`RegistrationError`]): local precondition failures,
//! raised synchronously before dispatch; and remote provider failures,
//! opaque to this layer, surfaced as a failed resolution of the whole
//! resource rather than per field. No retries happen here.
//!
//! ## Testing
//!
//! The [`mock`] module provides a scripted [`MockEngine`](mock::MockEngine)
//! with envelope capture, plus raw channel helpers for asserting that a
//! request was (or was not) sent.

pub mod client;
pub mod engine;
pub mod error;
pub mod message;
pub mod mock;
pub mod options;
pub mod output;
pub mod property;
pub mod provider;
pub mod tracing;

// Re-export core types for convenience
pub use client::{EngineClient, RawResource};
pub use engine::Engine;
pub use error::RegistrationError;
pub use message::{EngineRequest, RegisterRequest, RegisterResponse, Response};
pub use options::ResourceOptions;
pub use output::{pending, Output, OutputSlot};
pub use property::{PropertyMap, PropertyValue, ResourceInputs};
pub use provider::ResourceProvider;
