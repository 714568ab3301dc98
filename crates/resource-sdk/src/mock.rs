//! # Mock Engine & Testing Utilities
//!
//! The [`MockEngine`] answers engine requests from a scripted expectation
//! queue, entirely in-memory, and captures every envelope it receives so
//! tests can assert on exactly what would have gone to the provider. Use it
//! to test binding logic without spawning a real dispatch loop; use a real
//! [`Engine`](crate::engine::Engine) with a stub provider to test the loop
//! itself.
//!
//! For assertions at the channel level (for example, that a failed
//! validation sent *nothing*), use [`create_mock_engine`] and inspect the
//! receiver directly.

use crate::client::EngineClient;
use crate::error::RegistrationError;
use crate::message::{EngineRequest, RegisterRequest, RegisterResponse, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation {
    Register {
        response: Result<RegisterResponse, RegistrationError>,
    },
    Lookup {
        id: String,
        response: Result<RegisterResponse, RegistrationError>,
    },
}

/// A scripted engine double with request capture.
///
/// # Example
/// ```ignore
/// let mut mock = MockEngine::new();
/// mock.expect_register().return_ok(response);
///
/// let client = mock.client();
/// // Drive the binding under test...
/// assert_eq!(mock.requests().len(), 1);
/// mock.verify(); // Ensures all expectations were consumed
/// ```
pub struct MockEngine {
    client: EngineClient,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<RegisterRequest>>>,
    lookups: Arc<Mutex<Vec<(String, String, String)>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEngine {
    /// Creates a mock engine with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<EngineRequest>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let lookups = Arc::new(Mutex::new(Vec::new()));

        let expectations_task = expectations.clone();
        let requests_task = requests.clone();
        let lookups_task = lookups.clone();

        let handle = tokio::spawn(async move {
            while let Some(message) = receiver.recv().await {
                let expectation = expectations_task.lock().unwrap().pop_front();

                match (message, expectation) {
                    (
                        EngineRequest::Register {
                            request,
                            respond_to,
                        },
                        Some(Expectation::Register { response }),
                    ) => {
                        requests_task.lock().unwrap().push(request);
                        let _ = respond_to.send(response);
                    }
                    (
                        EngineRequest::Lookup {
                            type_token,
                            name,
                            id,
                            respond_to,
                        },
                        Some(Expectation::Lookup {
                            id: expected,
                            response,
                        }),
                    ) => {
                        if id != expected {
                            panic!("lookup id mismatch: got '{id}', expected '{expected}'");
                        }
                        lookups_task.lock().unwrap().push((type_token, name, id));
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: EngineClient::new(sender),
            expectations,
            requests,
            lookups,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> EngineClient {
        self.client.clone()
    }

    /// Expects a registration.
    pub fn expect_register(&mut self) -> RegisterExpectationBuilder {
        RegisterExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a lookup of the given identifier.
    pub fn expect_lookup(&mut self, id: impl Into<String>) -> LookupExpectationBuilder {
        LookupExpectationBuilder {
            id: id.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Registration envelopes the mock received, in order.
    pub fn requests(&self) -> Vec<RegisterRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Lookups the mock received, as `(type_token, name, id)` tuples.
    pub fn lookups(&self) -> Vec<(String, String, String)> {
        self.lookups.lock().unwrap().clone()
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for registration expectations.
pub struct RegisterExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl RegisterExpectationBuilder {
    pub fn return_ok(self, response: RegisterResponse) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Register {
                response: Ok(response),
            });
    }

    pub fn return_err(self, error: RegistrationError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Register {
                response: Err(error),
            });
    }
}

/// Builder for lookup expectations.
pub struct LookupExpectationBuilder {
    id: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl LookupExpectationBuilder {
    pub fn return_ok(self, response: RegisterResponse) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Lookup {
                id: self.id,
                response: Ok(response),
            });
    }

    pub fn return_err(self, error: RegistrationError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Lookup {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Creates a raw client plus the receiving end of its channel.
///
/// The test owns the receiver, so it can assert which messages were sent
/// (or that none were) and answer them by hand.
pub fn create_mock_engine(
    buffer_size: usize,
) -> (EngineClient, mpsc::Receiver<EngineRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (EngineClient::new(sender), receiver)
}

/// Helper to verify that the next message is a registration.
pub async fn expect_register(
    receiver: &mut mpsc::Receiver<EngineRequest>,
) -> Option<(RegisterRequest, Response<RegisterResponse>)> {
    match receiver.recv().await {
        Some(EngineRequest::Register {
            request,
            respond_to,
        }) => Some((request, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a lookup.
pub async fn expect_lookup(
    receiver: &mut mpsc::Receiver<EngineRequest>,
) -> Option<(String, String, String, Response<RegisterResponse>)> {
    match receiver.recv().await {
        Some(EngineRequest::Lookup {
            type_token,
            name,
            id,
            respond_to,
        }) => Some((type_token, name, id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ResourceOptions;
    use crate::property::{PropertyMap, ResourceInputs};

    #[derive(Debug, Default)]
    struct TopicArgs {
        topic: Option<String>,
    }

    impl ResourceInputs for TopicArgs {
        fn validate(&self) -> Result<(), RegistrationError> {
            match self.topic.as_deref() {
                Some(topic) if !topic.is_empty() => Ok(()),
                _ => Err(RegistrationError::MissingProperty("topic")),
            }
        }

        fn to_properties(&self) -> PropertyMap {
            let mut properties = PropertyMap::new();
            if let Some(topic) = &self.topic {
                properties.set("topic", topic.clone());
            }
            properties
        }
    }

    #[tokio::test]
    async fn test_scripted_register_resolves_outputs() {
        let mut mock = MockEngine::new();
        let mut outputs = PropertyMap::new();
        outputs.set("arn", "arn:demo:events");
        mock.expect_register().return_ok(RegisterResponse {
            urn: "urn:demo::events".to_string(),
            outputs,
        });

        let client = mock.client();
        let args = TopicArgs {
            topic: Some("events".to_string()),
        };
        let resource = client
            .register(
                "demo:index:Topic",
                "events",
                &args,
                ResourceOptions::default(),
                &["arn"],
            )
            .await
            .unwrap();

        assert_eq!(resource.urn().resolved().await.unwrap(), "urn:demo::events");
        let arn = resource.output("arn").resolved().await.unwrap();
        assert_eq!(arn.unwrap().as_str(), Some("arn:demo:events"));

        assert_eq!(mock.requests().len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_raw_mock_engine_answers_by_hand() {
        let (client, mut receiver) = create_mock_engine(10);

        let args = TopicArgs {
            topic: Some("audit".to_string()),
        };
        let resource = client
            .register(
                "demo:index:Topic",
                "audit",
                &args,
                ResourceOptions::default(),
                &["arn"],
            )
            .await
            .unwrap();
        assert!(resource.urn().is_pending());

        let (request, responder) = expect_register(&mut receiver)
            .await
            .expect("Expected a registration");
        assert_eq!(request.name, "audit");
        assert_eq!(request.properties.get_str("topic"), Some("audit"));

        responder
            .send(Ok(RegisterResponse {
                urn: "urn:demo::audit".to_string(),
                outputs: PropertyMap::new(),
            }))
            .unwrap();

        assert_eq!(resource.urn().resolved().await.unwrap(), "urn:demo::audit");
    }

    #[tokio::test]
    async fn test_scripted_lookup_rejects_unknown_id() {
        let mut mock = MockEngine::new();
        mock.expect_lookup("ghost")
            .return_err(RegistrationError::NotFound("ghost".to_string()));

        let client = mock.client();
        let resource = client
            .register(
                "demo:index:Topic",
                "ghost",
                &TopicArgs::default(),
                ResourceOptions::import("ghost"),
                &["arn"],
            )
            .await
            .unwrap();

        let err = resource.urn().resolved().await.unwrap_err();
        assert!(matches!(err, RegistrationError::Provider(reason) if reason.contains("ghost")));
        mock.verify();
    }
}
