use async_trait::async_trait;
use resource_sdk::{
    Engine, PropertyMap, RegisterRequest, RegisterResponse, RegistrationError, ResourceInputs,
    ResourceOptions, ResourceProvider,
};

// --- Test inputs ---

#[derive(Debug, Default)]
struct BucketArgs {
    location: Option<String>,
    versioned: Option<bool>,
}

impl ResourceInputs for BucketArgs {
    fn validate(&self) -> Result<(), RegistrationError> {
        match self.location.as_deref() {
            Some(location) if !location.is_empty() => Ok(()),
            _ => Err(RegistrationError::MissingProperty("location")),
        }
    }

    fn to_properties(&self) -> PropertyMap {
        let mut properties = PropertyMap::new();
        if let Some(location) = &self.location {
            properties.set("location", location.clone());
        }
        if let Some(versioned) = self.versioned {
            properties.set("versioned", versioned);
        }
        properties
    }
}

// --- Test provider ---

const BUCKET_TYPE: &str = "test:index:Bucket";

struct BucketProvider;

#[derive(Debug, thiserror::Error)]
enum BucketProviderError {
    #[error("unsupported resource kind '{0}'")]
    UnsupportedKind(String),
    #[error("no bucket with id '{0}'")]
    UnknownId(String),
}

#[async_trait]
impl ResourceProvider for BucketProvider {
    type Error = BucketProviderError;

    async fn construct(&self, request: &RegisterRequest) -> Result<RegisterResponse, Self::Error> {
        if request.type_token != BUCKET_TYPE {
            return Err(BucketProviderError::UnsupportedKind(
                request.type_token.clone(),
            ));
        }
        let mut outputs = PropertyMap::new();
        outputs.set(
            "selfLink",
            format!("https://provider.test/buckets/{}", request.name),
        );
        Ok(RegisterResponse {
            urn: format!("urn:test::{}", request.name),
            outputs,
        })
    }

    async fn read(
        &self,
        _type_token: &str,
        name: &str,
        id: &str,
    ) -> Result<RegisterResponse, Self::Error> {
        if id == "missing" {
            return Err(BucketProviderError::UnknownId(id.to_string()));
        }
        let mut outputs = PropertyMap::new();
        outputs.set("selfLink", format!("https://provider.test/buckets/{id}"));
        Ok(RegisterResponse {
            urn: format!("urn:test::{name}"),
            outputs,
        })
    }
}

// --- Tests ---

#[tokio::test]
async fn test_register_resolves_outputs_end_to_end() {
    let (engine, client) = Engine::new(10);
    tokio::spawn(engine.run(BucketProvider));

    let args = BucketArgs {
        location: Some("US".to_string()),
        versioned: Some(true),
    };
    let bucket = client
        .register(
            BUCKET_TYPE,
            "assets",
            &args,
            ResourceOptions::default(),
            &["selfLink"],
        )
        .await
        .unwrap();

    assert_eq!(bucket.urn().resolved().await.unwrap(), "urn:test::assets");
    let link = bucket.output("selfLink").resolved().await.unwrap();
    assert_eq!(
        link.unwrap().as_str(),
        Some("https://provider.test/buckets/assets")
    );
}

#[tokio::test]
async fn test_validation_failure_stops_before_dispatch() {
    let (engine, client) = Engine::new(10);
    tokio::spawn(engine.run(BucketProvider));

    let result = client
        .register(
            BUCKET_TYPE,
            "assets",
            &BucketArgs::default(),
            ResourceOptions::default(),
            &["selfLink"],
        )
        .await;

    assert!(matches!(
        result,
        Err(RegistrationError::MissingProperty("location"))
    ));
}

#[tokio::test]
async fn test_provider_failure_fails_every_output() {
    let (engine, client) = Engine::new(10);
    tokio::spawn(engine.run(BucketProvider));

    let args = BucketArgs {
        location: Some("US".to_string()),
        versioned: None,
    };
    let resource = client
        .register(
            "test:index:Cluster",
            "primary",
            &args,
            ResourceOptions::default(),
            &["selfLink"],
        )
        .await
        .unwrap();

    let urn_err = resource.urn().resolved().await.unwrap_err();
    assert!(
        matches!(&urn_err, RegistrationError::Provider(reason) if reason.contains("test:index:Cluster"))
    );
    let output_err = resource.output("selfLink").resolved().await.unwrap_err();
    assert!(matches!(output_err, RegistrationError::Provider(_)));
    // Failed cells never read as resolved values.
    assert!(resource.output("selfLink").try_get().is_none());
}

#[tokio::test]
async fn test_lookup_binds_without_validation() {
    let (engine, client) = Engine::new(10);
    tokio::spawn(engine.run(BucketProvider));

    // No location set; the id option must skip the required-field check.
    let bucket = client
        .register(
            BUCKET_TYPE,
            "assets",
            &BucketArgs::default(),
            ResourceOptions::import("assets-bucket-7f3a"),
            &["selfLink"],
        )
        .await
        .unwrap();

    let link = bucket.output("selfLink").resolved().await.unwrap();
    assert_eq!(
        link.unwrap().as_str(),
        Some("https://provider.test/buckets/assets-bucket-7f3a")
    );
}

#[tokio::test]
async fn test_lookup_of_unknown_id_fails_resolution() {
    let (engine, client) = Engine::new(10);
    tokio::spawn(engine.run(BucketProvider));

    let bucket = client
        .register(
            BUCKET_TYPE,
            "assets",
            &BucketArgs::default(),
            ResourceOptions::import("missing"),
            &["selfLink"],
        )
        .await
        .unwrap();

    let err = bucket.urn().resolved().await.unwrap_err();
    assert!(matches!(err, RegistrationError::Provider(reason) if reason.contains("missing")));
}

#[tokio::test]
async fn test_engine_shuts_down_when_clients_drop() {
    let (engine, client) = Engine::new(10);
    let handle = tokio::spawn(engine.run(BucketProvider));

    drop(client);

    handle.await.unwrap();
}
