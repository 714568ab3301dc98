//! # Website Component Binding
//!
//! Typed binding for the `google-cloud-static-website:index:Website`
//! component resource. [`WebsiteArgs`] is the property schema, [`Website`]
//! the proxy holding the deferred URL outputs.

use resource_sdk::{
    EngineClient, Output, PropertyMap, PropertyValue, RegistrationError, ResourceInputs,
    ResourceOptions,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Fixed type token routing website registrations to the provider.
pub const WEBSITE_TYPE: &str = "google-cloud-static-website:index:Website";

/// Output keys the provider populates for a website.
const OUTPUT_KEYS: &[&str] = &["originURL", "cdnURL", "customDomainURL"];

/// Arguments for constructing a [`Website`].
///
/// Only `site_path` is required, and only at dispatch time; construction
/// never validates. Setters overwrite prior values, and unset fields stay
/// absent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteArgs {
    /// Root directory containing the website's contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_path: Option<String>,
    /// Default document for the site. The provider falls back to
    /// `index.html`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_document: Option<String>,
    /// Document served for missing pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_document: Option<String>,
    /// Provision a CDN in front of the origin bucket.
    #[serde(rename = "withCDN", default, skip_serializing_if = "Option::is_none")]
    pub with_cdn: Option<bool>,
}

impl WebsiteArgs {
    /// Arguments with the required site path set.
    pub fn new(site_path: impl Into<String>) -> Self {
        Self {
            site_path: Some(site_path.into()),
            ..Self::default()
        }
    }

    pub fn index_document(mut self, document: impl Into<String>) -> Self {
        self.index_document = Some(document.into());
        self
    }

    pub fn error_document(mut self, document: impl Into<String>) -> Self {
        self.error_document = Some(document.into());
        self
    }

    pub fn with_cdn(mut self, enabled: bool) -> Self {
        self.with_cdn = Some(enabled);
        self
    }
}

impl ResourceInputs for WebsiteArgs {
    fn validate(&self) -> Result<(), RegistrationError> {
        match self.site_path.as_deref() {
            Some(path) if !path.is_empty() => Ok(()),
            _ => Err(RegistrationError::MissingProperty("sitePath")),
        }
    }

    fn to_properties(&self) -> PropertyMap {
        let mut properties = PropertyMap::new();
        if let Some(path) = &self.site_path {
            properties.set("sitePath", path.clone());
        }
        if let Some(document) = &self.index_document {
            properties.set("indexDocument", document.clone());
        }
        if let Some(document) = &self.error_document {
            properties.set("errorDocument", document.clone());
        }
        if let Some(enabled) = self.with_cdn {
            properties.set("withCDN", enabled);
        }
        properties
    }
}

/// A declared static-website resource.
///
/// Creation returns as soon as the envelope is dispatched; the URL outputs
/// resolve when the provider answers. The `try_*` accessors peek without
/// blocking and report not-yet-available as `None`; the awaiting accessors
/// surface a provider failure as an error for the whole resource.
#[derive(Debug, Clone)]
pub struct Website {
    name: String,
    urn: Output<String>,
    origin_url: Output<Option<PropertyValue>>,
    cdn_url: Output<Option<PropertyValue>>,
    custom_domain_url: Output<Option<PropertyValue>>,
}

impl Website {
    /// Declare a website with the given unique `name`.
    ///
    /// Fails locally, before anything is dispatched, if `site_path` is
    /// unset, unless `options` bind to an existing resource (`id`) or
    /// already carry a `urn`.
    #[instrument(skip(engine, args, options))]
    pub async fn create(
        engine: &EngineClient,
        name: &str,
        args: WebsiteArgs,
        options: ResourceOptions,
    ) -> Result<Self, RegistrationError> {
        debug!("Registering website");
        let resource = engine
            .register(WEBSITE_TYPE, name, &args, options, OUTPUT_KEYS)
            .await?;

        Ok(Self {
            name: name.to_string(),
            urn: resource.urn(),
            origin_url: resource.output("originURL"),
            cdn_url: resource.output("cdnURL"),
            custom_domain_url: resource.output("customDomainURL"),
        })
    }

    /// Caller-assigned resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// URN assigned by the engine.
    pub fn urn(&self) -> Output<String> {
        self.urn.clone()
    }

    /// URL of the storage origin serving the site's content.
    pub async fn origin_url(&self) -> Result<String, RegistrationError> {
        match self.origin_url.resolved().await? {
            Some(PropertyValue::String(url)) => Ok(url),
            Some(_) => Err(RegistrationError::Provider(
                "output 'originURL' is not a string".to_string(),
            )),
            None => Err(RegistrationError::MissingOutput("originURL")),
        }
    }

    /// Non-blocking peek at the origin URL. `None` until the provider has
    /// answered.
    pub fn try_origin_url(&self) -> Option<String> {
        self.origin_url
            .try_get()
            .flatten()
            .and_then(|value| value.as_str().map(str::to_owned))
    }

    /// URL of the CDN endpoint, when the site was created with a CDN.
    pub async fn cdn_url(&self) -> Result<Option<String>, RegistrationError> {
        optional_url(self.cdn_url.resolved().await?, "cdnURL")
    }

    /// Non-blocking peek at the CDN endpoint. The outer `None` means the
    /// provider has not answered; the inner `None` means the site has no
    /// CDN.
    pub fn try_cdn_url(&self) -> Option<Option<String>> {
        self.cdn_url
            .try_get()
            .map(|value| value.and_then(|value| value.as_str().map(str::to_owned)))
    }

    /// URL under the custom domain, when one was configured.
    pub async fn custom_domain_url(&self) -> Result<Option<String>, RegistrationError> {
        optional_url(self.custom_domain_url.resolved().await?, "customDomainURL")
    }

    /// Non-blocking peek at the custom-domain URL, with the same shape as
    /// [`try_cdn_url`](Self::try_cdn_url).
    pub fn try_custom_domain_url(&self) -> Option<Option<String>> {
        self.custom_domain_url
            .try_get()
            .map(|value| value.and_then(|value| value.as_str().map(str::to_owned)))
    }
}

fn optional_url(
    value: Option<PropertyValue>,
    key: &str,
) -> Result<Option<String>, RegistrationError> {
    match value {
        None => Ok(None),
        Some(PropertyValue::String(url)) => Ok(Some(url)),
        Some(_) => Err(RegistrationError::Provider(format!(
            "output '{key}' is not a string"
        ))),
    }
}
