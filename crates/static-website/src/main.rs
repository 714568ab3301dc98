//! Demo program: declare a static website against an in-process provider
//! stand-in and report its URLs.
//!
//! The real provider plugin (bucket, CDN, DNS) lives out of process; the
//! [`PreviewProvider`] here only answers registrations with canned URLs so
//! the full dispatch-and-resolve path can be watched with `RUST_LOG=debug`.

use async_trait::async_trait;
use resource_sdk::tracing::setup_tracing;
use resource_sdk::{
    Engine, PropertyMap, RegisterRequest, RegisterResponse, ResourceOptions, ResourceProvider,
};
use static_website::{Website, WebsiteArgs};
use tracing::{error, info};

struct PreviewProvider;

#[derive(Debug, thiserror::Error)]
#[error("no website with id '{0}'")]
struct UnknownWebsite(String);

#[async_trait]
impl ResourceProvider for PreviewProvider {
    type Error = UnknownWebsite;

    async fn construct(&self, request: &RegisterRequest) -> Result<RegisterResponse, Self::Error> {
        let mut outputs = PropertyMap::new();
        outputs.set(
            "originURL",
            format!(
                "https://storage.googleapis.com/{}-bucket/index.html",
                request.name
            ),
        );
        if request.properties.get_bool("withCDN") == Some(true) {
            outputs.set("cdnURL", format!("http://cdn.{}.example", request.name));
        }
        Ok(RegisterResponse {
            urn: format!("urn:preview::{}", request.name),
            outputs,
        })
    }

    async fn read(
        &self,
        _type_token: &str,
        _name: &str,
        id: &str,
    ) -> Result<RegisterResponse, Self::Error> {
        Err(UnknownWebsite(id.to_string()))
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting static-website demo");

    let (engine, client) = Engine::new(32);
    let engine_handle = tokio::spawn(engine.run(PreviewProvider));

    let args = WebsiteArgs::new("./www")
        .index_document("index.html")
        .error_document("404.html")
        .with_cdn(true);

    let site = Website::create(&client, "demo-site", args, ResourceOptions::default())
        .await
        .map_err(|e| e.to_string())?;

    info!(name = %site.name(), "Website registered");

    match site.origin_url().await {
        Ok(url) => info!(%url, "Origin ready"),
        Err(e) => error!(error = %e, "Origin failed"),
    }
    match site.cdn_url().await {
        Ok(Some(url)) => info!(%url, "CDN ready"),
        Ok(None) => info!("No CDN requested"),
        Err(e) => error!(error = %e, "CDN failed"),
    }

    // Dropping the client lets the engine drain and exit.
    drop(client);
    let _ = engine_handle.await;

    info!("Demo completed");
    Ok(())
}
