use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use crate::error::{CatalogError, Result};
use crate::mapping::catalog_from_json;
use crate::types::Catalog;

/// Relative location of the catalog file on the site.
pub const DEFAULT_CATALOG_PATH: &str = "source/NikkiNacksProducts.json";

/// Somewhere a catalog body can be fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String>;
}

/// Fetches the catalog over HTTP relative to a site base URL.
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    pub fn new(base: Url) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CatalogError::network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, base })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = self
            .base
            .join(path)
            .map_err(|e| CatalogError::network(format!("invalid catalog url {path}: {e}")))?;
        tracing::debug!(%url, "fetching catalog");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "catalog request failed");
                CatalogError::network("Error while retrieving JSON file.")
            })?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, %status, "catalog request rejected");
            return Err(CatalogError::network("Failure response received while retrieving JSON file."));
        }
        response
            .text()
            .await
            .map_err(|e| CatalogError::network(format!("Error while retrieving JSON file: {e}")))
    }
}

/// Reads the catalog from a site directory on disk.
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        tracing::debug!(path = %full.display(), "reading catalog");
        tokio::fs::read_to_string(&full).await.map_err(|e| {
            CatalogError::network(format!("Error while retrieving JSON file {}: {e}", full.display()))
        })
    }
}

/// Pick a source for `base`: an http(s) URL goes over the network, anything else is a directory.
pub fn source_for(base: &str) -> Result<Box<dyn CatalogSource>> {
    match Url::parse(base) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            // join() treats the last segment as a file unless the path ends in '/'
            let url = if url.path().ends_with('/') {
                url
            } else {
                Url::parse(&format!("{url}/")).map_err(|e| CatalogError::network(e.to_string()))?
            };
            Ok(Box::new(HttpSource::new(url)?))
        }
        _ => Ok(Box::new(FileSource::new(base))),
    }
}

/// Single attempt, no retry.
pub async fn load_catalog(source: &dyn CatalogSource, path: &str) -> Result<Catalog> {
    let body = source.fetch(path).await?;
    let catalog = catalog_from_json(&body)?;
    tracing::info!(products = catalog.len(), "catalog loaded");
    Ok(catalog)
}
