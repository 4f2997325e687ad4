use std::sync::Arc;

use async_trait::async_trait;
use modelcat_core::common::error::{CatalogError, Result};
use modelcat_core::domain::ModelRow;

use super::{get_json, ListPage, ModelSource};
use crate::credential::{Credential, ML_RESOURCE};
use crate::normalize;

const API_VERSION: &str = "2024-04-01";

/// Client for one Azure ML registry's model listing. Shared by the exporter
/// source below and by the discovery prober.
pub struct RegistryModelsClient {
    client: reqwest::Client,
    credential: Arc<Credential>,
    registry_name: String,
    host: String,
}

impl RegistryModelsClient {
    pub fn new(credential: Arc<Credential>, registry_name: String, host: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            credential,
            registry_name,
            host,
        }
    }

    pub fn registry_name(&self) -> &str {
        &self.registry_name
    }

    pub async fn list_page(&self) -> Result<ListPage> {
        let token = self.credential.token(ML_RESOURCE)?;
        let url = format!(
            "https://{}/modelregistry/v1.0/registry/{}/models?api-version={}",
            self.host, self.registry_name, API_VERSION
        );
        match get_json(&self.client, &url, &token).await {
            Ok(body) => Ok(ListPage::from_value(body)),
            // A 404 from the data plane means the registry itself is unknown.
            Err(CatalogError::NotFound { .. }) => Err(CatalogError::NotFound {
                message: format!(
                    "registry '{}' does not exist or is not visible via {}",
                    self.registry_name, self.host
                ),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Registry-model source wrapping one registry client for the exporter.
pub struct RegistryModelSource {
    client: RegistryModelsClient,
}

impl RegistryModelSource {
    pub fn new(client: RegistryModelsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModelSource for RegistryModelSource {
    fn name(&self) -> String {
        format!("Azure ML Registry '{}'", self.client.registry_name())
    }

    async fn collect(&self) -> Result<Vec<ModelRow>> {
        let page = self.client.list_page().await?;
        Ok(page
            .items
            .iter()
            .map(|item| normalize::registry_model_row(self.client.registry_name(), item))
            .collect())
    }
}
