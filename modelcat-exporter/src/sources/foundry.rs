use std::sync::Arc;

use async_trait::async_trait;
use modelcat_core::common::error::Result;
use modelcat_core::domain::ModelRow;

use super::{get_json, ListPage, ModelSource};
use crate::credential::{Credential, MANAGEMENT_RESOURCE};
use crate::normalize;

const ARM_ENDPOINT: &str = "https://management.azure.com";
const API_VERSION: &str = "2024-10-01";

/// Account-model source: the Cognitive Services management API listing every
/// model available to the subscription in one region.
pub struct FoundryCatalogSource {
    client: reqwest::Client,
    credential: Arc<Credential>,
    subscription_id: String,
    location: String,
}

impl FoundryCatalogSource {
    pub fn new(credential: Arc<Credential>, subscription_id: String, location: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            credential,
            subscription_id,
            location,
        }
    }

    async fn list_page(&self) -> Result<ListPage> {
        let token = self.credential.token(MANAGEMENT_RESOURCE)?;
        let url = format!(
            "{}/subscriptions/{}/providers/Microsoft.CognitiveServices/locations/{}/models?api-version={}",
            ARM_ENDPOINT, self.subscription_id, self.location, API_VERSION
        );
        Ok(ListPage::from_value(
            get_json(&self.client, &url, &token).await?,
        ))
    }
}

#[async_trait]
impl ModelSource for FoundryCatalogSource {
    fn name(&self) -> String {
        format!("AI Foundry catalog in location '{}'", self.location)
    }

    async fn collect(&self) -> Result<Vec<ModelRow>> {
        let page = self.list_page().await?;
        // Wrapper entries without model details carry nothing worth a row.
        Ok(page
            .items
            .iter()
            .filter(|item| item.get("model").map_or(false, |m| m.is_object()))
            .map(normalize::account_model_row)
            .collect())
    }
}
