use std::sync::Arc;

use async_trait::async_trait;
use modelcat_core::common::error::Result;
use modelcat_core::domain::ModelRow;

use super::{get_json, ListPage, ModelSource};
use crate::credential::{Credential, AI_RESOURCE};
use crate::normalize;

const API_VERSION: &str = "2025-05-01";

/// Project-deployment source: the AI Foundry project API listing the model
/// deployments behind one project endpoint.
pub struct ProjectDeploymentSource {
    client: reqwest::Client,
    credential: Arc<Credential>,
    endpoint: String,
}

impl ProjectDeploymentSource {
    pub fn new(credential: Arc<Credential>, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            credential,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    async fn list_page(&self) -> Result<ListPage> {
        let token = self.credential.token(AI_RESOURCE)?;
        let url = format!("{}/deployments?api-version={}", self.endpoint, API_VERSION);
        Ok(ListPage::from_value(
            get_json(&self.client, &url, &token).await?,
        ))
    }
}

#[async_trait]
impl ModelSource for ProjectDeploymentSource {
    fn name(&self) -> String {
        format!("AI Foundry project at {}", self.endpoint)
    }

    async fn collect(&self) -> Result<Vec<ModelRow>> {
        let page = self.list_page().await?;
        Ok(page.items.iter().map(normalize::deployment_row).collect())
    }
}
