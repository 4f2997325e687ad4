use async_trait::async_trait;
use modelcat_core::common::error::{CatalogError, Result};
use modelcat_core::domain::ModelRow;
use serde_json::Value;
use tracing::{error, info};

pub mod foundry;
pub mod project;
pub mod registry;

/// One page of an Azure list response (`{"value": [...], "nextLink": ...}`).
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    pub items: Vec<Value>,
    pub next_link: Option<String>,
}

impl ListPage {
    pub fn from_value(body: Value) -> Self {
        let items = body
            .get("value")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        let next_link = body
            .get("nextLink")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        Self { items, next_link }
    }
}

/// A catalog source that lists its models as unified rows.
#[async_trait]
pub trait ModelSource: Send + Sync {
    /// Human-readable name used in progress output.
    fn name(&self) -> String;

    /// Fetch every model this source exposes and normalize each one.
    async fn collect(&self) -> Result<Vec<ModelRow>>;
}

/// Collect rows from every source in order. A failing source is logged with
/// its reason and contributes zero rows; the remaining sources still run.
pub async fn collect_all(sources: &[Box<dyn ModelSource>]) -> Vec<ModelRow> {
    let mut rows = Vec::new();
    for source in sources {
        println!("Fetching models from {}...", source.name());
        match source.collect().await {
            Ok(mut found) => {
                info!("Fetched {} models from {}", found.len(), source.name());
                println!("Found {} models in {}", found.len(), source.name());
                rows.append(&mut found);
            }
            Err(e) => {
                error!("Failed to list models from {}: {}", source.name(), e);
                println!("Error fetching models from {}: {}", source.name(), e);
            }
        }
    }
    rows
}

/// Authenticated GET returning the parsed JSON body. Non-success statuses map
/// onto the structured error kinds callers branch on.
pub(crate) async fn get_json(client: &reqwest::Client, url: &str, token: &str) -> Result<Value> {
    info!("GET {}", url);
    let resp = client
        .get(url)
        .bearer_auth(token)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = resp.status().as_u16();
    if status == 404 {
        return Err(CatalogError::NotFound {
            message: format!("{} returned 404", url),
        });
    }
    if !(200..300).contains(&status) {
        let body = resp.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            "request failed".to_string()
        } else {
            body.trim().to_string()
        };
        return Err(CatalogError::Api { status, message });
    }

    Ok(resp.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_page_reads_value_and_next_link() {
        let page = ListPage::from_value(json!({
            "value": [{"name": "a"}, {"name": "b"}],
            "nextLink": "https://example.invalid/page2"
        }));
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_link.as_deref(), Some("https://example.invalid/page2"));
    }

    #[test]
    fn list_page_tolerates_missing_envelope_fields() {
        let page = ListPage::from_value(json!({}));
        assert!(page.items.is_empty());
        assert!(page.next_link.is_none());

        let page = ListPage::from_value(json!({"value": "not-an-array"}));
        assert!(page.items.is_empty());
    }
}
