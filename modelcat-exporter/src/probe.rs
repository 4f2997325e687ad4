//! Empirical registry discovery: one bounded listing attempt per candidate
//! name, classified into reachable/unreachable with a reason.

use std::sync::Arc;

use modelcat_core::common::error::{CatalogError, Result};
use modelcat_core::domain::{ProbeCount, RegistryProbeResult, NOT_AVAILABLE};
use tracing::info;

use crate::credential::Credential;
use crate::sources::registry::RegistryModelsClient;
use crate::sources::ListPage;

/// Listing is cut off after this many models per registry.
pub const LIST_CAP: usize = 10;
/// At most this many model names are kept as a sample.
pub const SAMPLE_CAP: usize = 5;

/// Turn one listing outcome into a probe result. Any successful listing,
/// zero items included, counts as reachable; failures map their error kind
/// onto a reason string.
pub fn classify(name: &str, listing: Result<ListPage>) -> RegistryProbeResult {
    match listing {
        Ok(page) => {
            let consumed = page.items.len().min(LIST_CAP);
            let exhausted = page.items.len() <= LIST_CAP && page.next_link.is_none();
            let model_count = if consumed == LIST_CAP && !exhausted {
                ProbeCount::AtLeast(consumed)
            } else {
                ProbeCount::Exact(consumed)
            };
            let sample_models = page
                .items
                .iter()
                .take(SAMPLE_CAP)
                .map(|item| {
                    item.get("name")
                        .and_then(|v| v.as_str())
                        .unwrap_or(NOT_AVAILABLE)
                        .to_string()
                })
                .collect();
            RegistryProbeResult {
                name: name.to_string(),
                accessible: true,
                model_count,
                sample_models,
                error: None,
            }
        }
        Err(e) => {
            let reason = match e {
                CatalogError::NotFound { message } => {
                    format!("registry not found: {}", message)
                }
                CatalogError::Api { status, message } => {
                    format!("HTTP error: {} - {}", status, message)
                }
                other => format!("error: {}", other),
            };
            RegistryProbeResult {
                name: name.to_string(),
                accessible: false,
                model_count: ProbeCount::Exact(0),
                sample_models: Vec::new(),
                error: Some(reason),
            }
        }
    }
}

/// Probe every candidate in order, one attempt each, printing progress.
pub async fn probe_registries(
    credential: &Arc<Credential>,
    candidates: &[String],
    host: &str,
) -> Vec<RegistryProbeResult> {
    let mut results = Vec::new();
    for name in candidates {
        println!("Testing registry: {}...", name);
        let client =
            RegistryModelsClient::new(credential.clone(), name.clone(), host.to_string());
        let result = classify(name, client.list_page().await);
        match &result.error {
            None => {
                info!("Registry {} reachable with {} models", name, result.model_count);
                println!("  ✓ Accessible - Found {} models", result.model_count);
                if !result.sample_models.is_empty() {
                    println!(
                        "    Sample models: {}",
                        result.sample_models[..result.sample_models.len().min(3)].join(", ")
                    );
                }
            }
            Some(reason) => {
                info!("Registry {} not reachable: {}", name, reason);
                println!("  ✗ Not accessible - {}", reason);
            }
        }
        println!();
        results.push(result);
    }
    results
}

/// Comma-joined names of every reachable registry.
pub fn recommended_registries(results: &[RegistryProbeResult]) -> String {
    results
        .iter()
        .filter(|r| r.accessible)
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the discovery summary: totals, both partitions, and the
/// recommended registry list in `.env` form.
pub fn print_summary(results: &[RegistryProbeResult]) {
    println!("{}", "=".repeat(60));
    println!("DISCOVERY SUMMARY");
    println!("{}", "=".repeat(60));
    println!();

    let accessible: Vec<_> = results.iter().filter(|r| r.accessible).collect();
    let not_accessible: Vec<_> = results.iter().filter(|r| !r.accessible).collect();

    println!("Total registries tested: {}", results.len());
    println!("Accessible registries: {}", accessible.len());
    println!("Not accessible registries: {}", not_accessible.len());
    println!();

    if !accessible.is_empty() {
        println!("ACCESSIBLE REGISTRIES:");
        println!("{}", "-".repeat(60));
        for r in &accessible {
            println!("  • {}", r.name);
            println!("    Model count: {}", r.model_count);
            if !r.sample_models.is_empty() {
                println!(
                    "    Sample models: {}",
                    r.sample_models[..r.sample_models.len().min(3)].join(", ")
                );
            }
        }
        println!();
    }

    if !not_accessible.is_empty() {
        println!("NOT ACCESSIBLE REGISTRIES:");
        println!("{}", "-".repeat(60));
        for r in &not_accessible {
            println!("  • {}", r.name);
            if let Some(reason) = &r.error {
                println!("    Error: {}", reason);
            }
        }
        println!();
    }

    if !accessible.is_empty() {
        println!("RECOMMENDED REGISTRY LIST FOR .env:");
        println!("{}", "-".repeat(60));
        println!("AZURE_ML_REGISTRY_NAMES={}", recommended_registries(results));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(count: usize, next_link: Option<&str>) -> ListPage {
        ListPage {
            items: (0..count).map(|i| json!({"name": format!("model-{}", i)})).collect(),
            next_link: next_link.map(|s| s.to_string()),
        }
    }

    #[test]
    fn exact_count_below_the_cap() {
        let result = classify("azureml-meta", Ok(page(7, None)));
        assert!(result.accessible);
        assert_eq!(result.model_count, ProbeCount::Exact(7));
        assert_eq!(result.sample_models.len(), 5);
        assert_eq!(result.sample_models[0], "model-0");
        assert!(result.error.is_none());
    }

    #[test]
    fn empty_listing_is_still_reachable() {
        let result = classify("azureml-gretel", Ok(page(0, None)));
        assert!(result.accessible);
        assert_eq!(result.model_count, ProbeCount::Exact(0));
        assert!(result.sample_models.is_empty());
    }

    #[test]
    fn exactly_ten_with_exhausted_listing_is_exact() {
        let result = classify("azureml", Ok(page(10, None)));
        assert_eq!(result.model_count, ProbeCount::Exact(10));
    }

    #[test]
    fn cap_hit_without_exhaustion_reports_lower_bound() {
        let result = classify("azureml", Ok(page(25, None)));
        assert_eq!(result.model_count, ProbeCount::AtLeast(10));
        assert_eq!(result.model_count.to_string(), "10+");
        assert_eq!(result.sample_models.len(), 5);

        let result = classify("azureml", Ok(page(10, Some("https://next"))));
        assert_eq!(result.model_count, ProbeCount::AtLeast(10));
    }

    #[test]
    fn not_found_maps_to_registry_not_found_reason() {
        let listing = Err(CatalogError::NotFound {
            message: "registry 'azureml-ghost' does not exist or is not visible".to_string(),
        });
        let result = classify("azureml-ghost", listing);
        assert!(!result.accessible);
        assert_eq!(result.model_count, ProbeCount::Exact(0));
        let reason = result.error.unwrap();
        assert!(reason.starts_with("registry not found:"), "{}", reason);
    }

    #[test]
    fn api_error_reason_carries_status_and_message() {
        let listing = Err(CatalogError::Api {
            status: 403,
            message: "caller is not authorized".to_string(),
        });
        let result = classify("azureml-xai", listing);
        let reason = result.error.unwrap();
        assert!(reason.contains("403"));
        assert!(reason.contains("caller is not authorized"));
    }

    #[test]
    fn unreachable_registries_stay_out_of_the_recommendation() {
        let results = vec![
            classify("azureml", Ok(page(12, None))),
            classify(
                "azureml-ghost",
                Err(CatalogError::NotFound {
                    message: "registry 'azureml-ghost' does not exist".to_string(),
                }),
            ),
            classify("azureml-meta", Ok(page(3, None))),
        ];
        assert_eq!(recommended_registries(&results), "azureml,azureml-meta");
    }

    #[test]
    fn recommendation_is_empty_when_nothing_is_reachable() {
        let results = vec![classify(
            "azureml-ghost",
            Err(CatalogError::Api {
                status: 500,
                message: "boom".to_string(),
            }),
        )];
        assert_eq!(recommended_registries(&results), "");
    }
}
