use std::collections::HashMap;
use std::process::Command;
use std::sync::Mutex;

use modelcat_core::common::error::{CatalogError, Result};
use tracing::debug;

/// Audience for Azure Resource Manager calls (account-model listing).
pub const MANAGEMENT_RESOURCE: &str = "https://management.azure.com";
/// Audience for the Azure ML registry data plane.
pub const ML_RESOURCE: &str = "https://ml.azure.com";
/// Audience for AI Foundry project endpoints.
pub const AI_RESOURCE: &str = "https://ai.azure.com";

/// Bearer-token provider for the catalog clients.
///
/// Token material comes from the environment when present
/// (`AZURE_ACCESS_TOKEN`, or an audience-specific override), otherwise from
/// `az account get-access-token`. One token per audience, held for the run.
/// Authentication protocol details stay entirely outside this crate.
pub struct Credential {
    cache: Mutex<HashMap<String, String>>,
}

impl Credential {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn token(&self, resource: &str) -> Result<String> {
        if let Ok(cache) = self.cache.lock() {
            if let Some(token) = cache.get(resource) {
                return Ok(token.clone());
            }
        }

        let token = match env_token(resource) {
            Some(token) => token,
            None => az_cli_token(resource)?,
        };

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(resource.to_string(), token.clone());
        }
        Ok(token)
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::new()
    }
}

fn env_token(resource: &str) -> Option<String> {
    let scoped = match resource {
        MANAGEMENT_RESOURCE => "AZURE_MANAGEMENT_ACCESS_TOKEN",
        ML_RESOURCE => "AZURE_ML_ACCESS_TOKEN",
        AI_RESOURCE => "AZURE_AI_ACCESS_TOKEN",
        _ => "",
    };

    for name in [scoped, "AZURE_ACCESS_TOKEN"] {
        if name.is_empty() {
            continue;
        }
        if let Ok(value) = std::env::var(name) {
            let value = value.trim().to_string();
            if !value.is_empty() {
                debug!("Using access token from {}", name);
                return Some(value);
            }
        }
    }
    None
}

fn az_cli_token(resource: &str) -> Result<String> {
    debug!("Requesting access token from az CLI for {}", resource);
    let output = Command::new("az")
        .args([
            "account",
            "get-access-token",
            "--resource",
            resource,
            "--query",
            "accessToken",
            "--output",
            "tsv",
        ])
        .output()
        .map_err(|e| CatalogError::Auth(format!("failed to run az CLI: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CatalogError::Auth(format!(
            "az account get-access-token failed: {}",
            stderr.trim()
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(CatalogError::Auth(
            "az CLI returned an empty access token".to_string(),
        ));
    }
    Ok(token)
}
