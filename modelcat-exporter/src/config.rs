use modelcat_core::common::error::{CatalogError, Result};

/// Registries the exporter walks when `AZURE_ML_REGISTRY_NAMES` is unset.
pub const DEFAULT_REGISTRY_NAMES: &str =
    "azureml,azureml-meta,azureml-cohere,azureml-mistral,azureml-xai,HuggingFace,azureml-nvidia";

/// Candidate registries the discovery tool probes when
/// `AZURE_ML_REGISTRY_CANDIDATES` is unset. Known public/system registry
/// names plus a few speculative ones worth testing.
pub const DEFAULT_REGISTRY_CANDIDATES: [&str; 16] = [
    "azureml",             // Main Azure ML registry (Microsoft/Phi models, OpenAI, etc.)
    "azureml-meta",        // Meta/Llama models
    "azureml-cohere",      // Cohere models
    "azureml-mistral",     // Mistral models
    "azureml-xai",         // xAI models (Grok)
    "azureml-deepseek",    // DeepSeek models
    "azureml-core42",      // Core42 models (Jais)
    "azureml-stabilityai", // Stability AI models
    "azureml-nvidia",      // NVIDIA models
    "HuggingFace",         // Hugging Face models
    "azureml-gretel",      // Gretel models
    "azureml-anthropic",   // Anthropic models - if exists
    "azureml-google",      // Google models - if exists
    "azureml-ai21",        // AI21 models - if exists
    "azureml-databricks",  // Databricks models - if exists
    "azureml-openai",      // OpenAI models (separate registry) - if exists
];

/// Data-plane host serving registry model listings.
pub const DEFAULT_REGISTRY_HOST: &str = "eastus.api.azureml.ms";

/// Optional workspace scope; recorded when both variables are present.
#[derive(Debug, Clone)]
pub struct WorkspaceScope {
    pub resource_group: String,
    pub workspace_name: String,
}

/// Everything the exporter reads from the environment, validated up front so
/// missing configuration fails before any network call.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub subscription_id: String,
    pub location: String,
    pub registry_names: Vec<String>,
    pub registry_host: String,
    pub project_endpoint: Option<String>,
    pub workspace: Option<WorkspaceScope>,
}

impl ExporterConfig {
    pub fn from_env() -> Result<Self> {
        let subscription_id = optional_var("AZURE_SUBSCRIPTION_ID");
        let location = optional_var("AZURE_LOCATION");

        let missing: Vec<&str> = [
            ("AZURE_SUBSCRIPTION_ID", &subscription_id),
            ("AZURE_LOCATION", &location),
        ]
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(CatalogError::MissingConfig(missing.join(", ")));
        }

        let workspace = match (
            optional_var("AZURE_RESOURCE_GROUP"),
            optional_var("AZURE_ML_WORKSPACE"),
        ) {
            (Some(resource_group), Some(workspace_name)) => Some(WorkspaceScope {
                resource_group,
                workspace_name,
            }),
            _ => None,
        };

        Ok(Self {
            subscription_id: subscription_id.unwrap_or_default(),
            location: location.unwrap_or_default(),
            registry_names: split_names(
                &optional_var("AZURE_ML_REGISTRY_NAMES")
                    .unwrap_or_else(|| DEFAULT_REGISTRY_NAMES.to_string()),
            ),
            registry_host: registry_host(),
            project_endpoint: optional_var("AZURE_AI_PROJECT_ENDPOINT"),
            workspace,
        })
    }
}

/// Candidate list for the registry discovery tool.
pub fn registry_candidates() -> Vec<String> {
    match optional_var("AZURE_ML_REGISTRY_CANDIDATES") {
        Some(raw) => split_names(&raw),
        None => DEFAULT_REGISTRY_CANDIDATES
            .iter()
            .map(|name| name.to_string())
            .collect(),
    }
}

pub fn registry_host() -> String {
    optional_var("AZURE_ML_REGISTRY_HOST").unwrap_or_else(|| DEFAULT_REGISTRY_HOST.to_string())
}

/// Split a comma-separated name list, dropping empty entries.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_names_trims_and_drops_empties() {
        assert_eq!(
            split_names("azureml, azureml-meta ,,HuggingFace,"),
            vec!["azureml", "azureml-meta", "HuggingFace"]
        );
        assert!(split_names("").is_empty());
        assert!(split_names(" , ").is_empty());
    }

    #[test]
    fn default_registry_names_parse() {
        let names = split_names(DEFAULT_REGISTRY_NAMES);
        assert_eq!(names.len(), 7);
        assert_eq!(names[0], "azureml");
        assert_eq!(names[1], "azureml-meta");
    }

    #[test]
    fn default_candidates_cover_the_export_defaults() {
        let candidates = DEFAULT_REGISTRY_CANDIDATES.to_vec();
        for name in split_names(DEFAULT_REGISTRY_NAMES) {
            assert!(candidates.contains(&name.as_str()), "missing {}", name);
        }
    }
}
