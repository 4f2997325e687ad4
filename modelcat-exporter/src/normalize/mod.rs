//! Per-source mapping from native catalog records onto [`ModelRow`].
//!
//! Upstream records are variably populated, so every field access is
//! defensive: a missing field maps to the `N/A` sentinel, never to an error.
//! Each mapper returns a fully populated row; the sentinel policy lives here
//! and nowhere else.

use chrono::DateTime;
use modelcat_core::domain::{ModelRow, NOT_AVAILABLE};
use serde_json::{Map, Value};

/// Source label for account-model records.
pub const FOUNDRY_CATALOG_SOURCE: &str = "AI Foundry Catalog";
/// Source label for project-deployment records.
pub const FOUNDRY_PROJECT_SOURCE: &str = "AI Foundry Project";
/// Prefix of the source label for registry-model records.
pub const REGISTRY_SOURCE_PREFIX: &str = "Azure ML Registry";

/// Map one account-model record (Cognitive Services management API shape).
/// Model details live under a nested `model` object; `kind`, `skuName` and
/// `description` sit on the wrapper.
pub fn account_model_row(item: &Value) -> ModelRow {
    let mut row = ModelRow {
        source: FOUNDRY_CATALOG_SOURCE.to_string(),
        ..ModelRow::default()
    };

    row.description = text_or_na(item, "description");
    row.kind = text_or_na(item, "kind");
    row.sku = text_or_na(item, "skuName");

    if let Some(model) = item.get("model") {
        row.name = text_or_na(model, "name");
        row.version = text_or_na(model, "version");
        row.format = text_or_na(model, "format");
        row.lifecycle_status = text_or_na(model, "lifecycleStatus");
        row.max_capacity = text_or_na(model, "maxCapacity");
        apply_audit(&mut row, model.get("systemData"));
    }

    row
}

/// Map one registry-model record. Tags have no column of their own, so they
/// fold into the Description field.
pub fn registry_model_row(registry_name: &str, item: &Value) -> ModelRow {
    let mut row = ModelRow {
        source: format!("{} ({})", REGISTRY_SOURCE_PREFIX, registry_name),
        ..ModelRow::default()
    };

    row.name = text_or_na(item, "name");
    row.version = text_or_na(item, "version");
    row.description = text_or_na(item, "description");
    row.format = text_or_na(item, "type");
    row.lifecycle_status = text_or_na(item, "stage");

    if let Some(tags) = item.get("tags").and_then(|t| t.as_object()) {
        if !tags.is_empty() {
            row.description = merge_description(row.description, pairs_suffix("Tags", tags));
        }
    }

    apply_audit(&mut row, item.get("creationContext"));
    row
}

/// Map one project-deployment record. The deployed model's name, the
/// capability map and the connection fold into Description; the publisher
/// fills the Format column (account-model `format` carries the same
/// publisher-style values).
pub fn deployment_row(item: &Value) -> ModelRow {
    let mut row = ModelRow {
        source: FOUNDRY_PROJECT_SOURCE.to_string(),
        ..ModelRow::default()
    };

    row.name = text_or_na(item, "name");
    row.version = text_or_na(item, "modelVersion");
    row.format = text_or_na(item, "modelPublisher");
    row.kind = text_or_na(item, "type");
    row.sku = item
        .get("sku")
        .and_then(|sku| sku.get("name"))
        .and_then(scalar_text)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    if let Some(model_name) = field_text(item, "modelName") {
        row.description = format!("Model: {}", model_name);
    }
    if let Some(capabilities) = item.get("capabilities").and_then(|c| c.as_object()) {
        if !capabilities.is_empty() {
            row.description =
                merge_description(row.description, pairs_suffix("Capabilities", capabilities));
        }
    }
    if let Some(connection) = field_text(item, "connectionName") {
        row.description = merge_description(row.description, format!("Connection: {}", connection));
    }

    row
}

/// Read a scalar field as text, `N/A` when absent.
fn text_or_na(value: &Value, key: &str) -> String {
    field_text(value, key).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn field_text(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_text)
}

/// String form of a scalar JSON value. Versions and capacities arrive as
/// strings or numbers depending on the API.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Fill the four audit columns from a `systemData`/`creationContext` object.
fn apply_audit(row: &mut ModelRow, audit: Option<&Value>) {
    if let Some(audit) = audit {
        row.created_date = timestamp_or_na(audit, "createdAt");
        row.created_by = text_or_na(audit, "createdBy");
        row.last_modified_date = timestamp_or_na(audit, "lastModifiedAt");
        row.last_modified_by = text_or_na(audit, "lastModifiedBy");
    }
}

/// RFC 3339 timestamps render as `YYYY-MM-DD HH:MM:SS` in the timestamp's
/// own offset; anything unparseable passes through as-is.
fn timestamp_or_na(value: &Value, key: &str) -> String {
    match value.get(key).and_then(|v| v.as_str()).map(|s| s.trim()) {
        Some(raw) if !raw.is_empty() => match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
            Err(_) => raw.to_string(),
        },
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// `"Label: k=v, k=v"` for a map-typed field.
fn pairs_suffix(label: &str, map: &Map<String, Value>) -> String {
    let pairs: Vec<String> = map
        .iter()
        .map(|(k, v)| {
            let text = scalar_text(v).unwrap_or_else(|| v.to_string());
            format!("{}={}", k, text)
        })
        .collect();
    format!("{}: {}", label, pairs.join(", "))
}

/// Append a suffix to a description, replacing the sentinel outright.
fn merge_description(description: String, suffix: String) -> String {
    if description == NOT_AVAILABLE {
        suffix
    } else {
        format!("{} | {}", description, suffix)
    }
}
