use serde::{Deserialize, Serialize};

/// Placeholder written for any field a source did not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column labels of the unified model table, in output order.
pub const COLUMNS: [&str; 13] = [
    "Source",
    "Name",
    "Version",
    "Description",
    "Format",
    "Kind",
    "SKU",
    "Lifecycle Status",
    "Max Capacity",
    "Created Date",
    "Created By",
    "Last Modified Date",
    "Last Modified By",
];

/// One row of the unified model table. Every column is always populated;
/// fields a source does not carry hold [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRow {
    pub source: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub format: String,
    pub kind: String,
    pub sku: String,
    pub lifecycle_status: String,
    pub max_capacity: String,
    pub created_date: String,
    pub created_by: String,
    pub last_modified_date: String,
    pub last_modified_by: String,
}

impl ModelRow {
    /// Field values in [`COLUMNS`] order.
    pub fn values(&self) -> [&str; 13] {
        [
            &self.source,
            &self.name,
            &self.version,
            &self.description,
            &self.format,
            &self.kind,
            &self.sku,
            &self.lifecycle_status,
            &self.max_capacity,
            &self.created_date,
            &self.created_by,
            &self.last_modified_date,
            &self.last_modified_by,
        ]
    }
}

impl Default for ModelRow {
    fn default() -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            source: na(),
            name: na(),
            version: na(),
            description: na(),
            format: na(),
            kind: na(),
            sku: na(),
            lifecycle_status: na(),
            max_capacity: na(),
            created_date: na(),
            created_by: na(),
            last_modified_date: na(),
            last_modified_by: na(),
        }
    }
}

/// Number of models seen while probing a registry. Listing stops at a cap,
/// so the count is either exact or a lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeCount {
    Exact(usize),
    AtLeast(usize),
}

impl std::fmt::Display for ProbeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeCount::Exact(n) => write!(f, "{}", n),
            ProbeCount::AtLeast(n) => write!(f, "{}+", n),
        }
    }
}

/// Outcome of one connectivity/listing attempt against a registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryProbeResult {
    pub name: String,
    pub accessible: bool,
    pub model_count: ProbeCount,
    pub sample_models: Vec<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_row_fills_every_column_with_sentinel() {
        let row = ModelRow::default();
        let values = row.values();
        assert_eq!(values.len(), COLUMNS.len());
        for value in values {
            assert_eq!(value, NOT_AVAILABLE);
        }
    }

    #[test]
    fn probe_count_display() {
        assert_eq!(ProbeCount::Exact(0).to_string(), "0");
        assert_eq!(ProbeCount::Exact(7).to_string(), "7");
        assert_eq!(ProbeCount::AtLeast(10).to_string(), "10+");
    }
}
