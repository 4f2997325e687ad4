use async_trait::async_trait;
use modelcat_core::common::error::{CatalogError, Result as CatalogResult};
use modelcat_core::domain::ModelRow;
use modelcat_exporter::export::xlsx::write_models;
use modelcat_exporter::sources::{collect_all, ModelSource};
use tempfile::tempdir;

struct StaticSource {
    label: &'static str,
    rows: Vec<ModelRow>,
}

impl StaticSource {
    fn new(label: &'static str, count: usize) -> Self {
        let rows = (0..count)
            .map(|i| ModelRow {
                source: label.to_string(),
                name: format!("model-{}", i),
                ..ModelRow::default()
            })
            .collect();
        Self { label, rows }
    }
}

#[async_trait]
impl ModelSource for StaticSource {
    fn name(&self) -> String {
        self.label.to_string()
    }

    async fn collect(&self) -> CatalogResult<Vec<ModelRow>> {
        Ok(self.rows.clone())
    }
}

struct FailingSource;

#[async_trait]
impl ModelSource for FailingSource {
    fn name(&self) -> String {
        "broken source".to_string()
    }

    async fn collect(&self) -> CatalogResult<Vec<ModelRow>> {
        Err(CatalogError::Api {
            status: 500,
            message: "internal server error".to_string(),
        })
    }
}

#[tokio::test]
async fn failing_source_does_not_affect_the_others() {
    let sources: Vec<Box<dyn ModelSource>> = vec![
        Box::new(StaticSource::new("catalog", 2)),
        Box::new(FailingSource),
        Box::new(StaticSource::new("registry", 1)),
    ];

    let rows = collect_all(&sources).await;

    assert_eq!(rows.len(), 3);
    // Source order is preserved and unaffected by the failure in between.
    assert_eq!(rows[0].source, "catalog");
    assert_eq!(rows[1].source, "catalog");
    assert_eq!(rows[2].source, "registry");
}

#[tokio::test]
async fn all_sources_failing_collects_zero_rows() {
    let sources: Vec<Box<dyn ModelSource>> =
        vec![Box::new(FailingSource), Box::new(FailingSource)];
    let rows = collect_all(&sources).await;
    assert!(rows.is_empty());
}

#[tokio::test]
async fn repeated_collection_yields_identical_rows() {
    let sources: Vec<Box<dyn ModelSource>> = vec![
        Box::new(StaticSource::new("catalog", 3)),
        Box::new(StaticSource::new("registry", 2)),
    ];

    let first = collect_all(&sources).await;
    let second = collect_all(&sources).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn collected_rows_export_to_a_workbook() {
    let sources: Vec<Box<dyn ModelSource>> = vec![
        Box::new(StaticSource::new("catalog", 2)),
        Box::new(FailingSource),
    ];
    let rows = collect_all(&sources).await;
    assert_eq!(rows.len(), 2);

    let dir = tempdir().unwrap();
    let path = dir.path().join("ai_foundry_models_test.xlsx");
    write_models(&rows, &path).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
