use std::path::Path;
use std::process;
use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use tracing::error;

use modelcat_exporter::config::ExporterConfig;
use modelcat_exporter::credential::{Credential, MANAGEMENT_RESOURCE};
use modelcat_exporter::export::xlsx::write_models;
use modelcat_exporter::observability::logging::init_logging;
use modelcat_exporter::sources::foundry::FoundryCatalogSource;
use modelcat_exporter::sources::project::ProjectDeploymentSource;
use modelcat_exporter::sources::registry::{RegistryModelSource, RegistryModelsClient};
use modelcat_exporter::sources::{collect_all, ModelSource};

/// Export the AI Foundry model catalog and Azure ML registry models to Excel.
#[derive(Parser)]
#[command(name = "export-models", version)]
#[command(about = "Exports AI Foundry catalog and Azure ML registry models to an Excel file")]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();
    init_logging();

    println!("{}", "=".repeat(60));
    println!("AI Foundry Models to Excel Exporter");
    println!("{}", "=".repeat(60));
    println!();

    let config = match ExporterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            println!("Error: {}", e);
            println!("Please set AZURE_SUBSCRIPTION_ID and AZURE_LOCATION.");
            println!("You can copy .env.example to .env and fill in your values.");
            process::exit(1);
        }
    };

    let credential = Arc::new(Credential::new());
    if let Err(e) = credential.token(MANAGEMENT_RESOURCE) {
        error!("Authentication failed: {}", e);
        println!("Error authenticating with Azure: {}", e);
        process::exit(1);
    }

    let mut sources: Vec<Box<dyn ModelSource>> = vec![Box::new(FoundryCatalogSource::new(
        credential.clone(),
        config.subscription_id.clone(),
        config.location.clone(),
    ))];

    if !config.registry_names.is_empty() {
        println!(
            "Configured Azure ML Registries: {}",
            config.registry_names.join(", ")
        );
        println!();
        for name in &config.registry_names {
            sources.push(Box::new(RegistryModelSource::new(RegistryModelsClient::new(
                credential.clone(),
                name.clone(),
                config.registry_host.clone(),
            ))));
        }
    }

    if let Some(endpoint) = &config.project_endpoint {
        sources.push(Box::new(ProjectDeploymentSource::new(
            credential.clone(),
            endpoint.clone(),
        )));
    }

    let rows = collect_all(&sources).await;

    if rows.is_empty() {
        println!("No models found or error occurred.");
        process::exit(1);
    }

    // Generate output filename with timestamp
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let output_file = format!("ai_foundry_models_{}.xlsx", timestamp);

    println!("Exporting {} models to Excel...", rows.len());
    write_models(&rows, Path::new(&output_file))?;
    println!("Excel file saved to: {}", output_file);

    println!();
    println!("{}", "=".repeat(60));
    println!("Total models exported: {}", rows.len());
    println!("Export completed successfully!");
    println!("{}", "=".repeat(60));

    Ok(())
}
