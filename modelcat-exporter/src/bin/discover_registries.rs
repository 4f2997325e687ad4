use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use modelcat_exporter::config;
use modelcat_exporter::credential::{Credential, ML_RESOURCE};
use modelcat_exporter::observability::logging::init_logging;
use modelcat_exporter::probe::{print_summary, probe_registries};

/// Probe the known Azure ML registry names and report which are reachable.
#[derive(Parser)]
#[command(name = "discover-registries", version)]
#[command(about = "Tests known Azure ML registry names and recommends the reachable ones")]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    dotenv::dotenv().ok();
    init_logging();

    println!("{}", "=".repeat(60));
    println!("Azure ML Registry Discovery Tool");
    println!("{}", "=".repeat(60));
    println!();

    let credential = Arc::new(Credential::new());
    match credential.token(ML_RESOURCE) {
        Ok(_) => {
            println!("Successfully authenticated with Azure");
            println!();
        }
        Err(e) => {
            error!("Authentication failed: {}", e);
            println!("Error authenticating with Azure: {}", e);
            process::exit(1);
        }
    }

    let candidates = config::registry_candidates();
    let host = config::registry_host();

    let results = probe_registries(&credential, &candidates, &host).await;
    print_summary(&results);

    Ok(())
}
