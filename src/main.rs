use anyhow::Context;
use clap::Parser;
use company_import::config::{ConfigOverrides, ImportConfig};
use company_import::constants::LEGACY_BASE_PATH;
use company_import::infra::weaviate_client::WeaviateClient;
use company_import::logging;
use company_import::pipeline::{ImportPipeline, ImportSummary};
use company_import::types::ImportProfile;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "company_import")]
#[command(about = "Import a company list into a Weaviate knowledge graph")]
#[command(version)]
struct Cli {
    /// Optional TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Tab-separated company list
    #[arg(long)]
    list: Option<PathBuf>,
    /// JSON array of financial metrics
    #[arg(long)]
    financial: Option<PathBuf>,
    /// Which property set to import
    #[arg(long, value_enum)]
    profile: Option<ImportProfile>,
    /// Weaviate host and port
    #[arg(long)]
    host: Option<String>,
    /// API base path on the Weaviate host
    #[arg(long, conflicts_with = "legacy_api")]
    base_path: Option<String>,
    /// Use the older /weaviate/v1 base path
    #[arg(long)]
    legacy_api: bool,
    /// Also write JSON logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        let base_path = match (&self.base_path, self.legacy_api) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(LEGACY_BASE_PATH.to_string()),
            (None, false) => None,
        };
        ConfigOverrides {
            list_path: self.list.clone(),
            financial_path: self.financial.clone(),
            profile: self.profile,
            host: self.host.clone(),
            base_path,
            log_dir: self.log_dir.clone(),
        }
    }
}

fn run(config: &ImportConfig) -> anyhow::Result<ImportSummary> {
    let client = WeaviateClient::new(
        &config.weaviate.scheme,
        &config.weaviate.host,
        &config.weaviate.base_path,
    )
    .context("failed to build HTTP client")?;
    info!("Importing into {}", client.base_url());

    let stdout = std::io::stdout();
    let summary = ImportPipeline::run(config, &client, stdout.lock())?;
    let mut out = stdout.lock();
    writeln!(out)?;
    Ok(summary)
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = ImportConfig::load(cli.config.as_deref()).and_then(|mut config| {
        config.apply_overrides(cli.overrides());
        config.validate()?;
        Ok(config)
    });
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", anyhow::Error::from(e));
            return ExitCode::FAILURE;
        }
    };

    let _guard = logging::init_logging(config.log_dir.as_deref());

    match run(&config) {
        Ok(summary) => {
            info!(
                companies = summary.companies_read,
                financial_matches = summary.financial_matches,
                coordinates = summary.coordinates_resolved,
                created = summary.entities_created,
                "Import complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
