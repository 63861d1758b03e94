use crate::app::load_use_case::Loader;
use crate::app::ports::KnowledgeGraphPort;
use crate::config::ImportConfig;
use crate::error::Result;
use crate::financial::{extend_with_financial_data, load_financial_lookup};
use crate::geo::lookup_coordinates;
use crate::source::parse_companies;
use metrics::{counter, histogram};
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::{info, instrument};

/// Totals for a completed run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportSummary {
    pub companies_read: usize,
    pub financial_matches: usize,
    pub coordinates_resolved: usize,
    pub entities_created: usize,
}

pub struct ImportPipeline;

impl ImportPipeline {
    /// Read, enrich, create the schema, then upload. The first error ends
    /// the run and is returned as is.
    #[instrument(skip(config, port, progress), fields(profile = %config.profile))]
    pub fn run<P, W>(config: &ImportConfig, port: P, progress: W) -> Result<ImportSummary>
    where
        P: KnowledgeGraphPort,
        W: Write,
    {
        let started = Instant::now();
        let mut summary = ImportSummary::default();

        // Step 1: Read the company list
        let mut companies = parse_companies(&config.list_path)?;
        summary.companies_read = companies.len();

        // Step 2: Merge financial data
        if config.profile.includes_financials() {
            let lookup = load_financial_lookup(&config.financial_path)?;
            summary.financial_matches = extend_with_financial_data(&mut companies, &lookup);
            counter!("company_import_financial_matches_total").increment(summary.financial_matches as u64);
            info!(
                "Matched financial data for {}/{} companies",
                summary.financial_matches,
                companies.len()
            );
        }

        if config.profile.includes_coordinates() {
            summary.coordinates_resolved = companies
                .iter()
                .filter(|c| lookup_coordinates(&c.location).is_some())
                .count();
            info!(
                "Resolved coordinates for {}/{} companies",
                summary.coordinates_resolved,
                companies.len()
            );
        }

        // Step 3: Schema, then one entity per company
        let loader = Loader::new(port, config.profile);
        loader.create_schema()?;
        summary.entities_created = loader.import_companies(&companies, progress)?;

        histogram!("company_import_upload_duration_seconds").record(started.elapsed().as_secs_f64());
        info!(
            "Import finished: {} entities created in {:.2}s",
            summary.entities_created,
            started.elapsed().as_secs_f64()
        );
        Ok(summary)
    }
}
