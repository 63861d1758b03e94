use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A company as read from the tab-separated list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub sub_industry: String,
    pub location: String,
    /// January 1st of the founding year, when the list carried one
    pub founded: Option<NaiveDate>,
    /// Set only when a financial record with the same symbol was found
    pub financials: Option<FinancialMetrics>,
}

impl CompanyRecord {
    pub fn founded_year(&self) -> Option<i32> {
        self.founded.map(|d| d.year())
    }

    /// Metrics with unmatched records reading as zero.
    pub fn financials_or_zero(&self) -> FinancialMetrics {
        self.financials.clone().unwrap_or_default()
    }
}

/// The ten numeric fields carried by the financial dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub year_high: f64,
    pub year_low: f64,
    pub dividend_yield: f64,
    pub ebitda: f64,
    pub earnings_per_share: f64,
    pub market_cap: f64,
    pub price: f64,
    pub price_per_book: f64,
    pub price_per_earnings: f64,
    pub price_per_sales: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Which generation of the import to run. Each one uploads a superset of
/// the previous one's properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImportProfile {
    /// Symbol, name, sector, sub-industry and location
    Basic,
    /// Basic plus location coordinates
    Geo,
    /// Geo plus the financial metrics
    #[default]
    Financial,
}

impl ImportProfile {
    pub fn includes_coordinates(self) -> bool {
        matches!(self, ImportProfile::Geo | ImportProfile::Financial)
    }

    pub fn includes_financials(self) -> bool {
        matches!(self, ImportProfile::Financial)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImportProfile::Basic => "basic",
            ImportProfile::Geo => "geo",
            ImportProfile::Financial => "financial",
        }
    }
}

impl std::fmt::Display for ImportProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
