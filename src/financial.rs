use crate::error::{ImportError, Result};
use crate::types::{CompanyRecord, FinancialMetrics};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// One entry of the financial dataset, keyed on the dataset's own column names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FinancialRecord {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "52 Week High", default, deserialize_with = "null_as_zero")]
    pub year_high: f64,
    #[serde(rename = "52 Week Low", default, deserialize_with = "null_as_zero")]
    pub year_low: f64,
    #[serde(rename = "Dividend Yield", default, deserialize_with = "null_as_zero")]
    pub dividend_yield: f64,
    #[serde(rename = "EBITDA", default, deserialize_with = "null_as_zero")]
    pub ebitda: f64,
    #[serde(rename = "Earnings/Share", default, deserialize_with = "null_as_zero")]
    pub earnings_per_share: f64,
    #[serde(rename = "Market Cap", default, deserialize_with = "null_as_zero")]
    pub market_cap: f64,
    #[serde(rename = "Price", default, deserialize_with = "null_as_zero")]
    pub price: f64,
    #[serde(rename = "Price/Book", default, deserialize_with = "null_as_zero")]
    pub price_per_book: f64,
    #[serde(rename = "Price/Earnings", default, deserialize_with = "null_as_zero")]
    pub price_per_earnings: f64,
    #[serde(rename = "Price/Sales", default, deserialize_with = "null_as_zero")]
    pub price_per_sales: f64,
}

impl FinancialRecord {
    pub fn metrics(&self) -> FinancialMetrics {
        FinancialMetrics {
            year_high: self.year_high,
            year_low: self.year_low,
            dividend_yield: self.dividend_yield,
            ebitda: self.ebitda,
            earnings_per_share: self.earnings_per_share,
            market_cap: self.market_cap,
            price: self.price,
            price_per_book: self.price_per_book,
            price_per_earnings: self.price_per_earnings,
            price_per_sales: self.price_per_sales,
        }
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

pub type FinancialLookup = HashMap<String, FinancialRecord>;

/// Index financial records by symbol. A repeated symbol keeps the last entry.
pub fn build_lookup(records: Vec<FinancialRecord>) -> FinancialLookup {
    records
        .into_iter()
        .map(|record| (record.symbol.clone(), record))
        .collect()
}

#[instrument]
pub fn load_financial_lookup(path: &Path) -> Result<FinancialLookup> {
    let raw = fs::read(path).map_err(|e| ImportError::io(path, e))?;
    let records: Vec<FinancialRecord> =
        serde_json::from_slice(&raw).map_err(|e| ImportError::json(path, e))?;
    info!("Loaded {} financial records from {}", records.len(), path.display());
    Ok(build_lookup(records))
}

/// Overwrite the metrics of every company that has a financial entry.
/// Returns how many companies were matched.
pub fn extend_with_financial_data(companies: &mut [CompanyRecord], lookup: &FinancialLookup) -> usize {
    let mut matched = 0;
    for company in companies.iter_mut() {
        let Some(financial) = lookup.get(&company.symbol) else {
            debug!("No financial data for {}", company.symbol);
            continue;
        };
        company.financials = Some(financial.metrics());
        company.symbol = financial.symbol.clone();
        matched += 1;
    }
    matched
}
