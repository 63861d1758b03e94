use crate::constants::{
    FIELD_FOUNDED, FIELD_LOCATION, FIELD_NAME, FIELD_SECTOR, FIELD_SUB_INDUSTRY, FIELD_SYMBOL,
};
use crate::error::{ImportError, Result};
use crate::types::CompanyRecord;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, instrument};

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year regex"));

/// Read the company list at `path`, one company per line.
#[instrument]
pub fn parse_companies(path: &Path) -> Result<Vec<CompanyRecord>> {
    let file = File::open(path).map_err(|e| ImportError::io(path, e))?;
    let companies = read_companies(BufReader::new(file)).map_err(|e| ImportError::io(path, e))?;
    info!("Parsed {} companies from {}", companies.len(), path.display());
    Ok(companies)
}

/// Read companies from any line source. Blank lines are skipped.
pub fn read_companies<R: BufRead>(reader: R) -> std::io::Result<Vec<CompanyRecord>> {
    let mut companies = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            debug!("Skipping blank line {}", line_no + 1);
            continue;
        }
        companies.push(parse_company_line(line));
    }
    Ok(companies)
}

/// Split one tab-separated line into a company. Missing positions become
/// empty strings; an unparseable founding year is dropped silently.
pub fn parse_company_line(line: &str) -> CompanyRecord {
    let parts: Vec<&str> = line.split('\t').collect();
    let field = |idx: usize| parts.get(idx).copied().unwrap_or_default().to_string();

    if parts.len() <= FIELD_LOCATION {
        debug!("Short line with {} fields: {:?}", parts.len(), line);
    }

    CompanyRecord {
        symbol: field(FIELD_SYMBOL),
        name: field(FIELD_NAME),
        sector: field(FIELD_SECTOR),
        sub_industry: field(FIELD_SUB_INDUSTRY),
        location: field(FIELD_LOCATION),
        founded: parts.get(FIELD_FOUNDED).and_then(|s| parse_founding_year(s)),
        financials: None,
    }
}

/// Parse a bare four digit year into January 1st of that year.
pub fn parse_founding_year(raw: &str) -> Option<NaiveDate> {
    if !YEAR_RE.is_match(raw) {
        return None;
    }
    let year: i32 = raw.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}
