//! Compiled-in defaults. Every one of these can be overridden through the
//! config file, the environment or the command line.

// Input files
pub const DEFAULT_LIST_PATH: &str = "./list.txt";
pub const DEFAULT_FINANCIAL_PATH: &str = "./financial.json";

// Target database
pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "localhost:8080";
pub const DEFAULT_BASE_PATH: &str = "/v1";
/// Base path served by the older Weaviate releases.
pub const LEGACY_BASE_PATH: &str = "/weaviate/v1";

// Environment overrides
pub const HOST_ENV: &str = "COMPANY_IMPORT_HOST";
pub const BASE_PATH_ENV: &str = "COMPANY_IMPORT_BASE_PATH";

/// Schema class every company is uploaded as
pub const COMPANY_CLASS: &str = "Company";

/// Number of progress dots printed before a line break
pub const PROGRESS_LINE_WIDTH: usize = 50;

// Tab-separated field positions in the company list
pub const FIELD_SYMBOL: usize = 0;
pub const FIELD_NAME: usize = 1;
pub const FIELD_SECTOR: usize = 3;
pub const FIELD_SUB_INDUSTRY: usize = 4;
pub const FIELD_LOCATION: usize = 5;
pub const FIELD_FOUNDED: usize = 8;
