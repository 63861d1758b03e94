pub mod config;
pub mod constants;
pub mod error;
pub mod financial;
pub mod geo;
pub mod logging;
pub mod pipeline;
pub mod source;
pub mod types;

// Loader use case and the ports it talks through
pub mod app;
// Adapters for the ports
pub mod infra;
