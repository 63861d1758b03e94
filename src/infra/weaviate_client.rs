use crate::app::ports::{ClassDefinition, KnowledgeGraphPort, Thing};
use crate::error::{ImportError, Result};
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Blocking client for the Weaviate `things` REST API.
pub struct WeaviateClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Vec<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

impl WeaviateClient {
    /// `scheme://host` joined with `base_path`, e.g. `http://localhost:8080/v1`.
    pub fn new(scheme: &str, host: &str, base_path: &str) -> Result<Self> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self::with_client(client, scheme, host, base_path))
    }

    pub fn with_client(client: Client, scheme: &str, host: &str, base_path: &str) -> Self {
        let base_path = base_path.trim_end_matches('/');
        let base_path = if base_path.is_empty() || base_path.starts_with('/') {
            base_path.to_string()
        } else {
            format!("/{base_path}")
        };
        Self {
            client,
            base_url: format!("{}://{}{}", scheme, host.trim_end_matches('/'), base_path),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post<T: Serialize + ?Sized>(&self, operation: &'static str, path: &str, body: &T) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let resp = self.client.post(&url).json(body).send()?;
        Self::check(operation, resp)
    }

    fn check(operation: &'static str, resp: Response) -> Result<()> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.error.into_iter().next())
            .map(|e| e.message)
            .unwrap_or(body);
        warn!("{} rejected with status {}: {}", operation, status.as_u16(), message);
        Err(ImportError::Rejected {
            operation,
            status: status.as_u16(),
            message,
        })
    }
}

impl KnowledgeGraphPort for WeaviateClient {
    fn create_schema_class(&self, class: &ClassDefinition) -> Result<()> {
        self.post("schema creation", "/schema/things", class)
    }

    fn create_thing(&self, thing: &Thing) -> Result<()> {
        self.post("entity creation", "/things", thing)
    }
}
