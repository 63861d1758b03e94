use crate::error::Result;
use crate::types::{FinancialMetrics, GeoCoordinates};
use serde::{Deserialize, Serialize};

/// Outbound side of the loader: the two calls the knowledge graph has to accept.
pub trait KnowledgeGraphPort {
    fn create_schema_class(&self, class: &ClassDefinition) -> Result<()>;
    fn create_thing(&self, thing: &Thing) -> Result<()>;
}

impl<P: KnowledgeGraphPort + ?Sized> KnowledgeGraphPort for &P {
    fn create_schema_class(&self, class: &ClassDefinition) -> Result<()> {
        (**self).create_schema_class(class)
    }

    fn create_thing(&self, thing: &Thing) -> Result<()> {
        (**self).create_thing(thing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub class: String,
    pub properties: Vec<PropertyDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(rename = "dataType")]
    pub data_type: Vec<String>,
}

impl PropertyDefinition {
    pub fn new(name: &str, data_type: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type: vec![data_type.to_string()],
        }
    }
}

/// A single entity upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thing {
    pub class: String,
    pub schema: ThingProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingProperties {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub sub_industry: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location_coordinates: Option<GeoCoordinates>,
    #[serde(flatten)]
    pub financials: Option<FinancialMetrics>,
}
