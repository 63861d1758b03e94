use crate::app::ports::{ClassDefinition, KnowledgeGraphPort, PropertyDefinition, Thing, ThingProperties};
use crate::constants::{COMPANY_CLASS, PROGRESS_LINE_WIDTH};
use crate::error::{ImportError, Result};
use crate::geo::lookup_coordinates;
use crate::types::{CompanyRecord, ImportProfile};
use metrics::counter;
use std::io::Write;
use tracing::{debug, info, instrument};

const STRING_PROPERTIES: [&str; 5] = ["symbol", "name", "sector", "subIndustry", "location"];
const NUMBER_PROPERTIES: [&str; 10] = [
    "yearHigh",
    "yearLow",
    "dividendYield",
    "ebitda",
    "earningsPerShare",
    "marketCap",
    "price",
    "pricePerBook",
    "pricePerEarnings",
    "pricePerSales",
];

/// The `Company` class as declared for the given profile.
pub fn class_definition(profile: ImportProfile) -> ClassDefinition {
    let mut properties: Vec<PropertyDefinition> = STRING_PROPERTIES
        .iter()
        .map(|name| PropertyDefinition::new(name, "string"))
        .collect();

    if profile.includes_coordinates() {
        properties.push(PropertyDefinition::new("locationCoordinates", "geoCoordinates"));
    }
    if profile.includes_financials() {
        properties.extend(
            NUMBER_PROPERTIES
                .iter()
                .map(|name| PropertyDefinition::new(name, "number")),
        );
    }

    ClassDefinition {
        class: COMPANY_CLASS.to_string(),
        properties,
    }
}

/// Build the upload payload for one company.
pub fn thing_for(company: &CompanyRecord, profile: ImportProfile) -> Thing {
    let location_coordinates = if profile.includes_coordinates() {
        lookup_coordinates(&company.location)
    } else {
        None
    };
    let financials = if profile.includes_financials() {
        company.financials.clone()
    } else {
        None
    };

    Thing {
        class: COMPANY_CLASS.to_string(),
        schema: ThingProperties {
            symbol: company.symbol.clone(),
            name: company.name.clone(),
            sector: company.sector.clone(),
            sub_industry: company.sub_industry.clone(),
            location: company.location.clone(),
            location_coordinates,
            financials,
        },
    }
}

/// Creates the schema, then uploads companies one at a time. Any failure
/// stops the run; entities already created stay in place.
pub struct Loader<P> {
    port: P,
    profile: ImportProfile,
}

impl<P: KnowledgeGraphPort> Loader<P> {
    pub fn new(port: P, profile: ImportProfile) -> Self {
        Self { port, profile }
    }

    pub fn profile(&self) -> ImportProfile {
        self.profile
    }

    #[instrument(skip(self), fields(profile = %self.profile))]
    pub fn create_schema(&self) -> Result<()> {
        let class = class_definition(self.profile);
        info!(
            "Creating schema class {} with {} properties",
            class.class,
            class.properties.len()
        );
        self.port.create_schema_class(&class)
    }

    /// Upload every company, writing one progress dot per success.
    /// Returns the number of entities created.
    #[instrument(skip(self, companies, progress), fields(profile = %self.profile, total = companies.len()))]
    pub fn import_companies<W: Write>(&self, companies: &[CompanyRecord], mut progress: W) -> Result<usize> {
        for (i, company) in companies.iter().enumerate() {
            let thing = thing_for(company, self.profile);
            self.port.create_thing(&thing).map_err(|e| ImportError::Upload {
                index: i,
                symbol: company.symbol.clone(),
                source: Box::new(e),
            })?;
            counter!("company_import_entities_created_total").increment(1);
            debug!("Created entity for {}", company.symbol);

            progress.write_all(b".").map_err(ImportError::Progress)?;
            if i != 0 && i % PROGRESS_LINE_WIDTH == 0 {
                progress.write_all(b"\n").map_err(ImportError::Progress)?;
            }
            progress.flush().map_err(ImportError::Progress)?;
        }
        info!("Uploaded {} companies", companies.len());
        Ok(companies.len())
    }
}
