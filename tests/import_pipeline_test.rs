use company_import::app::load_use_case::Loader;
use company_import::app::ports::{ClassDefinition, KnowledgeGraphPort, Thing};
use company_import::config::ImportConfig;
use company_import::error::{ImportError, Result};
use company_import::pipeline::ImportPipeline;
use company_import::types::{CompanyRecord, ImportProfile};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Records every call; can be told to reject the schema or the n-th entity.
#[derive(Default)]
struct RecordingGraph {
    schemas: RefCell<Vec<ClassDefinition>>,
    things: RefCell<Vec<Thing>>,
    reject_schema: bool,
    reject_thing_at: Option<usize>,
}

impl KnowledgeGraphPort for RecordingGraph {
    fn create_schema_class(&self, class: &ClassDefinition) -> Result<()> {
        if self.reject_schema {
            return Err(ImportError::Rejected {
                operation: "schema creation",
                status: 422,
                message: "class name Company already exists".to_string(),
            });
        }
        self.schemas.borrow_mut().push(class.clone());
        Ok(())
    }

    fn create_thing(&self, thing: &Thing) -> Result<()> {
        if self.reject_thing_at == Some(self.things.borrow().len()) {
            return Err(ImportError::Rejected {
                operation: "entity creation",
                status: 500,
                message: "storage unavailable".to_string(),
            });
        }
        self.things.borrow_mut().push(thing.clone());
        Ok(())
    }
}

fn write_inputs(dir: &Path, list: &str, financial: &str) -> ImportConfig {
    let list_path = dir.join("list.txt");
    let financial_path = dir.join("financial.json");
    fs::write(&list_path, list).unwrap();
    fs::write(&financial_path, financial).unwrap();
    ImportConfig {
        list_path,
        financial_path,
        ..Default::default()
    }
}

fn fixture() -> (TempDir, ImportConfig) {
    let dir = tempdir().unwrap();
    let list = "AAPL\tApple Inc.\t\tTechnology\tHardware\tSan Jose, California\n\
                MMM\t3M Company\t\tIndustrials\tConglomerates\n\
                KO\tCoca-Cola\treports\tConsumer Staples\tSoft Drinks\tAtlanta, Georgia\t\t\t1886\n";
    let financial = r#"[
        {"Symbol":"AAPL","Price":150.0,"52 Week High":180.0,"52 Week Low":120.0,"Dividend Yield":1.5,
         "EBITDA":79386000000,"Earnings/Share":9.2,"Market Cap":809508034020,
         "Price/Book":5.8,"Price/Earnings":16.9,"Price/Sales":3.5},
        {"Symbol":"ZZZ","Price":1.0}
    ]"#;
    let config = write_inputs(dir.path(), list, financial);
    (dir, config)
}

#[test]
fn test_full_import_uploads_every_company() {
    let (_dir, config) = fixture();
    let graph = RecordingGraph::default();
    let mut progress = Vec::new();

    let summary = ImportPipeline::run(&config, &graph, &mut progress).unwrap();

    assert_eq!(summary.companies_read, 3);
    assert_eq!(summary.financial_matches, 1);
    assert_eq!(summary.coordinates_resolved, 2);
    assert_eq!(summary.entities_created, 3);
    assert_eq!(String::from_utf8(progress).unwrap(), "...");

    let schemas = graph.schemas.borrow();
    assert_eq!(schemas.len(), 1);
    assert_eq!(schemas[0].properties.len(), 16);

    let things = graph.things.borrow();
    let apple = &things[0].schema;
    assert_eq!(apple.symbol, "AAPL");
    assert_eq!(apple.location, "San Jose, California");
    let coords = apple.location_coordinates.unwrap();
    assert_eq!((coords.latitude, coords.longitude), (37.334789, 121.888138));
    assert_eq!(apple.financials.as_ref().unwrap().price, 150.0);

    let mmm = &things[1].schema;
    assert_eq!(mmm.location, "");
    assert!(mmm.location_coordinates.is_none());
    assert!(mmm.financials.is_none());

    assert_eq!(things[2].schema.symbol, "KO");
    assert!(things[2].schema.location_coordinates.is_some());
}

#[test]
fn test_schema_rejection_stops_before_entities() {
    let (_dir, config) = fixture();
    let graph = RecordingGraph {
        reject_schema: true,
        ..Default::default()
    };
    let mut progress = Vec::new();

    let err = ImportPipeline::run(&config, &graph, &mut progress).unwrap_err();

    assert!(matches!(err, ImportError::Rejected { status: 422, .. }));
    assert!(graph.things.borrow().is_empty());
    assert!(progress.is_empty());
}

#[test]
fn test_entity_failure_aborts_remaining_upload() {
    let (_dir, config) = fixture();
    let graph = RecordingGraph {
        reject_thing_at: Some(1),
        ..Default::default()
    };
    let mut progress = Vec::new();

    let err = ImportPipeline::run(&config, &graph, &mut progress).unwrap_err();

    match err {
        ImportError::Upload { index, symbol, .. } => {
            assert_eq!(index, 1);
            assert_eq!(symbol, "MMM");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(graph.things.borrow().len(), 1);
    assert_eq!(String::from_utf8(progress).unwrap(), ".");
}

#[test]
fn test_basic_profile_skips_financial_file() {
    let dir = tempdir().unwrap();
    let mut config = write_inputs(
        dir.path(),
        "AAPL\tApple Inc.\t\tTechnology\tHardware\tSan Jose, California\n",
        "not even json",
    );
    config.profile = ImportProfile::Basic;
    let graph = RecordingGraph::default();

    let summary = ImportPipeline::run(&config, &graph, Vec::new()).unwrap();

    assert_eq!(summary.entities_created, 1);
    assert_eq!(graph.schemas.borrow()[0].properties.len(), 5);
    assert!(graph.things.borrow()[0].schema.location_coordinates.is_none());
}

#[test]
fn test_missing_list_fails_before_any_request() {
    let dir = tempdir().unwrap();
    let config = ImportConfig {
        list_path: dir.path().join("missing.txt"),
        ..Default::default()
    };
    let graph = RecordingGraph::default();

    let err = ImportPipeline::run(&config, &graph, Vec::new()).unwrap_err();

    assert!(matches!(err, ImportError::Io { .. }));
    assert!(graph.schemas.borrow().is_empty());
}

#[test]
fn test_malformed_financial_json_fails_before_any_request() {
    let dir = tempdir().unwrap();
    let config = write_inputs(dir.path(), "AAPL\tApple\t\tTech\tHW\tX\n", "[{\"Symbol\":");
    let graph = RecordingGraph::default();

    let err = ImportPipeline::run(&config, &graph, Vec::new()).unwrap_err();

    assert!(matches!(err, ImportError::Json { .. }));
    assert!(graph.schemas.borrow().is_empty());
}

#[test]
fn test_progress_breaks_line_after_every_fifty() {
    let companies: Vec<CompanyRecord> = (0..102)
        .map(|i| CompanyRecord {
            symbol: format!("S{i}"),
            ..Default::default()
        })
        .collect();
    let graph = RecordingGraph::default();
    let loader = Loader::new(&graph, ImportProfile::Geo);
    let mut progress = Vec::new();

    let created = loader.import_companies(&companies, &mut progress).unwrap();

    assert_eq!(created, 102);
    let out = String::from_utf8(progress).unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].len(), 51);
    assert_eq!(lines[1].len(), 50);
    assert_eq!(lines[2].len(), 1);
}
