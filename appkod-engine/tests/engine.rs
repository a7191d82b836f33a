use std::fs;

use appkod_blueprint::Blueprint;
use appkod_codegen::{
    ArtifactGenerator, GenerateContext,
    generation::{Artifact, OutputLayout},
};
use appkod_engine::{Engine, EngineConfig, EngineError};
use tempfile::TempDir;

const CRM: &str = r#"
version: "2.0"
name: CRM
description: Customer management
author: Acme
database:
  tables:
    - name: customers
      fields:
        - { name: id, type: uuid, primary: true }
        - { name: name, type: string, required: true }
        - { name: email, type: email, unique: true }
api:
  endpoints:
    - { path: /customers, method: GET, table: customers }
    - { path: '/customers/{id}', method: GET, table: customers }
    - { path: /customers, method: POST, table: customers }
ui:
  pages:
    - path: /customers
      title: Customers
      components:
        - { type: table, source: customers }
    - path: /
      title: Dashboard
"#;

fn crm() -> Blueprint {
    Blueprint::from_yaml(CRM).expect("Failed to parse blueprint")
}

#[test]
fn test_generate_all_paths_in_order() {
    let artifacts = Engine::new(crm()).generate_all().unwrap();
    let paths: Vec<_> = artifacts.paths().collect();
    assert_eq!(
        paths,
        [
            "prisma/schema.prisma",
            "api/models.py",
            "api/routes.py",
            "web/app/customers/page.tsx",
            "web/app/page.tsx",
        ]
    );
}

#[test]
fn test_generation_is_idempotent() {
    let first = appkod_engine::generate_all(&crm()).unwrap();
    let second = appkod_engine::generate_all(&crm()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_artifacts_agree_on_names() {
    let artifacts = Engine::new(crm()).generate_all().unwrap();
    let schema = artifacts.get("prisma/schema.prisma").unwrap();
    let models = artifacts.get("api/models.py").unwrap();
    let routes = artifacts.get("api/routes.py").unwrap();

    assert!(schema.contains("model Customers {"));
    assert!(models.contains("class Customers(SQLModel, table=True):"));
    assert!(routes.contains("response_model=List[Customers]"));
    assert!(routes.contains("async def get_customers_by_id(id: UUID,"));
}

#[test]
fn test_invalid_blueprint_is_rejected() {
    let blueprint = Blueprint::from_yaml("name: Broken\ndatabase: { tables: [] }").unwrap();
    let err = appkod_engine::generate_all(&blueprint).unwrap_err();

    let EngineError::InvalidBlueprint { errors } = err else {
        panic!("expected InvalidBlueprint, got {err:?}");
    };
    assert_eq!(
        errors,
        [
            "Missing required field: version",
            "Missing required field: api",
            "Missing required field: ui",
            "database.tables is required and must not be empty",
        ]
    );
}

#[test]
fn test_warnings_do_not_block_generation() {
    let yaml = CRM.replace("type: email", "type: geography");
    let blueprint = Blueprint::from_yaml(&yaml).unwrap();

    let validation = appkod_engine::validate(&blueprint);
    assert!(validation.is_ok());
    assert_eq!(validation.warning_count(), 1);

    let artifacts = appkod_engine::generate_all(&blueprint).unwrap();
    assert!(artifacts.get("api/models.py").unwrap().contains("email: Optional[str]"));
}

#[test]
fn test_custom_layout() {
    let config = EngineConfig {
        output: OutputLayout {
            routes: "backend/routes.py".to_string(),
            pages_dir: "frontend/app".to_string(),
            ..OutputLayout::default()
        },
    };
    let artifacts = Engine::with_config(crm(), config).generate_all().unwrap();
    assert!(artifacts.contains("backend/routes.py"));
    assert!(artifacts.contains("frontend/app/page.tsx"));
    assert!(!artifacts.contains("api/routes.py"));
}

#[test]
fn test_overlapping_layout_is_a_duplicate() {
    let config = EngineConfig {
        output: OutputLayout {
            routes: "api/models.py".to_string(),
            ..OutputLayout::default()
        },
    };
    let err = Engine::with_config(crm(), config).generate_all().unwrap_err();
    assert!(matches!(
        err,
        EngineError::DuplicateArtifact { ref path, first: "database", second: "api" } if path == "api/models.py"
    ));
}

struct Readme;

impl ArtifactGenerator for Readme {
    fn name(&self) -> &'static str {
        "readme"
    }

    fn generate(&self, ctx: &GenerateContext<'_>) -> Vec<Artifact> {
        vec![Artifact::new("README.md", format!("# {}\n", ctx.blueprint.metadata().name))]
    }
}

#[test]
fn test_extra_generator() {
    let artifacts = Engine::new(crm())
        .without_generators()
        .generator(Readme)
        .generate_all()
        .unwrap();
    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts.get("README.md"), Some("# CRM\n"));
}

#[test]
fn test_write_all_then_rewrite() {
    let dir = TempDir::new().unwrap();
    let engine = Engine::new(crm());

    let stats = engine.write_all(dir.path()).unwrap();
    assert_eq!(stats.written.len(), 5);
    assert!(stats.unchanged.is_empty());
    let routes = fs::read_to_string(dir.path().join("api/routes.py")).unwrap();
    assert!(routes.starts_with("\"\"\"Auto-generated API routes from Blueprint\"\"\""));

    let stats = engine.write_all(dir.path()).unwrap();
    assert!(stats.written.is_empty());
    assert_eq!(stats.unchanged.len(), 5);
}

#[test]
fn test_write_all_refuses_invalid_blueprint() {
    let dir = TempDir::new().unwrap();
    let blueprint = Blueprint::from_yaml("name: Broken").unwrap();

    assert!(appkod_engine::write_all(&blueprint, dir.path()).is_err());
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_page_path_cannot_escape_output_dir() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out");
    let yaml = CRM.replace("path: /customers\n", "path: /../../../../escaped\n");
    let blueprint = Blueprint::from_yaml(&yaml).unwrap();

    let err = appkod_engine::generate_all(&blueprint).unwrap_err();
    let EngineError::InvalidBlueprint { errors } = err else {
        panic!("expected InvalidBlueprint, got {err:?}");
    };
    assert_eq!(
        errors,
        ["Invalid page path: /../../../../escaped ('.' and '..' are not allowed)"]
    );

    assert!(appkod_engine::write_all(&blueprint, &output).is_err());
    assert!(!output.exists());
    assert!(!dir.path().join("escaped").exists());
}

#[test]
fn test_from_file_and_metadata() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blueprint.yaml");
    fs::write(&path, CRM).unwrap();

    let engine = Engine::from_file(&path).unwrap();
    let metadata = engine.metadata();
    assert_eq!(metadata.version, "2.0");
    assert_eq!(metadata.name, "CRM");
    assert_eq!(metadata.author, "Acme");
    assert_eq!(metadata, appkod_engine::get_metadata(engine.blueprint()));

    let missing = Engine::from_file(dir.path().join("missing.yaml"));
    assert!(missing.is_err());
}
