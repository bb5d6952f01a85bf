//! Catalog loading from TOML and JSON files

use crate::common::CatalogFile;
use toolfinder::core::catalog::Catalog;
use toolfinder::core::config::Config;
use toolfinder::core::search::search;
use toolfinder::core::services::Services;
use toolfinder::ToolfinderError;

const TOML_CATALOG: &str = r#"
[[items]]
id = "hash-generator"
title = "Hash Generator"
description = "Compute SHA-256 digests"
keywords = ["hash", "sha", "digest"]

[[items]]
id = "unit-converter"
title = "Unit Converter"
description = "Convert lengths and weights"
"#;

#[test]
fn test_load_toml_file() {
    let file = CatalogFile::write("catalog.toml", TOML_CATALOG);
    let catalog = Catalog::from_file(&file.path).unwrap();

    assert_eq!(catalog.ids(), vec!["hash-generator", "unit-converter"]);
    assert!(catalog.items()[1].keywords.is_empty());
}

#[test]
fn test_item_without_keywords_still_matches_title() {
    let file = CatalogFile::write("catalog.toml", TOML_CATALOG);
    let catalog = Catalog::from_file(&file.path).unwrap();

    let outcome = search(&catalog, "unit");
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].item.id, "unit-converter");
    assert_eq!(outcome.matches[0].score, 10);
}

#[test]
fn test_load_json_bare_array() {
    let json = r#"[
        {"id": "a", "title": "Alpha", "description": "First", "keywords": ["one"]},
        {"id": "b", "title": "Beta", "description": "Second"}
    ]"#;
    let file = CatalogFile::write("catalog.json", json);
    let catalog = Catalog::from_file(&file.path).unwrap();
    assert_eq!(catalog.ids(), vec!["a", "b"]);
}

#[test]
fn test_load_json_wrapped_items() {
    let json = r#"{"items": [{"id": "a", "title": "Alpha", "description": "First"}]}"#;
    let file = CatalogFile::write("catalog.JSON", json);
    let catalog = Catalog::from_file(&file.path).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_duplicate_ids_in_file_rejected() {
    let toml = r#"
[[items]]
id = "dup"
title = "One"
description = "First"

[[items]]
id = "dup"
title = "Two"
description = "Second"
"#;
    let file = CatalogFile::write("catalog.toml", toml);
    let err = Catalog::from_file(&file.path).unwrap_err();
    assert!(matches!(err, ToolfinderError::DuplicateId(_)));
}

#[test]
fn test_missing_file_is_catalog_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ToolfinderError::CatalogError(_)));
}

#[test]
fn test_malformed_toml_is_error() {
    let file = CatalogFile::write("catalog.toml", "[[items]\nid = ");
    assert!(Catalog::from_file(&file.path).is_err());
}

#[test]
fn test_services_use_configured_catalog() {
    let file = CatalogFile::write("catalog.toml", TOML_CATALOG);
    let mut config = Config::default();
    config.catalog.path = Some(file.path.clone());

    let services = Services::new(config).unwrap();
    assert_eq!(services.catalog.len(), 2);
    assert!(services.catalog.get("hash-generator").is_some());
}
