//! Tests for the search CLI command

use crate::common::{create_test_services, merger_and_qr};
use toolfinder::cli::commands::search::{execute, SearchArgs, SearchResponseOutput};
use toolfinder::cli::OutputFormat;

fn args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        limit: None,
        suggestions_only: false,
    }
}

#[tokio::test]
async fn test_search_human() {
    let services = create_test_services(None);
    let result = execute(args("pdf"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_search_json() {
    let services = create_test_services(None);
    let result = execute(args("image"), &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_search_no_matches() {
    let services = create_test_services(None);
    for format in [OutputFormat::Human, OutputFormat::Json] {
        assert!(execute(args("zzzz"), &services, format).await.is_ok());
    }
}

#[tokio::test]
async fn test_search_empty_query() {
    let services = create_test_services(Some(merger_and_qr()));
    assert!(execute(args(""), &services, OutputFormat::Human).await.is_ok());
}

#[tokio::test]
async fn test_search_suggestions_only_with_limit() {
    let services = create_test_services(None);
    let args = SearchArgs {
        query: "convert".to_string(),
        limit: Some(2),
        suggestions_only: true,
    };
    assert!(execute(args, &services, OutputFormat::Json).await.is_ok());
}

#[test]
fn test_response_respects_limit_but_not_suggestions() {
    let services = create_test_services(None);
    let outcome = services.search.search("image");

    let output = SearchResponseOutput::from_outcome(&outcome, services.catalog.items(), 2, true);
    assert_eq!(output.visible, 7);
    assert_eq!(output.total, 11);
    assert_eq!(output.results.len(), 2);
    assert_eq!(output.results[0].rank, 1);
    assert_eq!(output.results[0].score, Some(18));
    assert_eq!(output.suggestions.len(), 5);
}

#[test]
fn test_response_for_blank_query_lists_catalog_unscored() {
    let services = create_test_services(Some(merger_and_qr()));
    let outcome = services.search.search("   ");

    let output = SearchResponseOutput::from_outcome(&outcome, services.catalog.items(), 20, true);
    assert_eq!(output.visible, 2);
    assert_eq!(output.results.len(), 2);
    assert!(output.results.iter().all(|r| r.score.is_none()));
    assert!(output.suggestions.is_empty());
}

#[test]
fn test_response_json_omits_results_when_suggestions_only() {
    let services = create_test_services(None);
    let outcome = services.search.search("qr");

    let output = SearchResponseOutput::from_outcome(&outcome, services.catalog.items(), 20, false);
    let json = serde_json::to_value(&output).unwrap();
    assert!(json.get("results").is_none());
    assert_eq!(json["suggestions"][0]["id"], "qr-generator");
    assert_eq!(json["visible"], 2);
}
