//! Tests for the list, show and select CLI commands

use crate::common::create_test_services;
use toolfinder::cli::commands::{list, select, show};
use toolfinder::cli::OutputFormat;

#[tokio::test]
async fn test_list_both_formats() {
    let services = create_test_services(None);
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = list::ListArgs { keywords: true };
        assert!(list::execute(args, &services, format).await.is_ok());
    }
}

#[tokio::test]
async fn test_show_existing_item() {
    let services = create_test_services(None);
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = show::ShowArgs {
            id: "remove-background".to_string(),
        };
        assert!(show::execute(args, &services, format).await.is_ok());
    }
}

#[tokio::test]
async fn test_show_missing_item() {
    let services = create_test_services(None);
    let args = show::ShowArgs {
        id: "pdf-splitter".to_string(),
    };
    let err = show::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("pdf-splitter"));
    assert!(err.to_string().contains("toolfinder list"));
}

#[tokio::test]
async fn test_select_existing_item() {
    let services = create_test_services(None);
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = select::SelectArgs {
            id: "qr-generator".to_string(),
        };
        assert!(select::execute(args, &services, format).await.is_ok());
    }
}

#[tokio::test]
async fn test_select_missing_item() {
    let services = create_test_services(None);
    let args = select::SelectArgs {
        id: "missing".to_string(),
    };
    let result = select::execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_err());
}
