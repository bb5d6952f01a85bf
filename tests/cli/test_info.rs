//! Tests for the show-config and get-server-info CLI commands

use crate::common::create_test_services;
use toolfinder::cli::commands::{config, info};
use toolfinder::cli::OutputFormat;

#[tokio::test]
async fn test_show_config_both_formats() {
    let services = create_test_services(None);
    for all in [false, true] {
        for format in [OutputFormat::Human, OutputFormat::Json] {
            let args = config::ConfigArgs { all };
            assert!(config::execute(args, &services, format).await.is_ok());
        }
    }
}

#[tokio::test]
async fn test_server_info_both_formats() {
    let services = create_test_services(None);
    for detailed in [false, true] {
        for format in [OutputFormat::Human, OutputFormat::Json] {
            let args = info::InfoArgs { detailed };
            assert!(info::execute(args, &services, format).await.is_ok());
        }
    }
}
