//! Argument parsing through the top-level `Cli`

use clap::Parser;
use toolfinder::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_parse_search_with_flags() {
    let cli = Cli::try_parse_from([
        "toolfinder",
        "--format",
        "json",
        "search",
        "pdf merge",
        "-k",
        "3",
        "--suggestions-only",
    ])
    .unwrap();

    assert!(matches!(cli.format, OutputFormat::Json));
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, "pdf merge");
            assert_eq!(args.limit, Some(3));
            assert!(args.suggestions_only);
        }
        _ => panic!("expected search"),
    }
}

#[test]
fn test_parse_select_requires_id() {
    assert!(Cli::try_parse_from(["toolfinder", "select"]).is_err());
}

#[test]
fn test_parse_kebab_case_commands() {
    assert!(Cli::try_parse_from(["toolfinder", "show-config", "-a"]).is_ok());
    assert!(Cli::try_parse_from(["toolfinder", "get-server-info", "-d"]).is_ok());
    assert!(Cli::try_parse_from(["toolfinder", "completions", "bash"]).is_ok());
}
