//! Search command - rank catalog items against a query

use crate::cli::output::{
    colors, format_count, print_header, print_json, print_warning, truncate_display,
};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{CatalogItem, SearchOutcome};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query (blank shows every tool)
    #[arg(default_value = "")]
    pub query: String,

    /// Maximum number of matches to print
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only print the suggestion list
    #[arg(long)]
    pub suggestions_only: bool,
}

/// One ranked (or, for a blank query, unranked) row
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub description: String,
    /// Absent when the query was blank and nothing was ranked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    pub route: String,
}

/// Suggestion entry (title + description)
#[derive(Debug, Serialize)]
pub struct SuggestionItem {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub visible: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<SearchResultItem>,
    pub suggestions: Vec<SuggestionItem>,
}

impl SearchResponseOutput {
    /// Build the printable response, keeping at most `limit` results
    pub fn from_outcome(
        outcome: &SearchOutcome,
        catalog_items: &[CatalogItem],
        limit: usize,
        include_results: bool,
    ) -> Self {
        let results = if !include_results {
            Vec::new()
        } else if outcome.is_reset() {
            catalog_items
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, item)| row(i, item, None))
                .collect()
        } else {
            outcome
                .matches
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, m)| row(i, &m.item, Some(m.score)))
                .collect()
        };

        Self {
            query: outcome.query.clone(),
            visible: outcome.visible_count(),
            total: outcome.total,
            results,
            suggestions: outcome
                .suggestions
                .iter()
                .map(|s| SuggestionItem {
                    id: s.item.id.clone(),
                    title: s.item.title.clone(),
                    description: s.item.description.clone(),
                })
                .collect(),
        }
    }
}

fn row(index: usize, item: &CatalogItem, score: Option<u32>) -> SearchResultItem {
    SearchResultItem {
        rank: index + 1,
        id: item.id.clone(),
        title: item.title.clone(),
        description: item.description.clone(),
        score,
        route: item.route(),
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let limit = services.config.clamp_limit(args.limit);

    let outcome = services.search.search(&args.query);
    let output = SearchResponseOutput::from_outcome(
        &outcome,
        services.catalog.items(),
        limit,
        !args.suggestions_only,
    );

    match format {
        OutputFormat::Human => print_human(&output, &args),
        OutputFormat::Json => print_json(&output)?,
    }

    Ok(())
}

fn print_human(output: &SearchResponseOutput, args: &SearchArgs) {
    if output.visible == 0 {
        print_warning(&format!(
            "No tools found matching '{}'. Try a shorter word or a different keyword.",
            output.query.trim()
        ));
        return;
    }

    println!(
        "Available now: {}\n",
        colors::number(&format_count(output.visible, output.total))
    );

    if !args.suggestions_only {
        for result in &output.results {
            let score = match result.score {
                Some(score) => format!(" {}", colors::score(&format!("(score: {score})"))),
                None => String::new(),
            };
            println!(
                "[{}] {} {}{}",
                colors::rank(&result.rank.to_string()),
                result.title,
                colors::item_id(&result.id),
                score
            );
            println!(
                "    {}",
                colors::dim(&truncate_display(&result.description, 100))
            );
        }

        if output.results.len() < output.visible {
            println!(
                "{}",
                colors::dim(&format!(
                    "... {} more (use --limit to show more)",
                    output.visible - output.results.len()
                ))
            );
        }
    }

    if !output.suggestions.is_empty() {
        if !args.suggestions_only {
            println!();
        }
        print_header("Suggestions:");
        for suggestion in &output.suggestions {
            println!(
                "  {} {}",
                suggestion.title,
                colors::dim(&format!("- {}", suggestion.description))
            );
        }
    }
}
