//! Worked ranking examples on small and built-in catalogs

use crate::common::{ids_of, scores_of, merger_and_qr};
use toolfinder::core::catalog::Catalog;
use toolfinder::core::search::search;

fn pair() -> Catalog {
    Catalog::new(merger_and_qr()).unwrap()
}

#[test]
fn test_merge_hits_title_and_keyword() {
    // "merge" is inside the title "PDF Merger" and equals a keyword
    let outcome = search(&pair(), "merge");
    assert_eq!(ids_of(&outcome), vec!["pdf-merger"]);
    assert_eq!(scores_of(&outcome), vec![13]);
    assert!(outcome.is_visible("pdf-merger"));
    assert!(!outcome.is_visible("qr-generator"));
}

#[test]
fn test_uppercase_pdf_scores_title_plus_keyword() {
    let outcome = search(&pair(), "PDF");
    assert_eq!(ids_of(&outcome), vec!["pdf-merger"]);
    assert_eq!(scores_of(&outcome), vec![13]);
}

#[test]
fn test_keyword_only_match() {
    let outcome = search(&pair(), "combine");
    assert_eq!(ids_of(&outcome), vec!["pdf-merger"]);
    assert_eq!(scores_of(&outcome), vec![3]);
}

#[test]
fn test_empty_query_shows_both() {
    let outcome = search(&pair(), "");
    assert_eq!(outcome.visible_count(), 2);
    assert!(outcome.suggestions.is_empty());
    assert!(outcome.matches.is_empty());
}

#[test]
fn test_query_containing_keyword_matches() {
    // "barcode scanner" contains the keywords "barcode" and "code"
    let outcome = search(&pair(), "barcode scanner");
    assert_eq!(ids_of(&outcome), vec!["qr-generator"]);
    assert_eq!(scores_of(&outcome), vec![3]);
}

#[test]
fn test_builtin_pdf_ties_keep_catalog_order() {
    let outcome = search(&Catalog::builtin(), "pdf");
    assert_eq!(
        ids_of(&outcome),
        vec!["pdf-merger", "pdf-to-images", "image-to-pdf"]
    );
    assert_eq!(scores_of(&outcome), vec![18, 18, 18]);
}

#[test]
fn test_builtin_image_ranking_and_suggestions() {
    let outcome = search(&Catalog::builtin(), "image");
    assert_eq!(
        ids_of(&outcome),
        vec![
            "pdf-to-images",
            "image-compressor",
            "image-converter",
            "image-to-pdf",
            "color-picker",
            "watermark-adder",
            "remove-background",
        ]
    );
    assert_eq!(scores_of(&outcome), vec![18, 18, 18, 18, 8, 8, 5]);

    let suggested: Vec<&str> = outcome
        .suggestions
        .iter()
        .map(|s| s.item.id.as_str())
        .collect();
    assert_eq!(
        suggested,
        vec![
            "pdf-to-images",
            "image-compressor",
            "image-converter",
            "image-to-pdf",
            "color-picker",
        ]
    );
}

#[test]
fn test_builtin_qr() {
    let outcome = search(&Catalog::builtin(), "qr");
    assert_eq!(ids_of(&outcome), vec!["qr-generator", "whatsapp-generator"]);
    assert_eq!(scores_of(&outcome), vec![18, 8]);
}
