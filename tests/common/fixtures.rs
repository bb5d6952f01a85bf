// Catalog fixtures

use tempfile::TempDir;
use toolfinder::CatalogItem;

/// Two-item catalog: a PDF merger and a QR generator
#[allow(dead_code)]
pub fn merger_and_qr() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            "pdf-merger",
            "PDF Merger",
            "Join several documents into one",
            &["pdf", "merge", "combine"],
        ),
        CatalogItem::new(
            "qr-generator",
            "QR Code Generator",
            "Make scannable squares for links",
            &["qr", "code", "barcode"],
        ),
    ]
}

/// Eight items that all mention "tool" in their description
#[allow(dead_code)]
pub fn sample_items() -> Vec<CatalogItem> {
    (1..=8)
        .map(|n| {
            let id = format!("item-{n}");
            let title = format!("Widget {n}");
            CatalogItem::new(&id, &title, "A handy tool", &["widget", "handy"])
        })
        .collect()
}

/// Catalog file written into a temporary directory
#[allow(dead_code)]
pub struct CatalogFile {
    pub dir: TempDir,
    pub path: std::path::PathBuf,
}

impl CatalogFile {
    #[allow(dead_code)]
    pub fn write(name: &str, contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write catalog file");
        Self { dir, path }
    }
}
