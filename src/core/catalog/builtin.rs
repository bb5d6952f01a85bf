//! Built-in tool catalog.
//!
//! The tools offered on the home page, in display order.

use crate::core::types::CatalogItem;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<Vec<CatalogItem>> = Lazy::new(|| {
    vec![
        CatalogItem::new(
            "pdf-merger",
            "PDF Merger",
            "Combine multiple PDF files into one",
            &["pdf", "merge", "combine", "join", "unite", "document", "file"],
        ),
        CatalogItem::new(
            "pdf-to-images",
            "PDF to Images",
            "Convert PDF pages to ZIP file of images",
            &["pdf", "convert", "image", "jpg", "png", "extract", "pages", "zip"],
        ),
        CatalogItem::new(
            "qr-generator",
            "QR Code Generator",
            "Generate QR codes for text, URLs, and more",
            &["qr", "code", "generate", "barcode", "url", "text", "scan"],
        ),
        CatalogItem::new(
            "image-compressor",
            "Image Compressor",
            "Reduce image file sizes without quality loss",
            &[
                "image", "compress", "reduce", "size", "optimize", "jpg", "png", "quality",
            ],
        ),
        CatalogItem::new(
            "text-to-speech",
            "Text to Speech",
            "Convert text into audio files",
            &[
                "text", "speech", "audio", "voice", "sound", "read", "tts", "convert",
            ],
        ),
        CatalogItem::new(
            "color-picker",
            "Color Picker",
            "Pick colors from images and get hex codes",
            &["color", "pick", "hex", "rgb", "palette", "image", "eyedropper"],
        ),
        CatalogItem::new(
            "watermark-adder",
            "Watermark Adder",
            "Add custom watermarks to your images",
            &[
                "watermark", "image", "logo", "brand", "overlay", "protect", "add",
            ],
        ),
        CatalogItem::new(
            "image-converter",
            "Image Converter",
            "Convert images between different formats",
            &[
                "image", "convert", "format", "jpg", "png", "webp", "ico", "change",
            ],
        ),
        CatalogItem::new(
            "image-to-pdf",
            "Image to PDF",
            "Convert multiple images into a single PDF",
            &[
                "image", "pdf", "convert", "combine", "merge", "document", "multiple",
            ],
        ),
        CatalogItem::new(
            "whatsapp-generator",
            "WhatsApp Generator",
            "Generate WhatsApp links and QR codes",
            &[
                "whatsapp", "link", "qr", "code", "message", "chat", "wa.me", "pretyped",
            ],
        ),
        CatalogItem::new(
            "remove-background",
            "Remove Background",
            "Remove image backgrounds automatically with AI",
            &[
                "background", "remove", "ai", "transparent", "eraser", "clear", "cutout",
            ],
        ),
    ]
});

/// Items of the built-in catalog
pub fn builtin_items() -> &'static [CatalogItem] {
    &BUILTIN
}
