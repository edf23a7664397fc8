//! Paginated PDF rendering over printpdf builtin fonts

use crate::{Result, layout};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
/// Height of one body row.
const LINE_HEIGHT_MM: f32 = 6.0;
/// Baseline of the page header title.
const PAGE_HEADER_Y_MM: f32 = PAGE_HEIGHT_MM - 18.0;
/// Baseline of the footer, measured from the bottom edge.
const FOOTER_Y_MM: f32 = 15.0;
/// Content may not descend past this; crossing it starts a new page.
const BOTTOM_LIMIT_MM: f32 = 20.0;
/// First body baseline on a fresh page.
const CONTENT_TOP_MM: f32 = PAGE_HEIGHT_MM - 35.0;

const PAGE_HEADER_SIZE_PT: f32 = 15.0;
const TITLE_SIZE_PT: f32 = 16.0;
const BODY_SIZE_PT: f32 = 12.0;
const FOOTER_SIZE_PT: f32 = 8.0;

const PT_TO_MM: f32 = 0.352_778;

/// The text and metadata a document is rendered from.
///
/// Fields are plain strings: the download path passes caller-supplied values
/// through verbatim, exactly as they will appear in the document header and
/// the attachment filename.
#[derive(Debug, Clone, Copy)]
pub struct DocumentContent<'a> {
    /// Currency pair code for the document header
    pub currency: &'a str,
    /// Period start for the document header
    pub start_date: &'a str,
    /// Period end for the document header
    pub end_date: &'a str,
    /// Report text
    pub body: &'a str,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

/// Render a currency report into PDF bytes.
///
/// Every page carries the centered "Currency Report" header and a centered
/// "Page N" footer; the first page additionally carries the currency and
/// period lines. Body rows come from [`layout::layout_rows`] and overflow
/// onto new pages automatically. Text is limited to what the builtin
/// Helvetica faces encode; non-ASCII characters may render lossily.
pub fn render_report(content: &DocumentContent<'_>) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Currency Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );

    let fonts = Fonts {
        regular: add_builtin(&doc, BuiltinFont::Helvetica)?,
        bold: add_builtin(&doc, BuiltinFont::HelveticaBold)?,
        italic: add_builtin(&doc, BuiltinFont::HelveticaOblique)?,
    };

    let mut page_number = 1;
    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    draw_page_chrome(&layer, &fonts, page_number);

    // Document header, first page only.
    let mut y = CONTENT_TOP_MM;
    let title = format!("Currency Report: {}", content.currency);
    draw_centered(&layer, &fonts.bold, &title, TITLE_SIZE_PT, y);
    y -= 10.0;
    let period = format!("Period: {} to {}", content.start_date, content.end_date);
    draw_centered(&layer, &fonts.bold, &period, TITLE_SIZE_PT, y);
    y -= 20.0;

    for row in layout::layout_rows(content.body) {
        if y < BOTTOM_LIMIT_MM {
            let (page, page_layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            layer = doc.get_page(page).get_layer(page_layer);
            page_number += 1;
            draw_page_chrome(&layer, &fonts, page_number);
            y = CONTENT_TOP_MM;
        }
        if !row.is_empty() {
            layer.use_text(row, BODY_SIZE_PT, Mm(MARGIN_MM), Mm(y), &fonts.regular);
        }
        y -= LINE_HEIGHT_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| crate::RenderError::Pdf(e.to_string()))
}

fn add_builtin(
    doc: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| crate::RenderError::Pdf(e.to_string()))
}

/// Header and footer applied to every page.
fn draw_page_chrome(layer: &PdfLayerReference, fonts: &Fonts, page_number: u32) {
    draw_centered(
        layer,
        &fonts.bold,
        "Currency Report",
        PAGE_HEADER_SIZE_PT,
        PAGE_HEADER_Y_MM,
    );
    draw_centered(
        layer,
        &fonts.italic,
        &format!("Page {page_number}"),
        FOOTER_SIZE_PT,
        FOOTER_Y_MM,
    );
}

fn draw_centered(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size_pt: f32,
    y_mm: f32,
) {
    layer.use_text(text, size_pt, Mm(centered_x_mm(text, size_pt)), Mm(y_mm), font);
}

/// Horizontal start for visually centered text.
///
/// Helvetica's average glyph advance for mixed text sits close to half an
/// em, which is accurate enough for header centering without embedding font
/// metrics.
fn centered_x_mm(text: &str, size_pt: f32) -> f32 {
    let width_mm = text.chars().count() as f32 * size_pt * 0.5 * PT_TO_MM;
    ((PAGE_WIDTH_MM - width_mm) / 2.0).max(MARGIN_MM)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(body: &str) -> DocumentContent<'_> {
        DocumentContent {
            currency: "USDINR",
            start_date: "2024-01-01",
            end_date: "2024-02-01",
            body,
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_report(&content("Rates held steady.\n\nVolatility was muted."))
            .expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_empty_body() {
        let bytes = render_report(&content("")).expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_body_overflows_to_more_pages() {
        let one_row = render_report(&content("single row")).unwrap();

        let long_body = (0..200)
            .map(|i| format!("Row {i} of the generated analysis."))
            .collect::<Vec<_>>()
            .join("\n");
        let many_rows = render_report(&content(&long_body)).unwrap();

        // A multi-page document carries more page objects and more content.
        assert!(many_rows.len() > one_row.len());
    }

    #[test]
    fn test_render_uses_builtin_helvetica() {
        let bytes = render_report(&content("body text")).unwrap();
        let haystack = String::from_utf8_lossy(&bytes);
        assert!(haystack.contains("Helvetica"));
    }

    #[test]
    fn test_centered_x_clamps_to_margin() {
        let very_long = "x".repeat(400);
        assert!((centered_x_mm(&very_long, BODY_SIZE_PT) - MARGIN_MM).abs() < f32::EPSILON);
    }
}
