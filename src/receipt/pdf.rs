use std::fs;
use std::path::{Path, PathBuf};

use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Document, Element as _, SimplePageDecorator};

use super::error::ReceiptError;
use super::layout::{RECEIPT_FILENAME, Receipt, TABLE_HEADER};
use crate::model::BookingDraft;

const PAGE_MARGIN_MM: i32 = 14;
const BODY_FONT_SIZE: u8 = 11;
const LETTERHEAD_FONT_SIZE: u8 = 20;
const TITLE_FONT_SIZE: u8 = 16;

/// Loads `{family}-Regular.ttf`, `-Bold`, `-Italic` and `-BoldItalic` from `dir`.
fn load_fonts(dir: &Path, family: &str) -> Result<FontFamily<FontData>, ReceiptError> {
    genpdf::fonts::from_files(dir, family, None).map_err(|source| ReceiptError::Font {
        dir: dir.to_path_buf(),
        source,
    })
}

fn build_document(
    receipt: &Receipt,
    fonts: FontFamily<FontData>,
) -> Result<Document, ReceiptError> {
    let mut doc = Document::new(fonts);
    doc.set_title(receipt.title);
    doc.set_font_size(BODY_FONT_SIZE);
    doc.set_line_spacing(1.25);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(PAGE_MARGIN_MM);
    doc.set_page_decorator(decorator);

    let letterhead = &receipt.letterhead;
    doc.push(Paragraph::new(StyledString::new(
        letterhead.name,
        Style::new()
            .bold()
            .with_font_size(LETTERHEAD_FONT_SIZE)
            .with_color(Color::Rgb(40, 60, 100)),
    )));
    let grey = Style::new().with_color(Color::Rgb(80, 80, 80));
    for line in letterhead.address {
        doc.push(Paragraph::new(StyledString::new(*line, grey)));
    }
    doc.push(Paragraph::new(StyledString::new(letterhead.phone, grey)));

    doc.push(Break::new(1));
    doc.push(Paragraph::new(StyledString::new(
        receipt.title,
        Style::new().bold().with_font_size(TITLE_FONT_SIZE),
    )));
    doc.push(Break::new(1));

    let mut table = TableLayout::new(vec![1, 2]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));
    table
        .row()
        .element(Paragraph::new(TABLE_HEADER[0]).styled(Style::new().bold()).padded(1))
        .element(Paragraph::new(TABLE_HEADER[1]).styled(Style::new().bold()).padded(1))
        .push()?;
    for [label, value] in &receipt.rows {
        table
            .row()
            .element(Paragraph::new(label.as_str()).padded(1))
            .element(Paragraph::new(value.as_str()).padded(1))
            .push()?;
    }
    doc.push(table);

    Ok(doc)
}

/// Renders `receipt` to a PDF file at `path` using fonts from `fonts_dir`.
#[mutants::skip]
pub fn render_pdf(
    receipt: &Receipt,
    fonts_dir: &Path,
    font_family: &str,
    path: &Path,
) -> Result<(), ReceiptError> {
    let fonts = load_fonts(fonts_dir, font_family)?;
    let doc = build_document(receipt, fonts)?;
    doc.render_to_file(path)?;
    Ok(())
}

/// Writes receipts for confirmed bookings into a fixed output location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptExporter {
    output_dir: PathBuf,
    fonts_dir: PathBuf,
    font_family: String,
}

impl ReceiptExporter {
    /// Creates an exporter writing into `output_dir`.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        fonts_dir: impl Into<PathBuf>,
        font_family: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            fonts_dir: fonts_dir.into(),
            font_family: font_family.into(),
        }
    }

    /// Returns the path every receipt is written to.
    ///
    /// The filename is fixed, so each export overwrites the previous one.
    pub fn path(&self) -> PathBuf {
        self.output_dir.join(RECEIPT_FILENAME)
    }

    /// Lays out `draft` and writes it as a PDF, returning the written path.
    pub fn export(&self, draft: &BookingDraft) -> Result<PathBuf, ReceiptError> {
        let receipt = Receipt::from_draft(draft);
        fs::create_dir_all(&self.output_dir)?;
        let path = self.path();
        render_pdf(&receipt, &self.fonts_dir, &self.font_family, &path)?;
        log::info!("receipt written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    const FIXTURE_FAMILY: &str = "DejaVuSansMono";

    fn fixture_fonts() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fonts")
    }

    fn jane_doe() -> BookingDraft {
        BookingDraft {
            customer_name: "Jane Doe".to_string(),
            booking_via: "Direct".to_string(),
            room_type: "Suite".to_string(),
            check_in_date: "2026-03-01".to_string(),
            check_out_date: "2026-03-04".to_string(),
            amount_paid: "5000".to_string(),
            payment_method: "UPI".to_string(),
            transaction_id: "TXN-42".to_string(),
            ..BookingDraft::default()
        }
    }

    #[test]
    fn path_uses_fixed_filename() {
        let exporter = ReceiptExporter::new("/tmp/receipts", "./fonts", "LiberationSans");
        assert_eq!(
            exporter.path(),
            PathBuf::from("/tmp/receipts/booking-confirmation.pdf")
        );
    }

    #[test]
    fn missing_fonts_fail_without_writing() {
        let out = tempdir().unwrap();
        let fonts = tempdir().unwrap();
        let exporter = ReceiptExporter::new(out.path(), fonts.path(), "NoSuchFont");

        let err = exporter.export(&BookingDraft::default()).unwrap_err();
        match &err {
            ReceiptError::Font { dir, .. } => assert_eq!(dir, fonts.path()),
            other => panic!("expected Font error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("could not load fonts from"));
        assert!(!exporter.path().exists());
    }

    #[test]
    fn export_creates_output_dir() {
        let root = tempdir().unwrap();
        let out = root.path().join("nested").join("receipts");
        let exporter = ReceiptExporter::new(&out, root.path(), "NoSuchFont");

        let _ = exporter.export(&BookingDraft::default());
        assert!(out.is_dir());
    }

    #[test]
    fn export_writes_pdf_document() {
        let out = tempdir().unwrap();
        let exporter = ReceiptExporter::new(out.path(), fixture_fonts(), FIXTURE_FAMILY);

        let path = exporter.export(&jane_doe()).unwrap();
        assert_eq!(path, out.path().join(RECEIPT_FILENAME));

        let bytes = fs::read(&path).unwrap();
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn export_overwrites_previous_receipt() {
        let out = tempdir().unwrap();
        let exporter = ReceiptExporter::new(out.path(), fixture_fonts(), FIXTURE_FAMILY);

        exporter.export(&jane_doe()).unwrap();
        let second = BookingDraft {
            customer_name: "John Roe".to_string(),
            ..jane_doe()
        };
        exporter.export(&second).unwrap();

        let entries: Vec<_> = fs::read_dir(out.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(exporter.path().is_file());
    }
}
