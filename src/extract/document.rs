use super::{ExtractError, TextExtractor};

/// Default extractor: PDFs via `pdf-extract`, plain text verbatim.
pub struct DocumentExtractor;

impl TextExtractor for DocumentExtractor {
    fn extract_text(&self, data: &[u8], mime_type: &str) -> Result<String, ExtractError> {
        match mime_type {
            "application/pdf" => pdf_extract::extract_text_from_mem(data)
                .map_err(|e| ExtractError::PdfParse(e.to_string())),
            "text/plain" => String::from_utf8(data.to_vec())
                .map_err(|e| ExtractError::InvalidEncoding(e.to_string())),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }
}
