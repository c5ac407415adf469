//! Upload text extraction — `.txt` decode and PDF text extraction.

use std::path::Path;

use tracing::warn;

use crate::error::UploadError;

/// Extract text from an uploaded file, dispatching on the extension.
/// Only `.txt` and `.pdf` are accepted.
pub fn extract_upload_text(filename: &str, bytes: &[u8]) -> Result<String, UploadError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("txt") => Ok(String::from_utf8_lossy(bytes).into_owned()),
        Some("pdf") => extract_pdf_text(bytes),
        _ => Err(UploadError::UnsupportedType),
    }
}

/// Pull the text layer out of a PDF. An unreadable document or one with
/// no extractable text is a caller error, not a crash.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, UploadError> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        warn!(error = %e, "PDF text extraction failed");
        UploadError::PdfExtraction
    })?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(UploadError::PdfExtraction);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_files_decode_as_utf8() {
        let text = extract_upload_text("email.txt", "Preciso de ajuda urgente.".as_bytes());
        assert_eq!(text.unwrap(), "Preciso de ajuda urgente.");
    }

    #[test]
    fn txt_extension_is_case_insensitive() {
        assert!(extract_upload_text("EMAIL.TXT", b"conteudo do email").is_ok());
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let bytes = [0x50, 0x72, 0x65, 0xFF, 0xFE, 0x63, 0x69, 0x73, 0x6F];
        let text = extract_upload_text("email.txt", &bytes).unwrap();
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn unsupported_extensions_rejected() {
        for name in ["email.docx", "email.exe", "email", "email.pdf.sh"] {
            assert_eq!(
                extract_upload_text(name, b"dados"),
                Err(UploadError::UnsupportedType),
                "should reject: {name}"
            );
        }
    }

    #[test]
    fn garbage_pdf_bytes_fail_extraction() {
        assert_eq!(
            extract_upload_text("email.pdf", b"isto nao e um pdf"),
            Err(UploadError::PdfExtraction)
        );
    }
}
