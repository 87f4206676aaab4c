// Resume upload: multipart intake plus PDF/DOCX text extraction.
// Extraction delegates to pdf-extract and zip; no OCR, no .doc support.

pub mod handlers;
pub mod text;
