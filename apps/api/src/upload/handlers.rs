//! Multipart upload handler — accepts a PDF or DOCX resume and returns the
//! extracted plain text for the analyze step.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::text::{extract_docx_text, extract_pdf_text};

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOC_MIME: &str = "application/msword";

/// Below this many extracted characters the file is treated as unreadable
/// (scanned or image-only documents).
const MIN_EXTRACTED_CHARS: usize = 10;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub text: String,
    pub file_name: String,
    pub file_size: usize,
}

/// POST /upload-resume
///
/// Validation order: field present → type accepted → size → legacy `.doc`
/// rejection → extraction → minimum readable text.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, Option<String>, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::Validation("文件上传数据无效".to_string()))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("resume").to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|_| AppError::Validation("文件上传数据无效".to_string()))?;
            upload = Some((file_name, content_type, data));
            break;
        }
    }

    let Some((file_name, content_type, data)) = upload else {
        return Err(AppError::Validation("未找到文件".to_string()));
    };

    // Lower-cased extension, dot included ("" when the name has no dot)
    let extension = file_name
        .rfind('.')
        .map(|dot| file_name[dot..].to_lowercase())
        .unwrap_or_default();

    let mime = content_type.as_deref();
    let mime_ok = mime == Some(PDF_MIME) || mime == Some(DOCX_MIME) || mime == Some(DOC_MIME);
    let extension_ok = matches!(extension.as_str(), ".pdf" | ".docx" | ".doc");
    if !mime_ok && !extension_ok {
        return Err(AppError::Validation(
            "不支持的文件格式，请上传PDF或DOCX文件".to_string(),
        ));
    }

    if data.len() as u64 > state.config.max_upload_bytes {
        return Err(AppError::Validation("文件大小不能超过10MB".to_string()));
    }

    let is_pdf = extension == ".pdf" || mime == Some(PDF_MIME);
    let is_docx = extension == ".docx" || mime == Some(DOCX_MIME);

    let text = if is_pdf {
        extract_pdf_text(&data)?
    } else if is_docx {
        extract_docx_text(&data)?
    } else {
        // Only the legacy Word format reaches here
        return Err(AppError::Validation(
            "不支持.doc格式，请将文件转换为.docx或.pdf格式".to_string(),
        ));
    };

    let text = text.trim().to_string();
    if text.chars().count() < MIN_EXTRACTED_CHARS {
        return Err(AppError::Document(
            "无法从文件中提取文本内容，请确保文件包含可读文本".to_string(),
        ));
    }

    info!(file = %file_name, bytes = data.len(), "resume text extracted");

    Ok(Json(UploadResponse {
        success: true,
        text,
        file_name,
        file_size: data.len(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::state::test_support::test_state;
    use crate::upload::text::docx_bytes;

    const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

    fn multipart_request(file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/upload-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_docx_upload_returns_extracted_text() {
        let data = docx_bytes(
            "<w:document><w:body><w:p><w:r>\
             <w:t>精通React和Node.js开发，3年工作经验</w:t>\
             </w:r></w:p></w:body></w:document>",
        );
        let app = build_router(test_state());
        let response = app
            .oneshot(multipart_request(
                "resume.docx",
                super::DOCX_MIME,
                &data,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["fileName"], "resume.docx");
        assert_eq!(body["fileSize"], data.len() as u64);
        assert!(body["text"].as_str().unwrap().contains("精通React"));
    }

    #[tokio::test]
    async fn test_legacy_doc_rejected_regardless_of_content() {
        let app = build_router(test_state());
        let response = app
            .oneshot(multipart_request("resume.doc", super::DOC_MIME, b"anything"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("不支持.doc格式"));
    }

    #[tokio::test]
    async fn test_unsupported_format_rejected() {
        let app = build_router(test_state());
        let response = app
            .oneshot(multipart_request("resume.txt", "text/plain", b"plain text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("不支持的文件格式"));
    }

    #[tokio::test]
    async fn test_missing_file_field_rejected() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/upload-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let app = build_router(test_state());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert!(body["error"]["message"].as_str().unwrap().contains("未找到文件"));
    }

    #[tokio::test]
    async fn test_oversized_file_rejected() {
        let mut state = test_state();
        state.config.max_upload_bytes = 16;

        let app = build_router(state);
        let response = app
            .oneshot(multipart_request(
                "resume.pdf",
                super::PDF_MIME,
                &[0u8; 64],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("文件大小不能超过10MB"));
    }

    #[tokio::test]
    async fn test_corrupt_docx_rejected() {
        let app = build_router(test_state());
        let response = app
            .oneshot(multipart_request(
                "resume.docx",
                super::DOCX_MIME,
                b"not a zip container",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("DOCX文件解析失败"));
    }

    #[tokio::test]
    async fn test_docx_with_too_little_text_rejected() {
        let data = docx_bytes("<w:document><w:body><w:p><w:r><w:t>短</w:t></w:r></w:p></w:body></w:document>");
        let app = build_router(test_state());
        let response = app
            .oneshot(multipart_request("resume.docx", super::DOCX_MIME, &data))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("无法从文件中提取文本内容"));
    }
}
