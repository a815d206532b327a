use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pdf_simplify::ai::TextGenerator;
use pdf_simplify::api::helpers::SERVICE_UNAVAILABLE_MESSAGE;
use pdf_simplify::api::{AppState, router};
use pdf_simplify::core::models::{ErrorDetail, SimplifyResponse};
use pdf_simplify::errors::SimplifyError;
use pdf_simplify::pdf::TextExtractor;
use pdf_simplify::summarize::SummaryGenerator;
use reqwest::StatusCode;

const BOUNDARY: &str = "pdfsimplifyboundary";

/// Records the staged path and what was on disk when extraction ran.
#[derive(Default)]
struct RecordingExtractor {
    seen: Mutex<Option<(PathBuf, Vec<u8>)>>,
    fail: bool,
}

impl RecordingExtractor {
    fn seen(&self) -> Option<(PathBuf, Vec<u8>)> {
        self.seen.lock().unwrap().clone()
    }
}

impl TextExtractor for RecordingExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>, SimplifyError> {
        let bytes = std::fs::read(path)?;
        *self.seen.lock().unwrap() = Some((path.to_path_buf(), bytes));
        if self.fail {
            return Err(SimplifyError::ExtractionError("no text layer".to_string()));
        }
        Ok(vec![
            "Plants make food from light.".to_string(),
            "They also need water.".to_string(),
        ])
    }
}

struct HappyGenerator;

#[async_trait]
impl TextGenerator for HappyGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, SimplifyError> {
        let reply = if prompt.contains("DETAILED EXPLANATIONS") {
            "Point 1:\n1.1 Leaves catch light.\n1.2 Light gives energy.\nPoint 2:\n2.1 Roots drink water."
        } else if prompt.contains("MAIN IDEAS:") {
            "1. Plants make food.\n2. Plants need water.\n3. Plants grow.\n4. Extra idea."
        } else if prompt.contains("Topic:") {
            " Photosynthesis "
        } else {
            "plants, light, water"
        };
        Ok(reply.to_string())
    }
}

struct DownGenerator;

#[async_trait]
impl TextGenerator for DownGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, SimplifyError> {
        Err(SimplifyError::HttpError("connection refused".to_string()))
    }
}

struct MisconfiguredGenerator;

#[async_trait]
impl TextGenerator for MisconfiguredGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, SimplifyError> {
        Err(SimplifyError::ConfigError("chunk overlap too large".to_string()))
    }
}

async fn spawn_app(
    generator: Arc<dyn TextGenerator>,
    extractor: Arc<RecordingExtractor>,
    max_upload_bytes: usize,
) -> String {
    let summarizer = Arc::new(SummaryGenerator::new(generator, true));
    let state = AppState::new(summarizer, extractor);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state, max_upload_bytes))
            .await
            .unwrap();
    });
    format!("http://{addr}")
}

fn multipart_body(field: &str, contents: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"doc.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_upload(base: &str, body: Vec<u8>) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base}/api/simplify_pdf"))
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_simplify_pdf_returns_one_fixed_shape_summary() {
    let extractor = Arc::new(RecordingExtractor::default());
    let base = spawn_app(Arc::new(HappyGenerator), extractor.clone(), 1024 * 1024).await;

    let resp = post_upload(&base, multipart_body("file", b"%PDF-1.4 fake")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value = resp.json().await.unwrap();
    let summaries = json["summaries"].as_array().unwrap();
    assert_eq!(summaries.len(), 1);

    let summary = &summaries[0];
    assert_eq!(summary["id"], 1);
    assert_eq!(summary["title"], "1. Plants make food.");
    assert_eq!(summary["topic"], "Photosynthesis");
    assert_eq!(summary["keywords"], serde_json::json!(["plants", "light", "water"]));
    assert_eq!(
        summary["lines"],
        serde_json::json!(["1. Plants make food.", "2. Plants need water.", "3. Plants grow."])
    );
    assert_eq!(
        summary["expanded"],
        serde_json::json!([
            ["1.1 Leaves catch light.", "1.2 Light gives energy.", "1.3 Extra"],
            ["2.1 Roots drink water.", "2.2 Extra", "2.3 Extra"],
            ["3.1 Extra", "3.2 Extra", "3.3 Extra"]
        ])
    );

    // The response body also decodes into the typed model
    let typed: SimplifyResponse = serde_json::from_value(json).unwrap();
    assert_eq!(typed.summaries[0].lines[2], "3. Plants grow.");

    let (path, staged_bytes) = extractor.seen().unwrap();
    assert_eq!(staged_bytes, b"%PDF-1.4 fake");
    assert!(!path.exists(), "staged upload should be removed");
}

#[tokio::test]
async fn test_generation_failure_returns_503_without_summary() {
    let extractor = Arc::new(RecordingExtractor::default());
    let base = spawn_app(Arc::new(DownGenerator), extractor.clone(), 1024 * 1024).await;

    let resp = post_upload(&base, multipart_body("file", b"%PDF-1.4 fake")).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body.get("summaries").is_none());
    let detail: ErrorDetail = serde_json::from_value(body).unwrap();
    assert_eq!(detail.detail, SERVICE_UNAVAILABLE_MESSAGE);

    let (path, _) = extractor.seen().unwrap();
    assert!(!path.exists(), "staged upload should be removed on failure");
}

#[tokio::test]
async fn test_non_generation_failure_is_internal_error() {
    let extractor = Arc::new(RecordingExtractor::default());
    let base = spawn_app(Arc::new(MisconfiguredGenerator), extractor.clone(), 1024 * 1024).await;

    let resp = post_upload(&base, multipart_body("file", b"%PDF-1.4 fake")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let detail: ErrorDetail = resp.json().await.unwrap();
    assert_ne!(detail.detail, SERVICE_UNAVAILABLE_MESSAGE);

    let (path, _) = extractor.seen().unwrap();
    assert!(!path.exists());
}

#[tokio::test]
async fn test_extraction_failure_returns_500_and_cleans_up() {
    let extractor = Arc::new(RecordingExtractor {
        fail: true,
        ..RecordingExtractor::default()
    });
    let base = spawn_app(Arc::new(HappyGenerator), extractor.clone(), 1024 * 1024).await;

    let resp = post_upload(&base, multipart_body("file", b"not a pdf")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let detail: ErrorDetail = resp.json().await.unwrap();
    assert!(detail.detail.contains("extract"));

    let (path, _) = extractor.seen().unwrap();
    assert!(!path.exists());
}

#[tokio::test]
async fn test_missing_file_field_is_unprocessable() {
    let extractor = Arc::new(RecordingExtractor::default());
    let base = spawn_app(Arc::new(HappyGenerator), extractor.clone(), 1024 * 1024).await;

    let resp = post_upload(&base, multipart_body("document", b"%PDF-1.4 fake")).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let detail: ErrorDetail = resp.json().await.unwrap();
    assert!(detail.detail.contains("file"));
    assert!(extractor.seen().is_none());
}

#[tokio::test]
async fn test_non_multipart_request_is_unprocessable() {
    let base = spawn_app(
        Arc::new(HappyGenerator),
        Arc::new(RecordingExtractor::default()),
        1024 * 1024,
    )
    .await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/simplify_pdf"))
        .header("Content-Type", "application/json")
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let extractor = Arc::new(RecordingExtractor::default());
    let base = spawn_app(Arc::new(HappyGenerator), extractor.clone(), 64).await;

    let resp = post_upload(&base, multipart_body("file", &[b'x'; 4096])).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    // Rejected by the handler, so the body keeps the `{detail}` shape
    let detail: ErrorDetail = resp.json().await.unwrap();
    assert!(detail.detail.starts_with("Failed to read upload"));
    assert!(extractor.seen().is_none());
}

#[tokio::test]
async fn test_health_and_cors() {
    let base = spawn_app(
        Arc::new(HappyGenerator),
        Arc::new(RecordingExtractor::default()),
        1024,
    )
    .await;

    let resp = reqwest::Client::new()
        .get(format!("{base}/health"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
