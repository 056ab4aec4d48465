//! Prediction service calls: `POST /predict` and the root reachability probe.

use std::sync::LazyLock;

use log::debug;
use serde::Deserialize;

use crate::error::{PredictorError, PredictorResult};
use crate::types::{FeatureForm, PredictRequest, Prediction, ServiceInfo};

/// Fixed base URL of the local prediction backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Shared HTTP client for prediction service calls.
///
/// No request timeout is set: a submission stays in flight until the backend
/// answers or the connection drops.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Raw body of a 2xx `POST /predict` response.
///
/// The service sends either `predicted_price` (with optional `unit`/`note`)
/// or `error`; every field is optional so any 2xx JSON body classifies.
#[derive(Deserialize)]
struct PredictResponseBody {
    predicted_price: Option<f64>,
    unit: Option<String>,
    note: Option<String>,
    error: Option<String>,
}

/// Client bound to one prediction service instance.
///
/// [`PredictService::new`] targets the fixed local backend
/// ([`DEFAULT_BASE_URL`]); [`PredictService::with_base_url`] exists so tests
/// can point the same code at a local listener.
#[derive(Debug, Clone)]
pub struct PredictService {
    base_url: String,
}

impl PredictService {
    /// Client against the fixed local backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an explicit base URL (trailing slashes ignored).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Submit the feature form and classify the outcome.
    ///
    /// Exactly one attempt, no retry. Returns:
    /// - `Ok(Some(prediction))` when the body carries `predicted_price`;
    /// - `Ok(None)` when a 2xx body carries neither `predicted_price` nor
    ///   `error` (the caller stays idle);
    /// - `Err(PredictorError::Api)` when the body carries `error`, with the
    ///   field's value verbatim;
    /// - `Err(PredictorError::ServerStatus)` on any non-2xx status, body not
    ///   inspected;
    /// - `Err(PredictorError::Network)` when the request never completes.
    ///
    /// `predicted_price` takes precedence over `error` when a body carries
    /// both.
    pub async fn predict(&self, features: &FeatureForm) -> PredictorResult<Option<Prediction>> {
        let url = format!("{}/predict", self.base_url);
        let request = PredictRequest {
            features: features.clone(),
        };
        debug!("[Predict] POST {url}");

        let response = HTTP_CLIENT
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| PredictorError::Network(format!("Request failed: {e}")))?;

        let status = response.status();
        debug!("[Predict] Response status: {status}");
        if !status.is_success() {
            return Err(PredictorError::ServerStatus(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| PredictorError::Network(format!("Failed to read response body: {e}")))?;
        debug!("[Predict] Response body: {text}");

        let body: PredictResponseBody = serde_json::from_str(&text)
            .map_err(|e| PredictorError::Parse(format!("Invalid response body: {e}")))?;

        if let Some(predicted_price) = body.predicted_price {
            return Ok(Some(Prediction {
                predicted_price,
                unit: body.unit,
                note: body.note,
            }));
        }
        if let Some(message) = body.error {
            return Err(PredictorError::Api(message));
        }
        Ok(None)
    }

    /// Probe the service root route (`GET /`).
    ///
    /// The backend identifies itself with a `{"message": ...}` body; useful
    /// as an on-demand reachability check before submitting.
    pub async fn service_info(&self) -> PredictorResult<ServiceInfo> {
        let url = format!("{}/", self.base_url);
        debug!("[Predict] GET {url}");

        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| PredictorError::Network(format!("Request failed: {e}")))?;

        let status = response.status();
        debug!("[Predict] Response status: {status}");
        if !status.is_success() {
            return Err(PredictorError::ServerStatus(status.as_u16()));
        }

        response
            .json::<ServiceInfo>()
            .await
            .map_err(|e| PredictorError::Parse(format!("Invalid response body: {e}")))
    }
}

impl Default for PredictService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    /// Serve one canned HTTP response on a fresh local port, returning the
    /// base URL to point the client at.
    async fn spawn_one_shot(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let _ = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len(),
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });
        format!("http://{addr}")
    }

    /// Like [`spawn_one_shot`], but also hands the raw request text back to
    /// the test for wire-shape assertions.
    async fn spawn_capture(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len(),
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            let _ = tx.send(request).await;
        });
        (format!("http://{addr}"), rx)
    }

    /// Read a full HTTP request (headers plus `Content-Length` body).
    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text
                    .lines()
                    .find_map(|line| line.strip_prefix("Content-Length: "))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if raw.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).to_string()
    }

    fn sample_form() -> FeatureForm {
        FeatureForm {
            area: "1200".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2".to_string(),
            floor: "4".to_string(),
            city: "Mumbai".to_string(),
            furnishing: "Semi-Furnished".to_string(),
        }
    }

    // ==================== predict tests ====================

    #[tokio::test]
    async fn test_predict_success() {
        let base = spawn_one_shot("200 OK", r#"{"predicted_price": 4500000}"#).await;
        let service = PredictService::with_base_url(base);

        let prediction = service.predict(&sample_form()).await.unwrap().unwrap();
        assert!((prediction.predicted_price - 4_500_000.0).abs() < f64::EPSILON);
        assert!(prediction.unit.is_none());
        assert!(prediction.note.is_none());
    }

    #[tokio::test]
    async fn test_predict_success_with_unit_and_note() {
        let base = spawn_one_shot(
            "200 OK",
            r#"{"predicted_price": 7350000.25, "unit": "INR", "note": "Price is a point estimate from the trained model"}"#,
        )
        .await;
        let service = PredictService::with_base_url(base);

        let prediction = service.predict(&sample_form()).await.unwrap().unwrap();
        assert_eq!(prediction.unit.as_deref(), Some("INR"));
        assert!(prediction.note.is_some());
    }

    #[tokio::test]
    async fn test_predict_api_error_on_2xx() {
        let base = spawn_one_shot("200 OK", r#"{"error": "invalid input"}"#).await;
        let service = PredictService::with_base_url(base);

        let err = service.predict(&sample_form()).await.unwrap_err();
        match err {
            PredictorError::Api(message) => assert_eq!(message, "invalid input"),
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_predict_non_2xx_ignores_body() {
        // Even a well-formed error body must not leak through on a bad status.
        let base = spawn_one_shot("500 Internal Server Error", r#"{"error": "boom"}"#).await;
        let service = PredictService::with_base_url(base);

        let err = service.predict(&sample_form()).await.unwrap_err();
        match err {
            PredictorError::ServerStatus(code) => assert_eq!(code, 500),
            other => panic!("Expected ServerStatus error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_predict_neither_field_is_idle() {
        let base = spawn_one_shot("200 OK", r#"{"status": "ok"}"#).await;
        let service = PredictService::with_base_url(base);

        let outcome = service.predict(&sample_form()).await.unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn test_predict_price_takes_precedence_over_error() {
        let base =
            spawn_one_shot("200 OK", r#"{"predicted_price": 100, "error": "ignored"}"#).await;
        let service = PredictService::with_base_url(base);

        let prediction = service.predict(&sample_form()).await.unwrap().unwrap();
        assert!((prediction.predicted_price - 100.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_predict_malformed_body() {
        let base = spawn_one_shot("200 OK", "not json at all").await;
        let service = PredictService::with_base_url(base);

        let err = service.predict(&sample_form()).await.unwrap_err();
        assert!(matches!(err, PredictorError::Parse(_)));
    }

    #[tokio::test]
    async fn test_predict_connection_refused() {
        // Bind then drop to get a port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let service = PredictService::with_base_url(format!("http://{addr}"));

        let err = service.predict(&sample_form()).await.unwrap_err();
        assert!(matches!(err, PredictorError::Network(_)));
    }

    #[tokio::test]
    async fn test_predict_wire_shape() {
        let (base, mut rx) = spawn_capture("200 OK", r#"{"predicted_price": 1}"#).await;
        let service = PredictService::with_base_url(base);

        service.predict(&sample_form()).await.unwrap();
        let request = rx.recv().await.unwrap();

        assert!(request.starts_with("POST /predict HTTP/1.1\r\n"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.contains(
            r#"{"features":{"area":"1200","bedrooms":"3","bathrooms":"2","floor":"4","city":"Mumbai","furnishing":"Semi-Furnished"}}"#
        ));
    }

    #[tokio::test]
    async fn test_predict_sends_empty_fields_as_empty_strings() {
        let (base, mut rx) = spawn_capture("200 OK", r#"{"predicted_price": 1}"#).await;
        let service = PredictService::with_base_url(base);

        service.predict(&FeatureForm::default()).await.unwrap();
        let request = rx.recv().await.unwrap();

        assert!(request.contains(
            r#"{"features":{"area":"","bedrooms":"","bathrooms":"","floor":"","city":"","furnishing":""}}"#
        ));
    }

    // ==================== service_info tests ====================

    #[tokio::test]
    async fn test_service_info_success() {
        let base = spawn_one_shot(
            "200 OK",
            r#"{"message": "Indian House Price Prediction API. Use POST /predict with JSON {'features': {...}}"}"#,
        )
        .await;
        let service = PredictService::with_base_url(base);

        let info = service.service_info().await.unwrap();
        assert!(info.message.contains("Prediction API"));
    }

    #[tokio::test]
    async fn test_service_info_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let service = PredictService::with_base_url(format!("http://{addr}"));

        let err = service.service_info().await.unwrap_err();
        assert!(matches!(err, PredictorError::Network(_)));
    }

    // ==================== base URL tests ====================

    #[tokio::test]
    async fn test_with_base_url_trims_trailing_slash() {
        let base = spawn_one_shot("200 OK", r#"{"predicted_price": 1}"#).await;
        let service = PredictService::with_base_url(format!("{base}/"));

        // A doubled slash in the path would 404 against a real router; the
        // canned listener only cares that the request line is well-formed.
        let outcome = service.predict(&sample_form()).await.unwrap();
        assert!(outcome.is_some());
    }
}
