//! Single-attempt HTTP GET and classification of the reply.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Header carrying the API key on every request.
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Request timeout applied when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const UNKNOWN_ERROR: &str = "unknown error";

/// Why a request produced no usable body.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A successful response body, kept both undecoded and parsed.
#[derive(Debug, Clone)]
pub struct Body {
    raw: String,
    json: Value,
}

impl Body {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn into_json(self) -> Value {
        self.json
    }

    /// Parses the undecoded body again into a typed shape.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.raw)
    }
}

/// Outcome of one request. Exactly one of the three cases holds.
#[derive(Debug)]
pub enum Classified {
    Success(Body),
    ApiError { code: String, message: String },
    TransportError(TransportError),
}

impl Classified {
    pub fn is_success(&self) -> bool {
        matches!(self, Classified::Success(_))
    }
}

/// Issues GET requests with the auth header. Holds no per-call state.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
}

impl Gateway {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Sends one GET to `url` and classifies the reply. Never retries.
    pub async fn execute(&self, url: &str, api_key: &str) -> Classified {
        tracing::debug!("GET {}", url);
        let resp = match self.http.get(url).header(AUTH_HEADER, api_key).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("Failed to get resource: {}", e);
                return Classified::TransportError(e.into());
            }
        };

        let status = resp.status().as_u16();
        let raw = match resp.text().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to read response body: {}", e);
                return Classified::TransportError(e.into());
            }
        };

        let classified = classify(status, raw);
        match &classified {
            Classified::ApiError { code, message } => {
                tracing::error!("API error {} from {}: {}", code, url, message);
            }
            Classified::TransportError(e) => {
                tracing::error!("Failed to parse resource from {}: {}", url, e);
            }
            Classified::Success(_) => {}
        }
        classified
    }
}

/// Classifies a reply from its status code and undecoded body.
///
/// An `errorCode` or `error` key marks an error payload whatever the status,
/// even when data fields are present too. A non-2xx reply without either key
/// is still an error, coded with the HTTP status.
pub fn classify(status: u16, raw: String) -> Classified {
    let json: Value = match serde_json::from_str(&raw) {
        Ok(json) => json,
        Err(e) => return Classified::TransportError(e.into()),
    };

    let indicator = json
        .get("errorCode")
        .or_else(|| json.get("error"))
        .map(code_text);
    if let Some(code) = indicator {
        let message = json
            .get("message")
            .map(code_text)
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        return Classified::ApiError { code, message };
    }

    if !(200..300).contains(&status) {
        let message = json
            .get("message")
            .map(code_text)
            .unwrap_or_else(|| truncate_body(&raw));
        return Classified::ApiError {
            code: status.to_string(),
            message,
        };
    }

    Classified::Success(Body { raw, json })
}

fn code_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(classified: Classified) -> (String, String) {
        match classified {
            Classified::ApiError { code, message } => (code, message),
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn success_keeps_raw_and_parsed() {
        let raw = r#"{"count": 1, "competitions": [{"id": 2021}]}"#;
        match classify(200, raw.to_string()) {
            Classified::Success(body) => {
                assert_eq!(body.raw(), raw);
                assert_eq!(body.json()["count"], 1);
                let reparsed: serde_json::Map<String, Value> = body.parse().unwrap();
                assert!(reparsed.contains_key("competitions"));
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn error_code_with_message() {
        let raw = r#"{"message": "The resource you are looking for is restricted.", "errorCode": 403}"#;
        let (code, message) = api_error(classify(403, raw.to_string()));
        assert_eq!(code, "403");
        assert_eq!(message, "The resource you are looking for is restricted.");
    }

    #[test]
    fn error_key_on_ok_status() {
        let raw = r#"{"error": 400, "message": "Bad filter"}"#;
        let (code, message) = api_error(classify(200, raw.to_string()));
        assert_eq!(code, "400");
        assert_eq!(message, "Bad filter");
    }

    #[test]
    fn error_code_preferred_over_error() {
        let raw = r#"{"error": "x", "errorCode": 429, "message": "slow down"}"#;
        let (code, _) = api_error(classify(429, raw.to_string()));
        assert_eq!(code, "429");
    }

    #[test]
    fn error_indicator_wins_over_data() {
        let raw = r#"{"errorCode": 500, "message": "partial", "matches": [{"id": 1}]}"#;
        let (code, message) = api_error(classify(200, raw.to_string()));
        assert_eq!(code, "500");
        assert_eq!(message, "partial");
    }

    #[test]
    fn error_without_message() {
        let (_, message) = api_error(classify(200, r#"{"error": 404}"#.to_string()));
        assert_eq!(message, "unknown error");
    }

    #[test]
    fn non_success_status_without_indicator() {
        let (code, message) =
            api_error(classify(404, r#"{"message": "Not found"}"#.to_string()));
        assert_eq!(code, "404");
        assert_eq!(message, "Not found");

        let (code, message) = api_error(classify(502, r#"["gateway"]"#.to_string()));
        assert_eq!(code, "502");
        assert_eq!(message, r#"["gateway"]"#);
    }

    #[test]
    fn invalid_json_is_transport_error() {
        let classified = classify(200, "<html>oops</html>".to_string());
        assert!(matches!(
            classified,
            Classified::TransportError(TransportError::Decode(_))
        ));
        assert!(!classify(200, String::new()).is_success());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(300);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }

    #[test]
    fn gateway_builds() {
        assert!(Gateway::new(DEFAULT_TIMEOUT).is_ok());
    }
}
