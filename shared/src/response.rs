use serde::Deserialize;

use crate::error::DetectError;
use crate::model::{DetectionResult, SourceKind};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turns an HTTP status and body from a detect route into a result.
///
/// Failing statuses use the body's `detail` string when there is one and
/// the route's fallback message otherwise. A success body that does not
/// parse is reported the same way as a failure without detail.
pub fn interpret(kind: SourceKind, status: u16, body: &str) -> Result<DetectionResult, DetectError> {
    if is_success(status) {
        return serde_json::from_str::<DetectionResult>(body).map_err(|e| {
            log::error!("Failed to parse {} detection response: {}", kind, e);
            DetectError::Api {
                status,
                message: kind.failure_fallback().to_string(),
            }
        });
    }

    let message = extract_detail(body).unwrap_or_else(|| kind.failure_fallback().to_string());
    Err(DetectError::Api { status, message })
}

fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}
