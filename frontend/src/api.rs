use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::response::interpret;
use shared::{ApiConfig, DetectError, DetectionRequest, DetectionResult, Route};
use wasm_bindgen::JsValue;
use web_sys::FormData;

fn js_error(e: JsValue) -> DetectError {
    DetectError::network(format!("{:?}", e))
}

/// Posts one request to its detect route and interprets the reply.
pub async fn submit(
    api: &ApiConfig,
    request: DetectionRequest<GlooFile>,
) -> Result<DetectionResult, DetectError> {
    let kind = request.kind();
    let form_data = FormData::new().map_err(js_error)?;
    match &request {
        DetectionRequest::Text { text } => form_data.append_with_str(kind.field_name(), text),
        DetectionRequest::File { file, .. } => form_data.append_with_blob(kind.field_name(), file.as_ref()),
    }
    .map_err(js_error)?;

    let url = api.url(kind.route());
    log::info!("POST {}", url);

    let response = Request::post(&url)
        .body(form_data)
        .map_err(DetectError::network)?
        .send()
        .await
        .map_err(|e| {
            log::error!("Request to {} failed: {}", url, e);
            DetectError::network(e)
        })?;

    let status = response.status();
    let body = response.text().await.map_err(DetectError::network)?;
    interpret(kind, status, &body)
}

pub async fn probe_health(api: &ApiConfig) -> Result<serde_json::Value, DetectError> {
    let response = Request::get(&api.url(Route::Health))
        .send()
        .await
        .map_err(DetectError::network)?;

    if !response.ok() {
        return Err(DetectError::Api {
            status: response.status(),
            message: format!("Health check returned {}", response.status_text()),
        });
    }

    response.json::<serde_json::Value>().await.map_err(DetectError::network)
}
