//! HTTP client for the lead package backend.
//!
//! Every request carries the stored bearer token (if any) and every response
//! is unwrapped from the `ApiResponse` envelope. Failures are classified into
//! [`ApiError`] and logged here, so callers only decide how to show them.

use contracts::shared::api_response::{ApiAck, ApiResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortController;

use crate::shared::api_config::{api_url, REQUEST_TIMEOUT_MS};
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("认证失败，登录已过期")]
    Unauthorized,
    #[error("权限不足")]
    Forbidden,
    #[error("服务器错误: {0}")]
    Server(String),
    #[error("请求失败 (HTTP {status}): {message}")]
    Http { status: u16, message: String },
    #[error("网络连接失败，请检查网络设置")]
    Network(String),
    #[error("响应解析失败: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Classify a non-2xx status; `body_message` is the backend's
    /// `error`/`message` text when the body had one
    pub fn from_status(status: u16, body_message: Option<String>) -> Self {
        let message = body_message.unwrap_or_else(|| "未知错误".to_string());
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            500..=599 => ApiError::Server(message),
            _ => ApiError::Http { status, message },
        }
    }
}

/// `error` or `message` field of a JSON error body
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::valid_record() {
        Some(record) => builder.header("Authorization", &record.bearer_header()),
        None => builder,
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, error_message_from_body(&body));
    match &error {
        ApiError::Unauthorized => {
            log::error!("401 from {}: token rejected, clearing", response.url());
            storage::clear_token();
        }
        ApiError::Forbidden => log::error!("403 from {}", response.url()),
        ApiError::Server(message) => log::error!("{} from {}: {}", status, response.url(), message),
        _ => log::warn!("{} from {}", status, response.url()),
    }
    Err(error)
}

/// Network failure, or the timeout message when the deadline aborted it
fn network_error(cause: &str, timed_out: bool) -> ApiError {
    if timed_out {
        log::error!("request aborted after {} ms", REQUEST_TIMEOUT_MS);
        ApiError::Network(format!("请求超时 ({} 秒)", REQUEST_TIMEOUT_MS / 1000))
    } else {
        log::error!("network error: {}", cause);
        ApiError::Network(cause.to_string())
    }
}

/// Abort controller armed to fire after [`REQUEST_TIMEOUT_MS`]; dropping
/// the deadline disarms it
struct Deadline {
    controller: Option<AbortController>,
    _timer: Option<Timeout>,
}

impl Deadline {
    fn arm() -> Self {
        let Ok(controller) = AbortController::new() else {
            log::warn!("AbortController unavailable, request has no timeout");
            return Self {
                controller: None,
                _timer: None,
            };
        };
        let on_expiry = controller.clone();
        let timer = Timeout::new(REQUEST_TIMEOUT_MS, move || on_expiry.abort());
        Self {
            controller: Some(controller),
            _timer: Some(timer),
        }
    }

    fn attach(&self, builder: RequestBuilder) -> RequestBuilder {
        let signal = self.controller.as_ref().map(|c| c.signal());
        builder.abort_signal(signal.as_ref())
    }

    fn expired(&self) -> bool {
        self.controller
            .as_ref()
            .map(|c| c.signal().aborted())
            .unwrap_or(false)
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let deadline = Deadline::arm();
    let response = deadline
        .attach(builder)
        .send()
        .await
        .map_err(|e| network_error(&e.to_string(), deadline.expired()))?;
    check(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let deadline = Deadline::arm();
    let request = deadline
        .attach(builder)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| network_error(&e.to_string(), deadline.expired()))?;
    check(response).await
}

async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let envelope = response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_result().map_err(ApiError::Rejected)
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", path);
    let response = send(with_auth(Request::get(&api_url(path)))).await?;
    unwrap_envelope(response).await
}

/// GET with `query` serialised into the query string
pub async fn get_with_query<T, Q>(path: &str, query: &Q) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let query_string =
        serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    let full_path = if query_string.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query_string)
    };
    get(&full_path).await
}

pub async fn post<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    log::debug!("POST {}", path);
    let response = send_json(with_auth(Request::post(&api_url(path))), body).await?;
    unwrap_envelope(response).await
}

/// DELETE; returns the backend's confirmation message
pub async fn delete(path: &str) -> Result<Option<String>, ApiError> {
    log::debug!("DELETE {}", path);
    let response = send(with_auth(Request::delete(&api_url(path)))).await?;
    let ack = response
        .json::<ApiAck>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    ack.into_result().map_err(ApiError::Rejected)
}
