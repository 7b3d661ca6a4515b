/*
[INPUT]:  Request shapes, service config, raw response bodies
[OUTPUT]: Unsigned wire requests, typed results, structured service errors
[POS]:    Codec layer - awsJson1.1 boundary between shapes and transport
[UPDATE]: When the wire protocol or error body format changes
*/

use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ServiceConfig;
use crate::error::{ComprehendError, Result, ServiceError, ServiceErrorKind};
use crate::operation::{Operation, ensure_idempotency_token};

/// Content type of every request and response body
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// A transport-ready call description. Signing and sending are left to the
/// caller's HTTP stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    pub method: &'static str,
    pub url: Url,
    /// `X-Amz-Target` header value
    pub target: String,
    pub content_type: &'static str,
    pub body: String,
}

impl WireRequest {
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", self.content_type.to_string()),
            ("X-Amz-Target", self.target.clone()),
        ]
    }
}

/// Encode a request for its operation.
///
/// Operations that accept a `ClientRequestToken` get a fresh one when it is
/// absent; the generated token stays on `request`.
pub fn encode<O: Operation>(request: &mut O, config: &ServiceConfig) -> Result<WireRequest> {
    let url = config.resolve_endpoint()?;
    ensure_idempotency_token(request);
    let body = serde_json::to_string(request)?;

    debug!(operation = O::NAME, url = %url, bytes = body.len(), "encoded request");

    Ok(WireRequest {
        method: "POST",
        url,
        target: O::target(),
        content_type: CONTENT_TYPE,
        body,
    })
}

/// Decode a successful response body. Empty bodies decode as `{}`.
pub fn decode<O: Operation>(body: &[u8]) -> Result<O::Output> {
    debug!(operation = O::NAME, bytes = body.len(), "decoding response");

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"{}")?);
    }
    Ok(serde_json::from_slice(body)?)
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
    #[serde(rename = "Reason")]
    reason: Option<String>,
}

/// Exception name from a `__type` value such as
/// `com.amazonaws.comprehend#InvalidRequestException`.
fn exception_name(raw: &str) -> &str {
    let name = raw.rsplit_once('#').map_or(raw, |(_, name)| name);
    name.split_once(':').map_or(name, |(name, _)| name).trim()
}

fn kind_from_status(status: u16) -> ServiceErrorKind {
    if status >= 500 {
        ServiceErrorKind::InternalServer
    } else {
        ServiceErrorKind::Unknown(format!("HTTP {status}"))
    }
}

/// Decode a non-2xx response body into a service error.
pub fn decode_error(status: u16, body: &[u8]) -> ServiceError {
    let parsed = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(status, error = %err, "unreadable error body");
            return ServiceError {
                kind: kind_from_status(status),
                message: Some(String::from_utf8_lossy(body).trim().to_string())
                    .filter(|text| !text.is_empty()),
                reason: None,
                status,
            };
        }
    };

    let kind = match parsed.error_type.as_deref().map(exception_name) {
        Some(name) if !name.is_empty() => ServiceErrorKind::from_code(name),
        _ => {
            warn!(status, "error body without __type");
            kind_from_status(status)
        }
    };
    debug!(status, kind = %kind, "decoded service error");

    ServiceError {
        kind,
        message: parsed.message,
        reason: parsed.reason,
        status,
    }
}

/// Decode a response of any status: 2xx yields the output, anything else the
/// service error.
pub fn decode_result<O: Operation>(status: u16, body: &[u8]) -> Result<O::Output> {
    if (200..300).contains(&status) {
        decode::<O>(body)
    } else {
        Err(ComprehendError::Service(decode_error(status, body)))
    }
}
