//! JSON 1.1 request encoding and response decoding.
//!
//! Requests are `POST /` with the operation named in `X-Amz-Target` and the
//! request shape as the JSON body. Error responses carry the exception code
//! in `__type` (or the `x-amzn-ErrorType` header) next to a message.

use std::collections::BTreeMap;

use dms_model::ServiceError;
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::operation::Operation;

pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
pub const TARGET_HEADER: &str = "X-Amz-Target";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const INVOCATION_ID_HEADER: &str = "amz-sdk-invocation-id";
pub const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";
pub const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";

/// Code used when neither the body nor the headers name the error.
pub const UNKNOWN_ERROR_CODE: &str = "UnknownError";

/// An encoded request, ready for a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    /// Base URL of the service; set by the client from its configuration.
    pub endpoint: Option<String>,
    pub method: &'static str,
    pub path: &'static str,
    pub target: String,
    pub invocation_id: Uuid,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl WireRequest {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(self.headers.iter(), name)
    }

    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// A raw response as returned by a transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl WireResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        WireResponse {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// A response whose body is `value` rendered as JSON.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        WireResponse::new(status, value.to_string())
            .with_header(CONTENT_TYPE_HEADER, CONTENT_TYPE)
    }

    /// A service error response in the JSON 1.1 form.
    pub fn service_error(status: u16, code: &str, message: &str) -> Self {
        WireResponse::json(
            status,
            &serde_json::json!({ "__type": code, "message": message }),
        )
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Case-insensitive header lookup; the first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(self.headers.iter().map(|(k, v)| (k, v)), name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn find_header<'a>(
    mut headers: impl Iterator<Item = (&'a String, &'a String)>,
    name: &str,
) -> Option<&'a str> {
    headers
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Encode `input` as a request for `Op`.
///
/// Each call gets a fresh invocation id.
pub fn encode_request<Op: Operation>(input: &Op::Input) -> Result<WireRequest> {
    let body = serde_json::to_vec(input).map_err(|e| ClientError::Serialize {
        operation: Op::NAME,
        message: e.to_string(),
    })?;
    let target = Op::target();
    let invocation_id = Uuid::new_v4();

    let mut headers = BTreeMap::new();
    headers.insert(TARGET_HEADER.to_string(), target.clone());
    headers.insert(CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE.to_string());
    headers.insert(INVOCATION_ID_HEADER.to_string(), invocation_id.to_string());

    Ok(WireRequest {
        endpoint: None,
        method: "POST",
        path: "/",
        target,
        invocation_id,
        headers,
        body,
    })
}

/// Decode a response to `Op`.
///
/// 2xx bodies parse as `Op::Output` (an empty body reads as `{}`). Anything
/// else becomes [`ClientError::Service`].
pub fn decode_response<Op: Operation>(response: WireResponse) -> Result<Op::Output> {
    if !response.is_success() {
        return Err(decode_error(&response));
    }

    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(|e| ClientError::Deserialize {
        operation: Op::NAME,
        message: e.to_string(),
    })
}

/// Code and message of an error body, each read on its own so that an odd
/// member never hides the other.
fn error_body_fields(body: &[u8]) -> (Option<String>, Option<String>) {
    let Ok(serde_json::Value::Object(members)) = serde_json::from_slice(body) else {
        return (None, None);
    };
    let string_member = |key: &str| {
        members
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    };

    let code = string_member("__type").filter(|c| !c.trim().is_empty());
    let message = string_member("message").or_else(|| string_member("Message"));
    (code, message)
}

/// Classify an error response.
///
/// The code comes from the body's `__type`, then the `x-amzn-ErrorType`
/// header. A body that is not a JSON object is treated as carrying neither
/// code nor message.
pub fn decode_error(response: &WireResponse) -> ClientError {
    let (body_code, message) = error_body_fields(&response.body);

    let code = body_code
        .as_deref()
        .or_else(|| response.header(ERROR_TYPE_HEADER))
        .unwrap_or(UNKNOWN_ERROR_CODE);

    ClientError::Service {
        error: ServiceError::from_code(code, message.unwrap_or_default()),
        status: response.status,
        request_id: response.header(REQUEST_ID_HEADER).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{DeleteReplicationSubnetGroup, DescribeEndpoints, TestConnection};
    use dms_model::{DescribeEndpointsRequest, Filter, TestConnectionRequest};

    #[test]
    fn test_encode_sets_protocol_headers() {
        let input = TestConnectionRequest::default()
            .replication_instance_arn("arn:ri")
            .endpoint_arn("arn:ep");
        let request = encode_request::<TestConnection>(&input).unwrap();

        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/");
        assert_eq!(request.target, "AmazonDMSv20160101.TestConnection");
        assert_eq!(
            request.header("x-amz-target"),
            Some("AmazonDMSv20160101.TestConnection")
        );
        assert_eq!(request.header("content-type"), Some(CONTENT_TYPE));
        assert_eq!(
            request.header(INVOCATION_ID_HEADER),
            Some(request.invocation_id.to_string().as_str())
        );
        assert_eq!(
            request.body_str(),
            Some(r#"{"ReplicationInstanceArn":"arn:ri","EndpointArn":"arn:ep"}"#)
        );
    }

    #[test]
    fn test_invocation_ids_are_fresh() {
        let input = DescribeEndpointsRequest::default();
        let a = encode_request::<DescribeEndpoints>(&input).unwrap();
        let b = encode_request::<DescribeEndpoints>(&input).unwrap();
        assert_ne!(a.invocation_id, b.invocation_id);
    }

    #[test]
    fn test_encode_nested_filters() {
        let input = DescribeEndpointsRequest::default()
            .filters(vec![Filter::new("engine-name", ["mysql", "postgres"])]);
        let request = encode_request::<DescribeEndpoints>(&input).unwrap();
        assert_eq!(
            request.body_str(),
            Some(r#"{"Filters":[{"Name":"engine-name","Values":["mysql","postgres"]}]}"#)
        );
    }

    #[test]
    fn test_decode_empty_success_body() {
        let out =
            decode_response::<DeleteReplicationSubnetGroup>(WireResponse::new(200, "")).unwrap();
        assert_eq!(out, Default::default());
    }

    #[test]
    fn test_decode_bad_success_body() {
        let err = decode_response::<DescribeEndpoints>(WireResponse::new(200, "<html>"))
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Deserialize {
                operation: "DescribeEndpoints",
                ..
            }
        ));
    }

    #[test]
    fn test_decode_error_from_body() {
        let response = WireResponse::service_error(400, "ResourceNotFoundFault", "gone")
            .with_header(REQUEST_ID_HEADER, "req-9");
        let err = decode_error(&response);

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.request_id(), Some("req-9"));
        assert_eq!(
            err.service_error(),
            Some(&ServiceError::ResourceNotFound {
                message: "gone".to_string()
            })
        );
    }

    #[test]
    fn test_decode_error_capitalized_message_and_namespaced_code() {
        let response = WireResponse::new(
            400,
            r#"{"__type":"com.amazonaws.dms#KMSThrottlingFault","Message":"slow down"}"#,
        );
        let err = decode_error(&response);
        assert_eq!(
            err.service_error(),
            Some(&ServiceError::KmsThrottling {
                message: "slow down".to_string()
            })
        );
    }

    #[test]
    fn test_decode_error_falls_back_to_header() {
        let response = WireResponse::new(400, r#"{"message":"busy"}"#)
            .with_header("X-Amzn-ErrorType", "InvalidResourceStateFault:http://internal/");
        let err = decode_error(&response);
        assert_eq!(
            err.service_error().map(ServiceError::code),
            Some("InvalidResourceStateFault")
        );
        assert_eq!(err.service_error().map(ServiceError::message), Some("busy"));
    }

    #[test]
    fn test_decode_error_keeps_code_with_both_message_spellings() {
        let response = WireResponse::new(
            400,
            r#"{"__type":"ResourceNotFoundFault","message":"gone","Message":"also gone"}"#,
        );
        let err = decode_error(&response);
        assert_eq!(
            err.service_error(),
            Some(&ServiceError::ResourceNotFound {
                message: "gone".to_string()
            })
        );
    }

    #[test]
    fn test_decode_error_keeps_code_when_message_is_not_a_string() {
        let response = WireResponse::new(
            400,
            r#"{"__type":"StorageQuotaExceededFault","message":{"detail":"full"}}"#,
        );
        let err = decode_error(&response);
        assert_eq!(
            err.service_error(),
            Some(&ServiceError::StorageQuotaExceeded {
                message: String::new()
            })
        );
    }

    #[test]
    fn test_decode_error_non_string_code_falls_back_to_header() {
        let response = WireResponse::new(400, r#"{"__type":42,"Message":"odd"}"#)
            .with_header(ERROR_TYPE_HEADER, "AccessDeniedFault");
        let err = decode_error(&response);
        assert_eq!(
            err.service_error(),
            Some(&ServiceError::AccessDenied {
                message: "odd".to_string()
            })
        );
    }

    #[test]
    fn test_decode_error_without_any_code() {
        let err = decode_error(&WireResponse::new(503, "Service Unavailable"));
        assert_eq!(err.status(), Some(503));
        assert_eq!(
            err.service_error(),
            Some(&ServiceError::Unhandled {
                code: UNKNOWN_ERROR_CODE.to_string(),
                message: String::new(),
            })
        );
    }

    #[test]
    fn test_non_success_status_wins_over_body() {
        let response = WireResponse::json(500, &serde_json::json!({ "Endpoints": [] }));
        let err = decode_response::<DescribeEndpoints>(response).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
