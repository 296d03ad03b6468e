use std::fmt::{Display, Formatter};

use bytes::Bytes;
use http::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::AdyenError;

/// The raw result of a call to Adyen: status code plus the untouched body bytes.
///
/// Gateways turn this into typed responses with [`Response::json`] once
/// [`Response::error_for_status`] has let it through.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    body: Bytes,
}

/// The error object Adyen returns in the body of a failed backend call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub status: u16,
    pub error_code: String,
    pub message: String,
    pub error_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psp_reference: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.status, self.error_type, self.error_code, self.message
        )
    }
}

impl Response {
    pub fn new(status: StatusCode, body: Bytes) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The body as text. Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parses the vendor error object out of the body, if there is one.
    ///
    /// Only meaningful for 4xx/5xx responses; a successful response yields `None` even if its
    /// body happens to look like an error.
    pub fn api_error(&self) -> Option<ApiError> {
        if self.is_success() {
            return None;
        }
        serde_json::from_slice::<ApiError>(&self.body).ok()
    }

    /// Turns any non-2xx response into an error, preferring the structured Adyen error when the
    /// body carries one. The error keeps the status of the response itself.
    pub fn error_for_status(self) -> Result<Self, AdyenError> {
        if self.is_success() {
            return Ok(self);
        }
        match self.api_error() {
            Some(error) => Err(AdyenError::Api {
                status: self.status,
                error,
            }),
            None => Err(AdyenError::HttpStatus {
                status: self.status,
                body: self.text(),
            }),
        }
    }

    /// Deserializes the body. An empty body (e.g. `204 No Content`) is reported as
    /// [`AdyenError::EmptyBody`] rather than as a JSON syntax error.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AdyenError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Err(AdyenError::EmptyBody {
                status: self.status,
            });
        }
        serde_json::from_slice(&self.body).map_err(AdyenError::Deserialization)
    }
}

#[cfg(test)]
mod test {
    use bytes::Bytes;
    use http::StatusCode;
    use pretty_assertions::assert_eq;

    use super::{ApiError, Response};
    use crate::AdyenError;

    const VALIDATION_ERROR: &str = r#"{
        "status": 422,
        "errorCode": "14_003",
        "message": "Invalid amount specified",
        "errorType": "validation",
        "pspReference": "8515232733321252"
    }"#;

    fn response(code: u16, body: &'static str) -> Response {
        Response::new(
            StatusCode::from_u16(code).unwrap(),
            Bytes::from_static(body.as_bytes()),
        )
    }

    #[test]
    fn success_statuses_pass_through() {
        for code in [200u16, 201, 204] {
            let response = response(code, "{}");
            assert!(response.is_success());
            assert!(response.api_error().is_none());
            assert!(response.error_for_status().is_ok());
        }
    }

    #[test]
    fn non_2xx_statuses_are_failures() {
        for code in [301u16, 400, 401, 403, 404, 422, 500, 503] {
            let response = response(code, "nope");
            assert!(!response.is_success());
            match response.error_for_status() {
                Err(AdyenError::HttpStatus { status, body }) => {
                    assert_eq!(status.as_u16(), code);
                    assert_eq!(body, "nope");
                }
                other => panic!("expected HttpStatus for {code}, got {other:?}"),
            }
        }
    }

    #[test]
    fn vendor_error_fields_are_parsed() {
        let response = response(422, VALIDATION_ERROR);
        let expected = ApiError {
            status: 422,
            error_code: "14_003".into(),
            message: "Invalid amount specified".into(),
            error_type: "validation".into(),
            psp_reference: Some("8515232733321252".into()),
        };
        assert_eq!(response.api_error(), Some(expected.clone()));
        match response.error_for_status() {
            Err(AdyenError::Api { status, error }) => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(error, expected);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn error_status_is_reported() {
        let err = response(401, "HTTP Status 401").error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

        let err = response(422, VALIDATION_ERROR).error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(
            err.to_string(),
            "Adyen API error (HTTP 422 Unprocessable Entity): \
             [422] validation 14_003: Invalid amount specified"
        );
    }

    #[test]
    fn status_comes_from_the_response_not_the_body() {
        // A proxy answering 500 while passing through a 422 error body
        let err = response(500, VALIDATION_ERROR).error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        match err {
            AdyenError::Api { status, error } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(error.status, 422);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn json_body() {
        #[derive(serde::Deserialize)]
        struct Body {
            #[serde(rename = "pspReference")]
            psp_reference: String,
        }
        let response = response(200, r#"{"pspReference":"123"}"#);
        let body = response.json::<Body>().unwrap();
        assert_eq!(body.psp_reference, "123");
        assert!(matches!(
            response.json::<Vec<u8>>(),
            Err(AdyenError::Deserialization(_))
        ));
    }

    #[test]
    fn empty_body_is_reported_as_such() {
        for body in ["", " \n"] {
            match response(204, body).json::<serde_json::Value>() {
                Err(AdyenError::EmptyBody { status }) => assert_eq!(status, StatusCode::NO_CONTENT),
                other => panic!("expected EmptyBody, got {other:?}"),
            }
        }
    }
}
