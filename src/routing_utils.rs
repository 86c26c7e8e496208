use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_macros::{FromRequest, FromRequestParts};
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;
use validator::ValidationErrors;

#[cfg(test)]
use serde::Deserialize;

/// Contains diagnostic information about an API failure
#[derive(Serialize, Debug)]
#[cfg_attr(test, derive(Deserialize))]
pub struct BasicErrorResponse {
    pub error_code: String,
    pub error_description: String,
    pub extra_info: Option<ExtraInfo>,
}

#[derive(Serialize, Debug, ToSchema)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(untagged)]
pub enum ExtraInfo {
    Message(String),
}

/// Body returned when a client submits data that fails validation
#[derive(Serialize, Debug)]
#[cfg_attr(test, derive(Deserialize))]
pub struct ValidationFailureBody {
    pub error: String,
}

/// Generic fallback description used when a validation failure carries no message of its own
const INVALID_INPUT_DESCRIPTION: &str = "Submitted data was invalid.";

/// Response type that turns validation failures into a 400 whose body names the first problem found
pub struct ValidationErrorResponse(ValidationErrors);

impl IntoResponse for ValidationErrorResponse {
    fn into_response(self) -> Response {
        let message = self
            .0
            .field_errors()
            .into_values()
            .flatten()
            .find_map(|field_error| field_error.message.clone())
            .map(|message| message.into_owned())
            .unwrap_or_else(|| INVALID_INPUT_DESCRIPTION.to_owned());

        (
            StatusCode::BAD_REQUEST,
            axum::Json(ValidationFailureBody { error: message }),
        )
            .into_response()
    }
}

impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(value: ValidationErrors) -> Self {
        Self(value)
    }
}

/// Response type for a request that referenced an entity which does not exist
pub struct NotFoundResponse;

impl IntoResponse for NotFoundResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            axum::Json(BasicErrorResponse {
                error_code: "not_found".into(),
                error_description: "The requested entity could not be found.".into(),
                extra_info: None,
            }),
        )
            .into_response()
    }
}

/// Response type for unexpected failures, such as the database being unreachable.
/// The cause is logged but never shown to the client.
pub struct GenericErrorResponse(pub anyhow::Error);

impl IntoResponse for GenericErrorResponse {
    fn into_response(self) -> Response {
        error!("Request failed unexpectedly: {:#}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(BasicErrorResponse {
                error_code: "internal_error".into(),
                error_description: "Could not access data to complete your request".into(),
                extra_info: None,
            }),
        )
            .into_response()
    }
}

/// Wrapper for [axum::Json] which customizes the error response to use our
/// data structure for API errors
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonErrorResponse))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Response type representing JSON parse errors. A request that doesn't declare a JSON body
/// at all gets a 415, anything else the parser rejects gets a 400.
pub struct JsonErrorResponse {
    missing_content_type: bool,
    parse_problem: String,
}

impl From<JsonRejection> for JsonErrorResponse {
    fn from(value: JsonRejection) -> Self {
        JsonErrorResponse {
            missing_content_type: matches!(value, JsonRejection::MissingJsonContentType(_)),
            parse_problem: value.body_text(),
        }
    }
}

impl IntoResponse for JsonErrorResponse {
    fn into_response(self) -> Response {
        let (status, error_code, error_description) = if self.missing_content_type {
            (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_media_type",
                "The request body must be sent with an application/json content type.",
            )
        } else {
            (
                StatusCode::BAD_REQUEST,
                "invalid_json",
                "The passed request body contained malformed or unreadable JSON.",
            )
        };

        (
            status,
            axum::Json(BasicErrorResponse {
                error_code: error_code.into(),
                error_description: error_description.into(),
                extra_info: Some(ExtraInfo::Message(self.parse_problem)),
            }),
        )
            .into_response()
    }
}

/// Wrapper for [axum::extract::Path]. A path segment that doesn't parse into the expected type
/// means the URL doesn't name a resource that could exist, so it's answered with a 404.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(PathErrorResponse))]
pub struct Path<T>(pub T);

/// Response type representing a path parameter that could not be parsed
pub struct PathErrorResponse {
    parse_problem: String,
}

impl From<PathRejection> for PathErrorResponse {
    fn from(value: PathRejection) -> Self {
        PathErrorResponse {
            parse_problem: value.body_text(),
        }
    }
}

impl IntoResponse for PathErrorResponse {
    fn into_response(self) -> Response {
        debug!("Unmatched path parameter: {}", self.parse_problem);
        NotFoundResponse.into_response()
    }
}
