//! OpenAPI descriptions of the error bodies produced by [crate::routing_utils]. These only
//! document responses; the bodies themselves are built in routing_utils.
#![allow(dead_code)]

use crate::routing_utils::ExtraInfo;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Submitted data was invalid",
    example = json!({ "error": "Title is required" })
)]
pub struct BasicError400Validation {
    error: String,
}

#[derive(ToResponse)]
#[response(
    description = "The request body was not readable JSON",
    example = json!({
        "error_code": "invalid_json",
        "error_description": "The passed request body contained malformed or unreadable JSON.",
        "extra_info": "Failed to parse the request body as JSON: EOF while parsing an object at line 4 column 0"
    })
)]
pub struct BasicError400Json {
    error_code: String,
    error_description: String,
    extra_info: Option<ExtraInfo>,
}

#[derive(ToResponse)]
#[response(
    description = "The request body was not declared as JSON",
    example = json!({
        "error_code": "unsupported_media_type",
        "error_description": "The request body must be sent with an application/json content type.",
        "extra_info": "Expected request with `Content-Type: application/json`"
    })
)]
pub struct BasicError415 {
    error_code: String,
    error_description: String,
    extra_info: Option<ExtraInfo>,
}

#[derive(ToResponse)]
#[response(
    description = "Entity could not be found",
    example = json!({
        "error_code": "not_found",
        "error_description": "The requested entity could not be found.",
        "extra_info": null
    })
)]
pub struct BasicError404 {
    error_code: String,
    error_description: String,
    extra_info: Option<ExtraInfo>,
}

#[derive(ToResponse)]
#[response(
    description = "Something unexpected went wrong inside the server",
    example = json!({
        "error_code": "internal_error",
        "error_description": "Could not access data to complete your request",
        "extra_info": null
    })
)]
pub struct BasicError500 {
    error_code: String,
    error_description: String,
    extra_info: Option<ExtraInfo>,
}
