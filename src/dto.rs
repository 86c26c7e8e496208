use utoipa::OpenApi;

pub mod err_resps;
mod todo;

pub use todo::*;

/// Collects the schemas and shared responses of the API's data transfer objects so they can be
/// merged into the OpenAPI document
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(TodoItem, NewTodo, TodoUpdate, crate::routing_utils::ExtraInfo),
        responses(
            err_resps::BasicError400Validation,
            err_resps::BasicError400Json,
            err_resps::BasicError404,
            err_resps::BasicError415,
            err_resps::BasicError500
        )
    )
)]
pub struct OpenApiSchemas;
