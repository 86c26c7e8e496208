use crate::dto;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Rust Todo API",
    description = "CRUD API for a single list of todo items"
))]
struct TodoApi;

/// Assembles the complete OpenAPI document from the [dto] schemas and the route definitions
/// in [api][crate::api]
pub fn api_docs() -> utoipa::openapi::OpenApi {
    let mut api_docs = TodoApi::openapi();
    api_docs.merge(dto::OpenApiSchemas::openapi());
    api_docs.merge(super::todo::TodoItemsApi::openapi());

    api_docs
}

/// Constructs the route on the API that renders the swagger UI and returns the OpenAPI schema.
pub fn build_documentation() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_docs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_todo_route() {
        let docs = api_docs();
        let paths = &docs.paths.paths;

        assert!(paths.contains_key("/api/todos"));
        assert!(paths.contains_key("/api/todos/{todo_id}"));
    }

    #[test]
    fn documents_error_responses() {
        let docs = api_docs();
        let components = docs.components.expect("components should be present");

        assert!(components.responses.contains_key("BasicError404"));
        assert!(components.responses.contains_key("BasicError415"));
        assert!(components.responses.contains_key("BasicError500"));
        assert!(components.schemas.contains_key("TodoItem"));
    }
}
