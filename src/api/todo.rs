use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::{TodoError, TodoPort};
use crate::external_connections::ExternalConnectivity;
use crate::persistence::db_todo_driven_ports::{DbTodoReader, DbTodoWriter};
use crate::routing_utils::{
    GenericErrorResponse, Json, NotFoundResponse, Path, ValidationErrorResponse,
};
use crate::{AppState, SharedData, domain, dto};
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::{self, HeaderName};
use axum::response::ErrorResponse;
use axum::routing::get;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use validator::Validate;

#[derive(OpenApi)]
#[openapi(paths(list_todos, get_todo, create_todo, update_todo, delete_todo))]
/// Defines the OpenAPI documentation for the todo item API
pub struct TodoItemsApi;
/// Constant used to group todo item endpoints in OpenAPI documentation
pub const TODO_API_GROUP: &str = "Todo Items";

/// Path the todo item routes are mounted under
pub const TODO_ROUTES_BASE: &str = "/api/todos";

/// Builds a router for all the todo item routes. Should be nested under [TODO_ROUTES_BASE].
pub fn todo_routes() -> Router<Arc<SharedData>> {
    Router::new()
        .route(
            "/",
            get(|State(app_state): AppState| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();

                list_todos(&mut ext_cxn, &domain::todo::TodoService, &DbTodoReader).await
            })
            .post(
                |State(app_state): AppState, Json(new_todo): Json<dto::NewTodo>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();

                    create_todo(new_todo, &mut ext_cxn, &domain::todo::TodoService, &DbTodoWriter)
                        .await
                },
            ),
        )
        .route(
            "/:todo_id",
            get(
                |State(app_state): AppState, Path(todo_id): Path<i32>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();

                    get_todo(todo_id, &mut ext_cxn, &domain::todo::TodoService, &DbTodoReader)
                        .await
                },
            )
            .put(
                |State(app_state): AppState,
                 Path(todo_id): Path<i32>,
                 Json(update): Json<dto::TodoUpdate>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();

                    update_todo(
                        todo_id,
                        update,
                        &mut ext_cxn,
                        &domain::todo::TodoService,
                        &DbTodoWriter,
                    )
                    .await
                },
            )
            .delete(
                |State(app_state): AppState, Path(todo_id): Path<i32>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();

                    delete_todo(todo_id, &mut ext_cxn, &domain::todo::TodoService, &DbTodoWriter)
                        .await
                },
            ),
        )
}

/// Maps a failure from the todo service onto the HTTP response the client should see
fn todo_error_response(todo_err: TodoError) -> ErrorResponse {
    match todo_err {
        TodoError::NotFound(todo_id) => {
            info!("Todo item {todo_id} does not exist");
            NotFoundResponse.into()
        }
        TodoError::PortError(cause) => GenericErrorResponse(cause).into(),
    }
}

#[utoipa::path(
    get,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    responses(
        (status = 200, description = "All todo items, newest first", body = [dto::TodoItem]),
        (status = 500, response = dto::err_resps::BasicError500)
    ),
)]
#[tracing::instrument(skip_all)]
/// Retrieves every todo item, newest first
async fn list_todos(
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_reader: &impl TodoReader,
) -> Result<Json<Vec<dto::TodoItem>>, ErrorResponse> {
    info!("Requested todo items");
    let todos = todo_service
        .list_todos(&mut *ext_cxn, todo_reader)
        .await
        .map_err(todo_error_response)?;

    Ok(Json(todos.into_iter().map(dto::TodoItem::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(
        ("todo_id" = i32, Path, description = "ID of the todo item")
    ),
    responses(
        (status = 200, description = "The requested todo item", body = dto::TodoItem),
        (status = 404, response = dto::err_resps::BasicError404),
        (status = 500, response = dto::err_resps::BasicError500)
    ),
)]
#[tracing::instrument(skip(ext_cxn, todo_service, todo_reader))]
/// Retrieves a single todo item
async fn get_todo(
    todo_id: i32,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_reader: &impl TodoReader,
) -> Result<Json<dto::TodoItem>, ErrorResponse> {
    info!("Get todo item {todo_id}");
    let todo = todo_service
        .todo_by_id(todo_id, &mut *ext_cxn, todo_reader)
        .await
        .map_err(todo_error_response)?;

    Ok(Json(todo.into()))
}

#[utoipa::path(
    post,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    request_body = dto::NewTodo,
    responses(
        (status = 201, description = "Todo item was created", body = dto::TodoItem,
            headers(("Location" = String, description = "Path of the new todo item"))),
        (status = 400, response = dto::err_resps::BasicError400Validation),
        (status = 415, response = dto::err_resps::BasicError415),
        (status = 500, response = dto::err_resps::BasicError500)
    ),
)]
#[tracing::instrument(skip_all)]
/// Creates a todo item. The title must contain something other than whitespace.
async fn create_todo(
    new_todo: dto::NewTodo,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_writer: &impl TodoWriter,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<dto::TodoItem>), ErrorResponse> {
    info!("Attempt to create todo item: {new_todo}");
    new_todo
        .validate()
        .map_err(ValidationErrorResponse::from)?;

    let domain_todo = domain::todo::NewTodo::from(new_todo);
    let created = todo_service
        .create_todo(&domain_todo, &mut *ext_cxn, todo_writer)
        .await
        .map_err(todo_error_response)?;

    let location = format!("{}/{}", TODO_ROUTES_BASE, created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created.into()),
    ))
}

#[utoipa::path(
    put,
    path = "/api/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(
        ("todo_id" = i32, Path, description = "ID of the todo item")
    ),
    request_body = dto::TodoUpdate,
    responses(
        (status = 200, description = "Todo item after the update", body = dto::TodoItem),
        (status = 400, response = dto::err_resps::BasicError400Json),
        (status = 404, response = dto::err_resps::BasicError404),
        (status = 415, response = dto::err_resps::BasicError415),
        (status = 500, response = dto::err_resps::BasicError500)
    ),
)]
#[tracing::instrument(skip(update, ext_cxn, todo_service, todo_writer))]
/// Replaces the title and completion state of a todo item
async fn update_todo(
    todo_id: i32,
    update: dto::TodoUpdate,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_writer: &impl TodoWriter,
) -> Result<Json<dto::TodoItem>, ErrorResponse> {
    info!("Updating todo item {todo_id}");
    let domain_update = domain::todo::TodoUpdate::from(update);

    let updated = todo_service
        .update_todo(todo_id, &domain_update, &mut *ext_cxn, todo_writer)
        .await
        .map_err(todo_error_response)?;

    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{todo_id}",
    tag = TODO_API_GROUP,
    params(
        ("todo_id" = i32, Path, description = "ID of the todo item")
    ),
    responses(
        (status = 204, description = "Todo item was deleted"),
        (status = 404, response = dto::err_resps::BasicError404),
        (status = 500, response = dto::err_resps::BasicError500)
    ),
)]
#[tracing::instrument(skip(ext_cxn, todo_service, todo_writer))]
/// Deletes a todo item
async fn delete_todo(
    todo_id: i32,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_writer: &impl TodoWriter,
) -> Result<StatusCode, ErrorResponse> {
    info!("Deleting todo item {todo_id}");
    todo_service
        .delete_todo(todo_id, &mut *ext_cxn, todo_writer)
        .await
        .map_err(todo_error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
