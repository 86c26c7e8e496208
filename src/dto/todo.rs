use crate::domain;
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Message returned to clients when a todo item is created without a usable title
pub const TITLE_REQUIRED: &str = "Title is required";

/// DTO for a todo item returned on the API
#[derive(Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize, PartialEq, Eq, Debug))]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Buy milk")]
    pub title: String,
    #[schema(example = false)]
    pub is_done: bool,
}

impl From<domain::todo::TodoItem> for TodoItem {
    fn from(value: domain::todo::TodoItem) -> Self {
        TodoItem {
            id: value.id,
            title: value.title,
            is_done: value.is_done,
        }
    }
}

/// DTO for creating a new todo item via the API. A missing or null title is treated the same as
/// an empty one so it gets rejected by validation rather than by the JSON parser.
#[derive(Deserialize, Display, Validate, ToSchema)]
#[display("\"{title}\" (done: {is_done})")]
#[cfg_attr(test, derive(Serialize))]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom = "title_not_blank")]
    #[schema(example = "Buy milk")]
    pub title: String,
    #[serde(default)]
    #[schema(example = false)]
    pub is_done: bool,
}

impl From<NewTodo> for domain::todo::NewTodo {
    fn from(value: NewTodo) -> Self {
        domain::todo::NewTodo {
            title: value.title,
            is_done: value.is_done,
        }
    }
}

/// DTO for replacing the content of a todo item via the API. The title is not validated, and a
/// missing or null title is stored as an empty one.
#[derive(Debug, Deserialize, ToSchema)]
#[cfg_attr(test, derive(Serialize))]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(example = "Buy oat milk")]
    pub title: String,
    #[serde(default)]
    #[schema(example = true)]
    pub is_done: bool,
}

impl From<TodoUpdate> for domain::todo::TodoUpdate {
    fn from(value: TodoUpdate) -> Self {
        domain::todo::TodoUpdate {
            title: value.title,
            is_done: value.is_done,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn title_not_blank(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        let mut blank_title = ValidationError::new("required");
        blank_title.message = Some(Cow::Borrowed(TITLE_REQUIRED));
        return Err(blank_title);
    }

    Ok(())
}
