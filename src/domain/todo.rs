use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::TodoError;
use crate::external_connections::ExternalConnectivity;
use anyhow::Context;
use tracing::info;

/// A single item on the todo list
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TodoItem {
    pub id: i32,
    pub title: String,
    pub is_done: bool,
}

/// Data needed to store a new todo item. The ID is assigned by storage.
#[derive(PartialEq, Eq, Debug)]
#[cfg_attr(test, derive(Clone))]
pub struct NewTodo {
    pub title: String,
    pub is_done: bool,
}

/// Replacement content for an existing todo item. Both fields are always overwritten.
#[derive(PartialEq, Eq, Debug)]
#[cfg_attr(test, derive(Clone))]
pub struct TodoUpdate {
    pub title: String,
    pub is_done: bool,
}

pub mod driven_ports {
    use super::*;

    pub trait TodoReader {
        /// Every stored item, newest (highest ID) first
        async fn all(
            &self,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<Vec<TodoItem>, anyhow::Error>;
        async fn by_id(
            &self,
            todo_id: i32,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<Option<TodoItem>, anyhow::Error>;
    }

    pub trait TodoWriter {
        async fn create(
            &self,
            new_todo: &NewTodo,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<TodoItem, anyhow::Error>;

        /// Overwrites the item's content, returning [None] if the item does not exist
        async fn update(
            &self,
            todo_id: i32,
            update: &TodoUpdate,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<Option<TodoItem>, anyhow::Error>;

        /// Removes the item, returning false if there was nothing to remove
        async fn delete(
            &self,
            todo_id: i32,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<bool, anyhow::Error>;
    }
}

pub mod driving_ports {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum TodoError {
        #[error("todo item {0} does not exist")]
        NotFound(i32),
        #[error(transparent)]
        PortError(#[from] anyhow::Error),
    }

    #[cfg(test)]
    #[allow(clippy::items_after_test_module)]
    mod todo_error_clone {
        use super::TodoError;
        use anyhow::anyhow;

        impl Clone for TodoError {
            fn clone(&self) -> Self {
                match self {
                    Self::NotFound(todo_id) => Self::NotFound(*todo_id),
                    Self::PortError(err) => Self::PortError(anyhow!(format!("{}", err))),
                }
            }
        }
    }

    pub trait TodoPort {
        async fn list_todos(
            &self,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
        ) -> Result<Vec<TodoItem>, TodoError>;
        async fn todo_by_id(
            &self,
            todo_id: i32,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
        ) -> Result<TodoItem, TodoError>;
        async fn create_todo(
            &self,
            new_todo: &NewTodo,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<TodoItem, TodoError>;
        async fn update_todo(
            &self,
            todo_id: i32,
            update: &TodoUpdate,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<TodoItem, TodoError>;
        async fn delete_todo(
            &self,
            todo_id: i32,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<(), TodoError>;
    }
}

pub struct TodoService;

impl driving_ports::TodoPort for TodoService {
    #[tracing::instrument(skip_all)]
    async fn list_todos(
        &self,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<Vec<TodoItem>, TodoError> {
        let todos = todo_read
            .all(&mut *ext_cxn)
            .await
            .context("listing todo items")?;

        Ok(todos)
    }

    #[tracing::instrument(skip(self, ext_cxn, todo_read))]
    async fn todo_by_id(
        &self,
        todo_id: i32,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<TodoItem, TodoError> {
        todo_read
            .by_id(todo_id, &mut *ext_cxn)
            .await
            .context("fetching a todo item")?
            .ok_or(TodoError::NotFound(todo_id))
    }

    #[tracing::instrument(skip_all)]
    async fn create_todo(
        &self,
        new_todo: &NewTodo,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<TodoItem, TodoError> {
        let created = todo_write
            .create(new_todo, &mut *ext_cxn)
            .await
            .context("creating a todo item")?;
        info!(todo_id = created.id, "Created todo item");

        Ok(created)
    }

    #[tracing::instrument(skip(self, update, ext_cxn, todo_write))]
    async fn update_todo(
        &self,
        todo_id: i32,
        update: &TodoUpdate,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<TodoItem, TodoError> {
        todo_write
            .update(todo_id, update, &mut *ext_cxn)
            .await
            .context("updating a todo item")?
            .ok_or(TodoError::NotFound(todo_id))
    }

    #[tracing::instrument(skip(self, ext_cxn, todo_write))]
    async fn delete_todo(
        &self,
        todo_id: i32,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<(), TodoError> {
        let removed = todo_write
            .delete(todo_id, &mut *ext_cxn)
            .await
            .context("deleting a todo item")?;

        if removed {
            Ok(())
        } else {
            Err(TodoError::NotFound(todo_id))
        }
    }
}
