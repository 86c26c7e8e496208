use crate::domain;
use crate::domain::todo::{NewTodo, TodoItem, TodoUpdate};
use crate::external_connections::{ConnectionHandle, ExternalConnectivity};
use anyhow::{Context, Error};
use sqlx::{FromRow, query, query_as};

pub struct DbTodoReader;

#[derive(FromRow)]
struct TodoItemRow {
    id: i32,
    title: String,
    is_done: bool,
}

impl From<TodoItemRow> for domain::todo::TodoItem {
    fn from(value: TodoItemRow) -> Self {
        TodoItem {
            id: value.id,
            title: value.title,
            is_done: value.is_done,
        }
    }
}

impl domain::todo::driven_ports::TodoReader for DbTodoReader {
    async fn all(&self, ext_cxn: &mut impl ExternalConnectivity) -> Result<Vec<TodoItem>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todo_items: Vec<TodoItem> = query_as::<_, TodoItemRow>(
            "SELECT ti.id, ti.title, ti.is_done FROM todo_item ti ORDER BY ti.id DESC",
        )
        .fetch_all(cxn.borrow_connection())
        .await
        .context("trying to fetch all todo items")?
        .into_iter()
        .map(TodoItem::from)
        .collect();

        Ok(todo_items)
    }

    async fn by_id(
        &self,
        todo_id: i32,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<Option<TodoItem>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todo_item = query_as::<_, TodoItemRow>(
            "SELECT ti.id, ti.title, ti.is_done FROM todo_item ti WHERE ti.id = $1",
        )
        .bind(todo_id)
        .fetch_optional(cxn.borrow_connection())
        .await
        .context("trying to fetch a todo item by ID")?
        .map(TodoItem::from);

        Ok(todo_item)
    }
}

pub struct DbTodoWriter;

impl domain::todo::driven_ports::TodoWriter for DbTodoWriter {
    async fn create(
        &self,
        new_todo: &NewTodo,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<TodoItem, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let created = query_as::<_, TodoItemRow>(
            "INSERT INTO todo_item(title, is_done) VALUES ($1, $2) RETURNING id, title, is_done",
        )
        .bind(&new_todo.title)
        .bind(new_todo.is_done)
        .fetch_one(cxn.borrow_connection())
        .await
        .context("trying to insert a new todo item into the database")?;

        Ok(created.into())
    }

    async fn update(
        &self,
        todo_id: i32,
        update: &TodoUpdate,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<Option<TodoItem>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let updated = query_as::<_, TodoItemRow>(
            "UPDATE todo_item SET title = $1, is_done = $2 WHERE id = $3 RETURNING id, title, is_done",
        )
        .bind(&update.title)
        .bind(update.is_done)
        .bind(todo_id)
        .fetch_optional(cxn.borrow_connection())
        .await
        .context("trying to update a todo item in the database")?
        .map(TodoItem::from);

        Ok(updated)
    }

    async fn delete(
        &self,
        todo_id: i32,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<bool, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let delete_result = query("DELETE FROM todo_item WHERE id = $1")
            .bind(todo_id)
            .execute(cxn.borrow_connection())
            .await
            .context("trying to remove a todo item from the database")?;

        Ok(delete_result.rows_affected() > 0)
    }
}
