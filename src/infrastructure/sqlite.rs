//! SQLite storage for todo items.
//!
//! Every user-supplied value reaches SQLite as a bound parameter. The only
//! text spliced into statements is a column name taken from a
//! [`FilterClause`] or [`UpdateClause`] variant.
//!
//! # Table Schema
//!
//! ```sql
//! CREATE TABLE todo (
//!     id INTEGER PRIMARY KEY,
//!     todo TEXT,
//!     priority TEXT,
//!     status TEXT,
//!     category TEXT,
//!     due_date TEXT
//! );
//! ```

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use super::RepositoryError;
use crate::domain::{DueDate, FilterClause, NewTodo, TodoItem, UpdateClause};

const SELECT_TODOS: &str =
    "SELECT id, todo, priority, status, category, due_date AS dueDate FROM todo";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS todo (
    id INTEGER PRIMARY KEY,
    todo TEXT,
    priority TEXT,
    status TEXT,
    category TEXT,
    due_date TEXT
)";

// =============================================================================
// SqliteTodoRepository
// =============================================================================

/// SQLite-backed todo storage over a single shared connection.
///
/// Cloning is cheap: clones share the same underlying pool.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens `database_url`, creating the database file when missing.
    ///
    /// The pool holds exactly one connection that is never recycled, so an
    /// in-memory database (`sqlite::memory:`) lives as long as the repository.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DatabaseError`] if the URL is malformed or
    /// the database cannot be opened.
    pub async fn connect(database_url: &str) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `todo` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DatabaseError`] if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Closes the underlying connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

// =============================================================================
// Reads
// =============================================================================

impl SqliteTodoRepository {
    /// Lists every item satisfying `clause`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the query fails or a row is corrupt.
    pub async fn list(&self, clause: &FilterClause) -> Result<Vec<TodoItem>, RepositoryError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_TODOS);
        builder.push(" WHERE ");

        if let FilterClause::Search(term) = clause {
            builder.push("todo LIKE ").push_bind(format!("%{term}%"));
        } else {
            let mut conditions = builder.separated(" AND ");
            for (column, value) in clause.equalities() {
                conditions.push(column);
                conditions.push_unseparated(" = ");
                conditions.push_bind_unseparated(value.to_string());
            }
        }

        let rows = builder.build().fetch_all(&self.pool).await?;
        rows.iter().map(decode_todo).collect()
    }

    /// Fetches a single item.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the query fails or the row is corrupt.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, RepositoryError> {
        let row = sqlx::query(&format!("{SELECT_TODOS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(decode_todo).transpose()
    }

    /// Lists items whose stored due date contains `date` in `yyyy-MM-dd` form.
    ///
    /// This is a substring match, not date equality: a stored value such as
    /// `2023-01-15 08:00` is returned for `2023-01-15`.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the query fails or a row is corrupt.
    pub async fn list_due_on(&self, date: &DueDate) -> Result<Vec<TodoItem>, RepositoryError> {
        let rows = sqlx::query(&format!("{SELECT_TODOS} WHERE due_date LIKE ?"))
            .bind(format!("%{date}%"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(decode_todo).collect()
    }
}

// =============================================================================
// Writes
// =============================================================================

impl SqliteTodoRepository {
    /// Inserts a new item. Identifier uniqueness is left to the table.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DatabaseError`] if the insert fails, for
    /// instance on a duplicate identifier.
    pub async fn insert(&self, todo: &NewTodo) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO todo (id, todo, priority, status, category, due_date)
            VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(todo.id)
        .bind(&todo.text)
        .bind(todo.priority.as_str())
        .bind(todo.status.as_str())
        .bind(todo.category.as_str())
        .bind(todo.due_date.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Applies a single-column update to the item with `id`.
    ///
    /// Updating a missing identifier affects no rows and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DatabaseError`] if the statement fails.
    pub async fn update(&self, id: i64, clause: &UpdateClause) -> Result<(), RepositoryError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE todo SET ");
        builder
            .push(clause.column())
            .push(" = ")
            .push_bind(clause.value())
            .push(" WHERE id = ")
            .push_bind(id);

        builder.build().execute(&self.pool).await?;
        Ok(())
    }

    /// Deletes the item with `id`, whether or not it exists.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DatabaseError`] if the statement fails.
    pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Row Decoding
// =============================================================================

fn decode_todo(row: &SqliteRow) -> Result<TodoItem, RepositoryError> {
    let id: i64 = row.try_get("id")?;
    let corrupt = |source| RepositoryError::CorruptRow { id, source };

    let priority: String = row.try_get("priority")?;
    let status: String = row.try_get("status")?;
    let category: String = row.try_get("category")?;

    Ok(TodoItem {
        id,
        text: row.try_get("todo")?,
        priority: priority.parse().map_err(corrupt)?,
        status: status.parse().map_err(corrupt)?,
        category: category.parse().map_err(corrupt)?,
        due_date: row.try_get("dueDate")?,
    })
}

// =============================================================================
// Tests
// =============================================================================
