//! Store mapping for each entity.

use crate::models::{Entity, User, Video};
use crate::store::{Row, Statement, StoreError, TableSchema, Value};

/// An [`Entity`] that knows how it is laid out in the store.
pub trait Record: Entity {
    const TABLE: TableSchema;

    /// Column matched against the lookup key.
    const KEY_COLUMN: &'static str;

    /// Field values in `TABLE.columns` order.
    fn to_params(&self) -> Vec<Value>;

    fn from_row(row: &Row) -> Result<Self, StoreError>;

    fn select_statement() -> Statement {
        Statement::select_by_key(Self::TABLE, Self::KEY_COLUMN)
    }

    fn insert_statement() -> Statement {
        Statement::insert(Self::TABLE)
    }
}

impl Record for User {
    const TABLE: TableSchema = TableSchema::new(
        "users",
        &["id", "first_name", "last_name", "full_name", "age", "email"],
    );
    const KEY_COLUMN: &'static str = "id";

    fn to_params(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.first_name.clone().into(),
            self.last_name.clone().into(),
            self.full_name.clone().into(),
            self.age.into(),
            self.email_id.clone().into(),
        ]
    }

    fn from_row(row: &Row) -> Result<Self, StoreError> {
        Ok(User {
            id: row.text("id")?,
            first_name: row.text("first_name")?,
            last_name: row.text("last_name")?,
            full_name: row.text("full_name")?,
            age: row.int("age")?,
            email_id: row.text("email")?,
        })
    }
}

impl Record for Video {
    const TABLE: TableSchema = TableSchema::new(
        "videos",
        &["id", "title", "description", "genre", "language", "storage_link"],
    );
    const KEY_COLUMN: &'static str = "title";

    fn to_params(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.title.clone().into(),
            self.description.clone().into(),
            self.genre.clone().into(),
            self.language.clone().into(),
            self.storage_link.clone().into(),
        ]
    }

    fn from_row(row: &Row) -> Result<Self, StoreError> {
        Ok(Video {
            id: row.text("id")?,
            title: row.text("title")?,
            description: row.text("description")?,
            genre: row.text("genre")?,
            language: row.text("language")?,
            storage_link: row.text("storage_link")?,
        })
    }
}
