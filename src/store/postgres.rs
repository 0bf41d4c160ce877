//! PostgreSQL store backend.
//!
//! Statements are sent as raw SQL with positional binds through diesel_async.
//! Reads wrap the select in `to_jsonb` so any table can be decoded into a
//! [`Row`] without a compile-time schema.

use async_trait::async_trait;
use diesel::QueryableByName;
use diesel::pg::Pg;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{Integer, Jsonb, Nullable, Text};
use diesel_async::RunQueryDsl;

use super::{Row, Statement, Store, StoreError, Value};
use crate::config::StoreConfig;
use crate::db::{AsyncDbPool, establish_async_connection_pool};

/// Store backed by a pooled PostgreSQL session.
///
/// Cloning is cheap since `AsyncDbPool` uses `Arc` internally.
#[derive(Clone)]
pub struct PgStore {
    pool: AsyncDbPool,
}

#[derive(QueryableByName)]
struct JsonRow {
    #[diesel(sql_type = Jsonb)]
    payload: serde_json::Value,
}

impl PgStore {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Builds the pool described by `config` and wraps it.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self::new(establish_async_connection_pool(config).await?))
    }
}

fn bind_params(
    statement: &Statement,
    sql: String,
    params: Vec<Value>,
) -> Result<BoxedSqlQuery<'static, Pg, SqlQuery>, StoreError> {
    if params.len() != statement.param_count() {
        return Err(StoreError::Statement(format!(
            "{} on {} expects {} parameters, got {}",
            if matches!(statement, Statement::Insert { .. }) { "insert" } else { "select" },
            statement.table().name,
            statement.param_count(),
            params.len()
        )));
    }

    Ok(params
        .into_iter()
        .fold(diesel::sql_query(sql).into_boxed::<Pg>(), |query, param| match param {
            Value::Text(text) => query.bind::<Text, _>(text),
            Value::Int(number) => query.bind::<Integer, _>(number),
            Value::Null => query.bind::<Nullable<Text>, _>(None::<String>),
        }))
}

fn json_select(statement: &Statement) -> String {
    format!(
        "SELECT to_jsonb(r) AS payload FROM ({}) AS r",
        statement.sql()
    )
}

#[async_trait]
impl Store for PgStore {
    async fn execute(&self, statement: &Statement, params: Vec<Value>) -> Result<(), StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        bind_params(statement, statement.sql(), params)?
            .execute(&mut conn)
            .await?;
        Ok(())
    }

    async fn query_row(
        &self,
        statement: &Statement,
        params: Vec<Value>,
    ) -> Result<Row, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let JsonRow { payload } = bind_params(statement, json_select(statement), params)?
            .get_result::<JsonRow>(&mut conn)
            .await?;
        Row::from_json(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TableSchema;

    #[test]
    fn test_bind_params_checks_arity() {
        let table = TableSchema::new("videos", &["id", "title"]);
        let insert = Statement::insert(table);
        let err = bind_params(&insert, insert.sql(), vec!["1".into()]).err().unwrap();
        assert_eq!(
            err,
            StoreError::Statement("insert on videos expects 2 parameters, got 1".to_string())
        );
        assert!(bind_params(&insert, insert.sql(), vec!["1".into(), "t".into()]).is_ok());
    }

    #[test]
    fn test_json_select_wraps_statement() {
        let table = TableSchema::new("videos", &["id", "title"]);
        let sql = json_select(&Statement::select_by_key(table, "title"));
        assert_eq!(
            sql,
            "SELECT to_jsonb(r) AS payload FROM \
             (SELECT id, title FROM videos WHERE title = $1 LIMIT 1) AS r"
        );
    }
}
