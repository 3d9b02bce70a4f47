use sqlx::{postgres::PgRow, FromRow, PgPool};

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// SELECT over one table with integer equality filters and an ORDER BY.
/// Table and column names are validated identifiers, values are always bound.
pub struct QueryBuilder<T> {
    table_name: String,
    conditions: Vec<(String, i32)>,
    order: Vec<(String, SortDirection)>,
    limit: Option<i64>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> QueryBuilder<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(table_name: impl Into<String>) -> Result<Self, DatabaseError> {
        let table_name = table_name.into();
        validate_identifier(&table_name)?;
        Ok(Self {
            table_name,
            conditions: Vec::new(),
            order: Vec::new(),
            limit: None,
            _phantom: std::marker::PhantomData,
        })
    }

    pub fn where_eq(mut self, column: &str, value: i32) -> Result<Self, DatabaseError> {
        validate_identifier(column)?;
        self.conditions.push((column.to_string(), value));
        Ok(self)
    }

    pub fn order_by(mut self, column: &str, direction: SortDirection) -> Result<Self, DatabaseError> {
        validate_identifier(column)?;
        self.order.push((column.to_string(), direction));
        Ok(self)
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn to_sql(&self) -> String {
        let mut sql = format!("SELECT * FROM \"{}\"", self.table_name);

        if !self.conditions.is_empty() {
            let clauses: Vec<String> = self
                .conditions
                .iter()
                .enumerate()
                .map(|(i, (column, _))| format!("\"{}\" = ${}", column, i + 1))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if !self.order.is_empty() {
            let parts: Vec<String> = self
                .order
                .iter()
                .map(|(column, dir)| format!("\"{}\" {}", column, dir.to_sql()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&parts.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        sql
    }

    pub async fn select_all(self, pool: &PgPool) -> Result<Vec<T>, DatabaseError> {
        let sql = self.to_sql();
        let mut q = sqlx::query_as::<_, T>(&sql);
        for (_, value) in &self.conditions {
            q = q.bind(*value);
        }
        Ok(q.fetch_all(pool).await?)
    }

    pub async fn select_optional(self, pool: &PgPool) -> Result<Option<T>, DatabaseError> {
        let sql = self.limit(1).to_sql_with_params();
        let mut q = sqlx::query_as::<_, T>(&sql.0);
        for value in &sql.1 {
            q = q.bind(*value);
        }
        Ok(q.fetch_optional(pool).await?)
    }

    fn to_sql_with_params(self) -> (String, Vec<i32>) {
        let sql = self.to_sql();
        (sql, self.conditions.into_iter().map(|(_, v)| v).collect())
    }
}

/// Plain lowercase SQL identifiers only: `[a-z_][a-z0-9_]*`
pub fn validate_identifier(name: &str) -> Result<(), DatabaseError> {
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(DatabaseError::QueryError(format!("Invalid identifier: {}", name)))
    }
}
