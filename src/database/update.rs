use sqlx::{postgres::PgRow, Encode, FromRow, PgPool, Postgres, Type};

use crate::database::manager::DatabaseError;
use crate::database::query_builder::validate_identifier;

/// `UPDATE <table> SET <only the assigned columns>, updated_at = NOW()
/// WHERE id = $n RETURNING *`.
///
/// Columns that are never assigned are never written. Zero matched rows is
/// reported as `NotFound` using the entity label given to [`UpdateBuilder::new`].
pub struct UpdateBuilder<'args> {
    entity: &'static str,
    builder: sqlx::QueryBuilder<'args, Postgres>,
    assigned: Vec<&'static str>,
}

impl<'args> UpdateBuilder<'args> {
    pub fn new(table_name: &'static str, entity: &'static str) -> Result<Self, DatabaseError> {
        validate_identifier(table_name)?;
        let builder = sqlx::QueryBuilder::new(format!("UPDATE \"{}\" SET ", table_name));
        Ok(Self {
            entity,
            builder,
            assigned: Vec::new(),
        })
    }

    pub fn set<V>(&mut self, column: &'static str, value: V) -> Result<&mut Self, DatabaseError>
    where
        V: 'args + Encode<'args, Postgres> + Send + Type<Postgres>,
    {
        validate_identifier(column)?;
        if self.assigned.contains(&column) {
            return Err(DatabaseError::QueryError(format!("Column assigned twice: {}", column)));
        }
        self.builder.push(format!("\"{}\" = ", column));
        self.builder.push_bind(value);
        self.builder.push(", ");
        self.assigned.push(column);
        Ok(self)
    }

    /// Assign only when the patch carries a value
    pub fn set_if<V>(&mut self, column: &'static str, value: Option<V>) -> Result<&mut Self, DatabaseError>
    where
        V: 'args + Encode<'args, Postgres> + Send + Type<Postgres>,
    {
        match value {
            Some(v) => self.set(column, v),
            None => Ok(self),
        }
    }

    pub fn assigned(&self) -> &[&'static str] {
        &self.assigned
    }

    fn finish(&mut self, id: i32) {
        self.builder.push("\"updated_at\" = NOW() WHERE \"id\" = ");
        self.builder.push_bind(id);
        self.builder.push(" RETURNING *");
    }

    pub fn sql(mut self, id: i32) -> String {
        self.finish(id);
        self.builder.sql().to_string()
    }

    pub async fn execute<T>(mut self, id: i32, pool: &PgPool) -> Result<T, DatabaseError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.finish(id);
        let entity = self.entity;
        self.builder
            .build_query_as::<T>()
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("{} with id {} not found", entity, id)))
    }
}
