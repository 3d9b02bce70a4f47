use sqlx::{postgres::PgRow, FromRow, PgPool};

use crate::database::manager::DatabaseError;
use crate::database::query_builder::{QueryBuilder, SortDirection};

/// Read access to one table: list, list-by-equality, fetch-by-id
pub struct Repository<T> {
    table_name: &'static str,
    entity: &'static str,
    pool: PgPool,
    order: (&'static str, SortDirection),
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(table_name: &'static str, entity: &'static str, pool: PgPool) -> Self {
        Self {
            table_name,
            entity,
            pool,
            order: ("id", SortDirection::Asc),
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn ordered_by(mut self, column: &'static str, direction: SortDirection) -> Self {
        self.order = (column, direction);
        self
    }

    fn query(&self) -> Result<QueryBuilder<T>, DatabaseError> {
        let (column, direction) = self.order;
        let query = QueryBuilder::<T>::new(self.table_name)?.order_by(column, direction)?;
        // Stable tie-break for non-id orderings
        if column != "id" {
            return query.order_by("id", SortDirection::Asc);
        }
        Ok(query)
    }

    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        self.query()?.select_all(&self.pool).await
    }

    pub async fn select_where(&self, column: &str, value: i32) -> Result<Vec<T>, DatabaseError> {
        self.query()?.where_eq(column, value)?.select_all(&self.pool).await
    }

    pub async fn select_one(&self, id: i32) -> Result<Option<T>, DatabaseError> {
        QueryBuilder::<T>::new(self.table_name)?
            .where_eq("id", id)?
            .select_optional(&self.pool)
            .await
    }

    pub async fn select_404(&self, id: i32) -> Result<T, DatabaseError> {
        self.select_one(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("{} with id {} not found", self.entity, id)))
    }
}
