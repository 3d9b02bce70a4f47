use sqlx::PgPool;
use tracing::info;

use crate::database::models::Company;
use crate::database::Repository;
use crate::error::ApiError;
use crate::schema::CreateCompanyInput;

pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn repository(&self) -> Repository<Company> {
        Repository::new("companies", "Company", self.pool.clone())
    }

    pub async fn create(&self, input: CreateCompanyInput) -> Result<Company, ApiError> {
        let company = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (name, industry, website) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(input.name)
        .bind(input.industry)
        .bind(input.website)
        .fetch_one(&self.pool)
        .await?;

        info!("Created company {}", company.id);
        Ok(company)
    }

    pub async fn list(&self) -> Result<Vec<Company>, ApiError> {
        Ok(self.repository().select_all().await?)
    }
}
