use sqlx::PgPool;
use tracing::info;

use crate::database::models::Task;
use crate::database::{Repository, UpdateBuilder};
use crate::error::ApiError;
use crate::schema::{CreateTaskInput, UpdateTaskInput};

pub struct TaskService {
    pool: PgPool,
}

impl TaskService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: CreateTaskInput, created_by: i32) -> Result<Task, ApiError> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks
                 (title, description, status, priority, due_date, project_id, assigned_to, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(input.title)
        .bind(input.description)
        .bind(input.status)
        .bind(input.priority)
        .bind(input.due_date)
        .bind(input.project_id)
        .bind(input.assigned_to)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        info!("User {} created task {} in project {}", created_by, task.id, task.project_id);
        Ok(task)
    }

    pub async fn list_for_project(&self, project_id: i32) -> Result<Vec<Task>, ApiError> {
        let tasks = Repository::<Task>::new("tasks", "Task", self.pool.clone())
            .select_where("project_id", project_id)
            .await?;
        Ok(tasks)
    }

    pub async fn update(&self, input: UpdateTaskInput) -> Result<Task, ApiError> {
        let mut update = UpdateBuilder::new("tasks", "Task")?;
        update
            .set_if("title", input.title)?
            .set_if("description", input.description)?
            .set_if("status", input.status)?
            .set_if("priority", input.priority)?
            .set_if("due_date", input.due_date)?
            .set_if("assigned_to", input.assigned_to)?;

        let task: Task = update.execute(input.id, &self.pool).await?;
        info!("Updated task {}", task.id);
        Ok(task)
    }
}
