use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_priority", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub project_id: i32,
    pub assigned_to: Option<i32>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_snake_case_wire_names() {
        assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), "in_progress");
        assert_eq!(serde_json::to_value(TaskPriority::Urgent).unwrap(), "urgent");
        let parsed: TaskStatus = serde_json::from_value(serde_json::json!("cancelled")).unwrap();
        assert_eq!(parsed, TaskStatus::Cancelled);
    }

    #[test]
    fn defaults_match_column_defaults() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_value::<TaskStatus>(serde_json::json!("blocked")).is_err());
    }
}
