//! Input shapes for every RPC procedure and their validation rules.

pub mod validate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::format::{deserialize_optional_datetime, deserialize_patch, deserialize_patch_datetime};
use crate::database::models::{ProjectStatus, TaskPriority, TaskStatus, User};
use crate::error::ApiError;

pub use validate::{Validate, Validator};

// Auth

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Validate for SignupInput {
    fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .email("email", &self.email)
            .min_len("password", &self.password, 6)
            .non_empty("first_name", &self.first_name)
            .non_empty("last_name", &self.last_name)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl Validate for LoginInput {
    fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .email("email", &self.email)
            .min_len("password", &self.password, 1)
            .finish()
    }
}

/// Returned by signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

// Companies, teams, users

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompanyInput {
    pub name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
}

impl Validate for CreateCompanyInput {
    fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .non_empty("name", &self.name)
            .url("website", self.website.as_deref())
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamInput {
    pub name: String,
    pub description: Option<String>,
}

impl Validate for CreateTeamInput {
    fn validate(&self) -> Result<(), ApiError> {
        Validator::new().non_empty("name", &self.name).finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub team_id: Option<i32>,
}

impl Validate for CreateUserInput {
    fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .email("email", &self.email)
            .non_empty("first_name", &self.first_name)
            .non_empty("last_name", &self.last_name)
            .finish()
    }
}

// Projects

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    pub estimated_value: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub end_date: Option<DateTime<Utc>>,
    pub company_id: i32,
}

impl Validate for CreateProjectInput {
    fn validate(&self) -> Result<(), ApiError> {
        let ordered = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => end >= start,
            _ => true,
        };
        Validator::new()
            .non_empty("name", &self.name)
            .positive_money("estimated_value", self.estimated_value)
            .check("end_date", ordered, "must not be before start_date")
            .finish()
    }
}

/// Absent fields are left untouched; `null` clears a nullable column
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectInput {
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub estimated_value: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_patch_datetime")]
    pub start_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "deserialize_patch_datetime")]
    pub end_date: Option<Option<DateTime<Utc>>>,
    #[serde(default)]
    pub company_id: Option<i32>,
}

impl Validate for UpdateProjectInput {
    fn validate(&self) -> Result<(), ApiError> {
        let mut v = Validator::new();
        if let Some(name) = &self.name {
            v.non_empty("name", name);
        }
        v.positive_money("estimated_value", self.estimated_value.flatten());
        // Only a patch carrying both dates can be checked without a read
        if let (Some(Some(start)), Some(Some(end))) = (self.start_date, self.end_date) {
            v.check("end_date", end >= start, "must not be before start_date");
        }
        v.finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetProjectInput {
    pub id: i32,
}

impl Validate for GetProjectInput {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Input of every per-project listing (wiki history, tasks, notes)
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectIdInput {
    pub project_id: i32,
}

impl Validate for ProjectIdInput {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

pub type GetProjectWikiHistoryInput = ProjectIdInput;
pub type GetProjectTasksInput = ProjectIdInput;
pub type GetProjectNotesInput = ProjectIdInput;

// Wiki

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectWikiInput {
    pub project_id: i32,
    pub title: String,
    pub content: String,
}

impl Validate for CreateProjectWikiInput {
    fn validate(&self) -> Result<(), ApiError> {
        Validator::new().non_empty("title", &self.title).finish()
    }
}

// Tasks

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub due_date: Option<DateTime<Utc>>,
    pub project_id: i32,
    pub assigned_to: Option<i32>,
}

impl Validate for CreateTaskInput {
    fn validate(&self) -> Result<(), ApiError> {
        Validator::new().non_empty("title", &self.title).finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskInput {
    pub id: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "deserialize_patch_datetime")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "deserialize_patch")]
    pub assigned_to: Option<Option<i32>>,
}

impl Validate for UpdateTaskInput {
    fn validate(&self) -> Result<(), ApiError> {
        let mut v = Validator::new();
        if let Some(title) = &self.title {
            v.non_empty("title", title);
        }
        v.finish()
    }
}

// Notes

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteInput {
    pub content: String,
    #[serde(default)]
    pub is_private: bool,
    pub project_id: i32,
}

impl Validate for CreateNoteInput {
    fn validate(&self) -> Result<(), ApiError> {
        Validator::new().non_empty("content", &self.content).finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNoteInput {
    pub id: i32,
    pub content: String,
}

impl Validate for UpdateNoteInput {
    fn validate(&self) -> Result<(), ApiError> {
        Validator::new().non_empty("content", &self.content).finish()
    }
}
