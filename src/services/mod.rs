//! One service per resource. Each owns a pool handle and turns a validated
//! input into the SQL for that operation.

pub mod auth_service;
pub mod company_service;
pub mod note_service;
pub mod project_service;
pub mod task_service;
pub mod team_service;
pub mod user_service;
pub mod wiki_service;

pub use auth_service::AuthService;
pub use company_service::CompanyService;
pub use note_service::NoteService;
pub use project_service::ProjectService;
pub use task_service::TaskService;
pub use team_service::TeamService;
pub use user_service::UserService;
pub use wiki_service::WikiService;
