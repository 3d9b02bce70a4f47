pub mod auth_user;
pub mod company;
pub mod note;
pub mod project;
pub mod task;
pub mod team;
pub mod user;
pub mod wiki;

pub use auth_user::AuthUser;
pub use company::Company;
pub use note::Note;
pub use project::{Project, ProjectRow, ProjectStatus};
pub use task::{Task, TaskPriority, TaskStatus};
pub use team::Team;
pub use user::User;
pub use wiki::WikiEntry;
