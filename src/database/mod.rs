pub mod manager;
pub mod models;
pub mod query_builder;
pub mod repository;
pub mod update;

pub use manager::{DatabaseError, DatabaseManager};
pub use query_builder::SortDirection;
pub use repository::Repository;
pub use update::UpdateBuilder;
