// handlers/mod.rs - one module per resource, one function per RPC procedure
//
// Queries take their input from the query string, mutations from a JSON body
// (see `api::Input`). Procedures that record or filter by the caller also
// take a `CurrentUser`.

pub mod auth;
pub mod companies;
pub mod health;
pub mod notes;
pub mod projects;
pub mod tasks;
pub mod teams;
pub mod users;
pub mod wiki;
