pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod internships;
pub mod state;
pub mod store;
pub mod users;
