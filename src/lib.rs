pub mod config;
pub mod dashboard;
pub mod error;
pub mod github;
pub mod models;
pub mod queries;
pub mod types;
pub mod view;
