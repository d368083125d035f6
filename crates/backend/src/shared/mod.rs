pub mod admin_descriptor;
pub mod config;
pub mod error;
