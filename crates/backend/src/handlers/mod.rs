pub mod admin_config;
