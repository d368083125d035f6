pub mod api_utils;
pub mod components;
pub mod config_loader;
pub mod generation;
pub mod icons;
pub mod json_viewer;
pub mod page_frame;
pub mod page_standard;
pub mod query_string;
pub mod requests;
