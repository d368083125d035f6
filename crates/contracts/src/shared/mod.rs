pub mod color;
pub mod data_path;
pub mod natural_order;
pub mod page_config;
pub mod query;
pub mod row_filter;
pub mod sanitize;
pub mod ui_state;
pub mod url_template;
