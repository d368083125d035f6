pub mod get;
pub mod page_view;
pub mod state_panel;
