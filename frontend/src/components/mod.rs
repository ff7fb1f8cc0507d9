pub mod handlers;
pub mod header;
pub mod history_panel;
pub mod input_tabs;
pub mod results;
pub mod upload_section;
pub mod utils;
