pub mod api_client;
pub mod api_config;
pub mod components;
pub mod date_utils;
pub mod list_utils;
pub mod number_utils;
pub mod page_frame;
pub mod page_standard;
pub mod toast;
