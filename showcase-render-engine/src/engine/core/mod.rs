pub mod app_state;
pub mod window_config;
