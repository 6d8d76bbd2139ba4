pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, LogFormat};
