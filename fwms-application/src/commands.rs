pub mod notification_commands;
pub mod request_commands;
pub mod transport_commands;
pub mod user_commands;
pub mod waste_commands;

use crate::AppError;

fn missing(field: &str) -> AppError {
    AppError::BadRequest(format!("{} is required", field))
}

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
