use crate::utils::error::{GatewayError, Result};
use tracing_subscriber::EnvFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_log_filter(field_name: &str, directives: &str) -> Result<()> {
    validate_non_empty_string(field_name, directives)?;

    match EnvFilter::try_new(directives) {
        Ok(_) => Ok(()),
        Err(e) => Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: directives.to_string(),
            reason: format!("Invalid tracing filter directives: {}", e),
        }),
    }
}
