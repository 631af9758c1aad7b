use crate::utils::error::{DashboardError, Result};
use std::net::IpAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DashboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DashboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_host(field_name: &str, host: &str) -> Result<IpAddr> {
    host.parse::<IpAddr>()
        .map_err(|e| DashboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: format!("Invalid IP address: {}", e),
        })
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(DashboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Delimiters must be a single ASCII character so they map onto one byte.
pub fn validate_delimiter(field_name: &str, delimiter: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [b] if b.is_ascii() && *b != b'\n' && *b != b'\r' && *b != b'"' => Ok(*b),
        _ => Err(DashboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: delimiter.to_string(),
            reason: "Delimiter must be a single ASCII character".to_string(),
        }),
    }
}
