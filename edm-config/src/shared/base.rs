use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Maximum mapping workers cannot be zero.
    #[error("`max_workers` cannot be zero")]
    MaxWorkersZero,
    /// A configuration field holds a value outside its allowed range.
    #[error("invalid value for `{field}`: {constraint}")]
    InvalidFieldValue { field: String, constraint: String },
}
