//! Macros for extract engine error handling.
//!
//! Convenience macros for creating and returning [`crate::error::EdmError`]
//! instances without spelling out the tuple conversions.

/// Creates an [`crate::error::EdmError`] from an error kind, a static
/// description, and optionally a dynamic detail and a source error.
#[macro_export]
macro_rules! edm_error {
    ($kind:expr, $desc:expr) => {
        $crate::error::EdmError::from(($kind, $desc))
    };
    ($kind:expr, $desc:expr, $detail:expr) => {
        $crate::error::EdmError::from(($kind, $desc, $detail.to_string()))
    };
    ($kind:expr, $desc:expr, $detail:expr, source: $source:expr) => {
        $crate::error::EdmError::from(($kind, $desc, $detail.to_string())).with_source($source)
    };
}

/// Creates and returns an [`crate::error::EdmError`] from the current function.
///
/// Combines error creation with an early return for conditions that must
/// terminate the surrounding operation.
#[macro_export]
macro_rules! bail {
    ($kind:expr, $desc:expr) => {
        return ::core::result::Result::Err($crate::edm_error!($kind, $desc))
    };
    ($kind:expr, $desc:expr, $detail:expr) => {
        return ::core::result::Result::Err($crate::edm_error!($kind, $desc, $detail))
    };
    ($kind:expr, $desc:expr, $detail:expr, source: $source:expr) => {
        return ::core::result::Result::Err($crate::edm_error!(
            $kind,
            $desc,
            $detail,
            source: $source
        ))
    };
}
