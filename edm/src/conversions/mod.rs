//! Pure field-level normalization functions applied by the schema mappers.

pub mod consent;
pub mod country;
pub mod timestamp;
