pub mod conversions;
pub mod destination;
pub mod error;
pub mod keys;
pub mod macros;
pub mod mappers;
pub mod pipeline;
pub mod source;
pub mod types;
