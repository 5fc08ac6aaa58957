pub mod base;
pub mod memory;

pub use base::Destination;
