//! Typed records exchanged between the source, the mappers, and the destination.

mod batch;
mod record;
mod rows;

pub use batch::*;
pub use record::*;
pub use rows::*;
