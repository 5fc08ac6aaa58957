mod base;
mod mapping;
mod pipeline;

pub use base::*;
pub use mapping::*;
pub use pipeline::*;
