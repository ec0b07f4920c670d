//! Form model state module

mod errors;
mod field;
mod resume;
mod validate;

pub use errors::*;
pub use field::*;
pub use resume::*;
pub use validate::*;
