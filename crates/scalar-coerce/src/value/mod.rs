//! Runtime value types and their text renderings.

#![allow(missing_docs)]

mod export;
mod format;
mod numeric;
mod types;

pub use export::*;
pub use format::*;
pub use numeric::*;
pub use types::*;
