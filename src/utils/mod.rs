pub mod error;
pub mod output;
pub mod parse;

pub use error::*;
pub use output::*;
pub use parse::*;
