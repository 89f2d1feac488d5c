pub mod error;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use types::{VarType, is_identifier, is_method_name, is_reserved_word};
