pub use crate::pkg::errors::Error;

pub type Result<T> = core::result::Result<T, Error>;
