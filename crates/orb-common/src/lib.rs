pub mod color;
pub mod errors;

pub use color::Color;
pub use errors::{ConfigError, OrbError};

pub type Result<T> = std::result::Result<T, OrbError>;
