mod config;
mod environment;
mod error;

pub use config::{ConfigError, ServiceConfig, Variant};
pub use environment::Environment;
pub use error::AppError;
