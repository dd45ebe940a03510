mod app;
mod config;
mod store;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use store::{CheckpointDecodeError, StoreError};
pub use validation::ValidationError;
