use fridge_chef_sdk::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{0}")]
    Gateway(#[from] GatewayError),
    /// The photo was rejected before analysis, e.g. because it is too large.
    #[error("Invalid image: {0}")]
    InvalidImage(String),
    #[error("No meal at position {0}")]
    UnknownMeal(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
