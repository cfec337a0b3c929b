mod api;
mod model;

pub use model::{GoogleBackend, GoogleBackendOptions};
