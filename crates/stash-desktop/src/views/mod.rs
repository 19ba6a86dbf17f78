//! Application views

mod secret_configs;

pub use secret_configs::{reload_catalog, SecretConfigsPage};
