//! Configuration: the seed catalogue and application defaults.
//!
//! Loaded once at startup from a TOML file; there is no reload or
//! write-back. The catalogue itself lives in [`crate::catalogue`] after
//! seeding.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults};
