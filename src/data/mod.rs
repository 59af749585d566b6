pub mod config;
pub mod types;

pub use config::{OutputFormat, Parameters};
pub use types::*;
