//! Configuration system for Strata.
//!
//! Runtime-configurable settings persisted to disk as RON, with CLI
//! overrides via clap and hot-reload detection. The render section carries
//! the water feature flags the frame path re-reads every frame.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, RenderConfig, WindowConfig, default_config_dir};
pub use error::ConfigError;
