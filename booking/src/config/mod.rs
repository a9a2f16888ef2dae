//! Configuration system for booking.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project booking files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the service catalog and option values
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (BOOKING_*)
//! 3. Private project config (`booking.local.yaml`)
//! 4. Project config (`booking.yaml`)
//! 5. User config (`~/.booking/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use booking::config::{Config, ConfigBuilder};
//! use booking::IdStrategy;
//!
//! let custom = Config {
//!     dark_mode: Some(true),
//!     id_strategy: Some(IdStrategy::CountPlusOne),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.dark_mode_enabled());
//! assert_eq!(config.catalog().unwrap().len(), 3);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
