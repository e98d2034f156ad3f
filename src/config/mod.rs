//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file
//!     → loader.rs (read & deserialize)
//!     → CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (immutable for the life of the process)
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so running without a file is valid
//! - Validation separates syntactic (serde) from semantic checks
//! - Injected proxy, rules, route path and User-Agent are constants,
//!   not configuration

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, RelayConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
