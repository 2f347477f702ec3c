pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, LocalStorage};
pub use self::core::{engine::ProfitEngine, pipeline::ProfitPipeline};
pub use utils::error::{ProfitError, Result};
