pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::problems::{build_report, build_reports, ProblemKind};
pub use config::{toml_config::TomlConfig, ReportConfig};
pub use crate::core::{engine::ReportEngine, render::OutputFormat};
pub use utils::error::{ReportError, Result};
