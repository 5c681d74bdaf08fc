pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, GeneratorConfig, SummaryFormat};
pub use core::{etl::EtlEngine, pipeline::ElpPipeline};
pub use domain::model::{Category, GenerationSummary, SourceFile, Term};
pub use utils::error::{CodegenError, Result};
