pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_rust_identifier, validate_rust_path, validate_template, Validate,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

/// Fully resolved generator settings: defaults, then the TOML file, then flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub input_dir: String,
    pub output_dir: String,
    pub source_template: String,
    pub output_template: String,
    pub type_path: String,
    pub type_name: String,
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: "./data/raw".to_string(),
            output_dir: "./src/ephemeris/moon".to_string(),
            source_template: "ELP{index}.txt".to_string(),
            output_template: "elp_terms_{name}.rs".to_string(),
            type_path: "super::elp_types".to_string(),
            type_name: "ElpTerm".to_string(),
            dry_run: false,
        }
    }
}

impl ConfigProvider for GeneratorConfig {
    fn input_dir(&self) -> &str {
        &self.input_dir
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn source_template(&self) -> &str {
        &self.source_template
    }

    fn output_template(&self) -> &str {
        &self.output_template
    }

    fn type_path(&self) -> &str {
        &self.type_path
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_dir", &self.input_dir)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_template("source_template", &self.source_template, "{index}")?;
        validate_template("output_template", &self.output_template, "{name}")?;
        validate_rust_path("type_path", &self.type_path)?;
        validate_rust_identifier("type_name", &self.type_name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "elp-codegen")]
#[command(about = "Generate filtered ELP2000 lunar term tables as Rust source")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding ELP1.txt .. ELP36.txt
    #[arg(long)]
    pub input_dir: Option<String>,

    /// Directory receiving the generated tables (created if absent)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Source file name template, `{index}` is replaced by 1..36
    #[arg(long)]
    pub source_template: Option<String>,

    /// Output file name template, `{name}` is replaced by main/sec/plan
    #[arg(long)]
    pub output_template: Option<String>,

    /// Module path the term type is imported from
    #[arg(long)]
    pub type_path: Option<String>,

    /// Name of the term type in generated code
    #[arg(long)]
    pub type_name: Option<String>,

    /// Parse and filter only, write nothing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub summary_format: SummaryFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            toml_config::TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        toml_config::overlay(&mut config.input_dir, &self.input_dir);
        toml_config::overlay(&mut config.output_dir, &self.output_dir);
        toml_config::overlay(&mut config.source_template, &self.source_template);
        toml_config::overlay(&mut config.output_template, &self.output_template);
        toml_config::overlay(&mut config.type_path, &self.type_path);
        toml_config::overlay(&mut config.type_name, &self.type_name);
        config.dry_run = self.dry_run;

        Ok(config)
    }
}
