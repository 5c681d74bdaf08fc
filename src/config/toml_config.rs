use crate::config::GeneratorConfig;
use crate::utils::error::{CodegenError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every key is optional; unset keys keep the
/// built-in defaults.
///
/// ```toml
/// [input]
/// dir = "./data/raw"
/// file_template = "ELP{index}.txt"
///
/// [output]
/// dir = "${MOON_SRC}/ephemeris/moon"
/// file_template = "elp_terms_{name}.rs"
///
/// [codegen]
/// type_path = "super::elp_types"
/// type_name = "ElpTerm"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub codegen: Option<CodegenConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub dir: Option<String>,
    pub file_template: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: Option<String>,
    pub file_template: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    pub type_path: Option<String>,
    pub type_name: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CodegenError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CodegenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CodegenError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlays every key set in this file onto `config`.
    pub fn apply_to(&self, config: &mut GeneratorConfig) {
        if let Some(input) = &self.input {
            overlay(&mut config.input_dir, &input.dir);
            overlay(&mut config.source_template, &input.file_template);
        }
        if let Some(output) = &self.output {
            overlay(&mut config.output_dir, &output.dir);
            overlay(&mut config.output_template, &output.file_template);
        }
        if let Some(codegen) = &self.codegen {
            overlay(&mut config.type_path, &codegen.type_path);
            overlay(&mut config.type_name, &codegen.type_name);
        }
    }
}

pub(crate) fn overlay(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}
