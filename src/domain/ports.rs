use crate::domain::model::{ExtractResult, GenerationSummary, TransformResult};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Location of `path` as shown to the user (logs, summary).
    fn display_path(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn input_dir(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn source_template(&self) -> &str;
    fn output_template(&self) -> &str;
    fn type_path(&self) -> &str;
    fn type_name(&self) -> &str;
    fn dry_run(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ExtractResult>;
    fn transform(&self, data: ExtractResult) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<GenerationSummary>;
}
