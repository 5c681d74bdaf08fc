pub mod emitter;
pub mod etl;
pub mod filter;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{
    ExtractResult, GenerationSummary, OutputTable, SourceBatch, Term, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
