use crate::core::{GenerationSummary, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<GenerationSummary> {
        tracing::info!("Starting ELP table generation...");

        // Extract
        tracing::info!("Reading ELP source files...");
        let extracted = self.pipeline.extract()?;
        let parsed: usize = extracted.batches.iter().map(|b| b.terms.len()).sum();
        tracing::info!(
            "Parsed {} terms from {} source files ({} missing)",
            parsed,
            extracted.batches.len(),
            extracted.missing_sources.len()
        );

        // Transform
        tracing::info!("Filtering terms...");
        let filtered = self.pipeline.transform(extracted)?;
        tracing::info!(
            "Retained {} main, {} secular, {} planetary terms",
            filtered.main.len(),
            filtered.secular.len(),
            filtered.planetary.len()
        );

        // Load
        tracing::info!("Emitting tables...");
        let summary = self.pipeline.load(filtered)?;
        for table in summary.tables.iter() {
            if let Some(path) = &table.path {
                tracing::info!("Output saved to: {}", path);
            }
        }

        Ok(summary)
    }
}
