use crate::core::emitter::TableEmitter;
use crate::core::filter::route_batch;
use crate::core::parser::parse_content;
use crate::core::{
    ConfigProvider, ExtractResult, GenerationSummary, Pipeline, SourceBatch, Storage,
    TransformResult,
};
use crate::domain::model::{SourceFile, TableSummary};
use crate::utils::error::{CodegenError, Result};

/// Reads the 36 numbered ELP tables from `source`, keeps the significant terms
/// and writes the `main`, `sec` and `plan` tables to `sink`.
pub struct ElpPipeline<S: Storage, C: ConfigProvider> {
    source: S,
    sink: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ElpPipeline<S, C> {
    pub fn new(source: S, sink: S, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    fn read_source(&self, file_name: &str) -> Result<String> {
        let bytes = self.source.read_file(file_name)?;
        String::from_utf8(bytes).map_err(|e| CodegenError::SourceReadError {
            path: self.source.display_path(file_name).into(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }

    fn emitter(&self) -> TableEmitter {
        TableEmitter::new(
            self.config.type_path(),
            self.config.type_name(),
            self.config.output_template(),
        )
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ElpPipeline<S, C> {
    fn extract(&self) -> Result<ExtractResult> {
        let mut result = ExtractResult::default();

        for source in SourceFile::all() {
            let file_name = source.file_name(self.config.source_template());

            if !self.source.exists(&file_name) {
                tracing::warn!("⚠️ missing {}", file_name);
                result.missing_sources.push(file_name);
                continue;
            }

            let content = self.read_source(&file_name)?;
            let terms = parse_content(&content);
            tracing::debug!("Parsed {} terms from {}", terms.len(), file_name);

            result.batches.push(SourceBatch { source, terms });
        }

        Ok(result)
    }

    fn transform(&self, data: ExtractResult) -> Result<TransformResult> {
        let mut result = TransformResult::new();
        result.sources_read = data.batches.len();
        result.missing_sources = data.missing_sources;

        for batch in data.batches {
            let source = batch.source;
            let parsed = batch.terms.len();
            let kept = route_batch(batch, &mut result);

            tracing::debug!(
                "ELP{} ({}): kept {} of {} terms",
                source.index(),
                source.category(),
                kept,
                parsed
            );
        }

        Ok(result)
    }

    fn load(&self, result: TransformResult) -> Result<GenerationSummary> {
        let emitter = self.emitter();
        let dry_run = self.config.dry_run();
        let mut tables = Vec::with_capacity(3);

        for table in result.tables() {
            let file_name = emitter.file_name(table);

            let path = if dry_run {
                tracing::info!("Dry run: skipping {} ({} terms)", file_name, table.len());
                None
            } else {
                let rendered = emitter.render(table);
                self.sink.write_file(&file_name, rendered.as_bytes())?;

                let path = self.sink.display_path(&file_name);
                tracing::debug!("Wrote {} terms to {}", table.len(), path);
                Some(path)
            };

            tables.push(TableSummary {
                name: table.name().to_string(),
                category: table.category,
                terms: table.len(),
                path,
            });
        }

        Ok(GenerationSummary {
            sources_read: result.sources_read,
            missing_sources: result.missing_sources,
            tables,
            dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Category, Term};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        read_only: bool,
    }

    impl MockStorage {
        fn with_files(files: &[(&str, &str)]) -> Self {
            let storage = Self::default();
            {
                let mut map = storage.files.lock().unwrap();
                for (name, content) in files {
                    map.insert(name.to_string(), content.as_bytes().to_vec());
                }
            }
            storage
        }

        fn read_only() -> Self {
            Self {
                read_only: true,
                ..Self::default()
            }
        }

        fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
        }

        fn insert_raw(&self, path: &str, data: Vec<u8>) {
            self.files.lock().unwrap().insert(path.to_string(), data);
        }
    }

    impl Storage for MockStorage {
        fn exists(&self, path: &str) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }

        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .cloned()
                .ok_or_else(|| CodegenError::SourceReadError {
                    path: PathBuf::from(path),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.read_only {
                return Err(CodegenError::OutputWriteError {
                    path: PathBuf::from(path),
                    source: std::io::Error::new(
                        std::io::ErrorKind::PermissionDenied,
                        "read-only storage",
                    ),
                });
            }
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        fn display_path(&self, path: &str) -> String {
            format!("mock/{}", path)
        }
    }

    struct MockConfig {
        dry_run: bool,
    }

    impl ConfigProvider for MockConfig {
        fn input_dir(&self) -> &str {
            "mock-in"
        }

        fn output_dir(&self) -> &str {
            "mock-out"
        }

        fn source_template(&self) -> &str {
            "ELP{index}.txt"
        }

        fn output_template(&self) -> &str {
            "elp_terms_{name}.rs"
        }

        fn type_path(&self) -> &str {
            "super::elp_types"
        }

        fn type_name(&self) -> &str {
            "ElpTerm"
        }

        fn dry_run(&self) -> bool {
            self.dry_run
        }
    }

    fn pipeline(
        source: MockStorage,
        sink: MockStorage,
        dry_run: bool,
    ) -> ElpPipeline<MockStorage, MockConfig> {
        ElpPipeline::new(source, sink, MockConfig { dry_run })
    }

    #[test]
    fn test_extract_reports_missing_files_and_keeps_index_order() {
        let source = MockStorage::with_files(&[
            ("ELP10.txt", "1 0 0 0 25.0 0.0\n"),
            ("ELP1.txt", "HEADER\n0 0 1 0 1.5 0.8\n"),
        ]);
        let pipeline = pipeline(source, MockStorage::default(), false);

        let extracted = pipeline.extract().unwrap();

        assert_eq!(extracted.batches.len(), 2);
        assert_eq!(extracted.batches[0].source.index(), 1);
        assert_eq!(extracted.batches[1].source.index(), 10);
        assert_eq!(extracted.missing_sources.len(), 34);
        assert!(extracted.missing_sources.contains(&"ELP7.txt".to_string()));
        assert!(!extracted.missing_sources.contains(&"ELP1.txt".to_string()));
    }

    #[test]
    fn test_extract_rejects_non_utf8_source() {
        let source = MockStorage::default();
        source.insert_raw("ELP2.txt", vec![0xff, 0xfe, 0x00]);
        let pipeline = pipeline(source, MockStorage::default(), false);

        let err = pipeline.extract().unwrap_err();
        assert!(matches!(err, CodegenError::SourceReadError { .. }));
    }

    #[test]
    fn test_transform_routes_by_category() {
        let source = MockStorage::with_files(&[
            ("ELP1.txt", "0 0 1 0 1.5 0.8\n0 0 2 0 10.0 0.0\n0 0 3 0 0.5 0.5\n"),
            ("ELP5.txt", "0 0 0 0 999.0 0.0\n"),
            ("ELP10.txt", "1 0 0 0 19.99 0.0\n2 0 0 0 20.0 0.0\n"),
        ]);
        let pipeline = pipeline(source, MockStorage::default(), false);

        let extracted = pipeline.extract().unwrap();
        let result = pipeline.transform(extracted).unwrap();

        assert_eq!(result.sources_read, 3);
        assert_eq!(
            result.main.terms,
            vec![
                Term::new(0, 0, 1, 0, 1.5, 0.8),
                Term::new(0, 0, 2, 0, 10.0, 0.0)
            ]
        );
        assert!(result.secular.is_empty());
        assert_eq!(result.planetary.terms, vec![Term::new(2, 0, 0, 0, 20.0, 0.0)]);
    }

    #[test]
    fn test_main_table_keeps_file_then_line_order() {
        let source = MockStorage::with_files(&[
            ("ELP3.txt", "3 0 0 0 5.0 0.0\n"),
            ("ELP1.txt", "1 0 0 0 5.0 0.0\n1 1 0 0 5.0 0.0\n"),
            ("ELP2.txt", "2 0 0 0 5.0 0.0\n"),
        ]);
        let pipeline = pipeline(source, MockStorage::default(), false);

        let result = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let order: Vec<(i32, i32)> = result.main.terms.iter().map(|t| (t.d, t.m)).collect();

        assert_eq!(order, vec![(1, 0), (1, 1), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_load_writes_three_tables() {
        let source = MockStorage::with_files(&[("ELP1.txt", "0 0 1 0 1.5 0.8\n")]);
        let sink = MockStorage::default();
        let pipeline = pipeline(source, sink.clone(), false);

        let result = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let summary = pipeline.load(result).unwrap();

        assert_eq!(summary.tables.len(), 3);
        assert_eq!(summary.terms_for(Category::Main), 1);
        assert_eq!(summary.terms_for(Category::Secular), 0);
        assert_eq!(summary.tables[0].path.as_deref(), Some("mock/elp_terms_main.rs"));

        let main = sink.get_file("elp_terms_main.rs").unwrap();
        assert!(main.contains("pub static MAIN_TERMS: &[ElpTerm] = &["));
        assert!(main.contains("ElpTerm { d: 0, m: 0, mp: 1, f: 0, a0: 1.5, a1: 0.8 },"));

        let sec = sink.get_file("elp_terms_sec.rs").unwrap();
        assert!(sec.contains("pub static SEC_TERMS: &[ElpTerm] = &[\n];"));

        assert!(sink.get_file("elp_terms_plan.rs").is_some());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let source = MockStorage::with_files(&[("ELP1.txt", "0 0 1 0 1.5 0.8\n")]);
        let sink = MockStorage::default();
        let pipeline = pipeline(source, sink.clone(), true);

        let result = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let summary = pipeline.load(result).unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.terms_for(Category::Main), 1);
        assert!(summary.tables.iter().all(|table| table.path.is_none()));
        assert!(sink.get_file("elp_terms_main.rs").is_none());
    }

    #[test]
    fn test_output_write_failure_propagates() {
        let pipeline = pipeline(MockStorage::default(), MockStorage::read_only(), false);

        let result = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        let err = pipeline.load(result).unwrap_err();

        assert!(matches!(err, CodegenError::OutputWriteError { .. }));
    }
}
