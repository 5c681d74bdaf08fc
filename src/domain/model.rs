use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest source file index in the ELP2000 distribution (`ELP1`..`ELP36`).
pub const SOURCE_FILE_COUNT: u8 = 36;

/// One periodic series term: four argument multipliers and two amplitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub d: i32,
    pub m: i32,
    pub mp: i32,
    pub f: i32,
    pub a0: f64,
    pub a1: f64,
}

impl Term {
    pub fn new(d: i32, m: i32, mp: i32, f: i32, a0: f64, a1: f64) -> Self {
        Self {
            d,
            m,
            mp,
            f,
            a0,
            a1,
        }
    }

    /// `|a0| + |a1|`, the retention proxy for how much a term matters.
    pub fn significance(&self) -> f64 {
        self.a0.abs() + self.a1.abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Main,
    Secular,
    Planetary,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Main, Category::Secular, Category::Planetary];

    /// Short token used for the table name and the artifact file name.
    pub fn table_name(self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Secular => "sec",
            Category::Planetary => "plan",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Main => "MAIN",
            Category::Secular => "SECULAR",
            Category::Planetary => "PLANETARY",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A numbered ELP source file. Its index alone decides the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceFile {
    index: u8,
}

impl SourceFile {
    /// Returns `None` outside `1..=36`.
    pub fn new(index: u8) -> Option<Self> {
        (1..=SOURCE_FILE_COUNT)
            .contains(&index)
            .then_some(Self { index })
    }

    pub fn all() -> impl Iterator<Item = SourceFile> {
        (1..=SOURCE_FILE_COUNT).map(|index| SourceFile { index })
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn category(&self) -> Category {
        crate::core::filter::category_for_valid_index(self.index)
    }

    pub fn threshold(&self) -> f64 {
        crate::core::filter::THRESHOLDS.get(self.category())
    }

    /// Expands `{index}` in a template such as `ELP{index}.txt`.
    pub fn file_name(&self, template: &str) -> String {
        template.replace("{index}", &self.index.to_string())
    }
}

/// Parsed terms of one source file, in line order.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBatch {
    pub source: SourceFile,
    pub terms: Vec<Term>,
}

/// Retained terms for one category, in source index then line order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    pub category: Category,
    pub terms: Vec<Term>,
}

impl OutputTable {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            terms: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.category.table_name()
    }

    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub main: OutputTable,
    pub secular: OutputTable,
    pub planetary: OutputTable,
    pub sources_read: usize,
    pub missing_sources: Vec<String>,
}

impl TransformResult {
    pub fn new() -> Self {
        Self {
            main: OutputTable::new(Category::Main),
            secular: OutputTable::new(Category::Secular),
            planetary: OutputTable::new(Category::Planetary),
            sources_read: 0,
            missing_sources: Vec::new(),
        }
    }

    pub fn table(&self, category: Category) -> &OutputTable {
        match category {
            Category::Main => &self.main,
            Category::Secular => &self.secular,
            Category::Planetary => &self.planetary,
        }
    }

    pub fn table_mut(&mut self, category: Category) -> &mut OutputTable {
        match category {
            Category::Main => &mut self.main,
            Category::Secular => &mut self.secular,
            Category::Planetary => &mut self.planetary,
        }
    }

    /// Tables in emission order: main, sec, plan.
    pub fn tables(&self) -> [&OutputTable; 3] {
        [&self.main, &self.secular, &self.planetary]
    }
}

impl Default for TransformResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of extraction: the batches that were found plus the names of the
/// numbered files that were absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractResult {
    pub batches: Vec<SourceBatch>,
    pub missing_sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub name: String,
    pub category: Category,
    pub terms: usize,
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationSummary {
    pub sources_read: usize,
    pub missing_sources: Vec<String>,
    pub tables: Vec<TableSummary>,
    pub dry_run: bool,
}

impl GenerationSummary {
    pub fn terms_for(&self, category: Category) -> usize {
        self.tables
            .iter()
            .find(|table| table.category == category)
            .map(|table| table.terms)
            .unwrap_or(0)
    }

    pub fn to_json(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut lines = vec!["ELP code generation complete:".to_string()];
        lines.push(format!("  MAIN terms      : {}", self.terms_for(Category::Main)));
        lines.push(format!("  SECULAR terms   : {}", self.terms_for(Category::Secular)));
        lines.push(format!("  PLANETARY terms : {}", self.terms_for(Category::Planetary)));
        if !self.missing_sources.is_empty() {
            lines.push(format!("  missing sources : {}", self.missing_sources.join(", ")));
        }
        if self.dry_run {
            lines.push("  (dry run, no files written)".to_string());
        }
        lines.join("\n")
    }
}
