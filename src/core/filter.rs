//! Category assignment and amplitude thresholds.

use crate::domain::model::{Category, SourceBatch, SourceFile, Term, TransformResult};

/// Minimum `|a0| + |a1|` for a term to be kept, per category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTable {
    main: f64,
    secular: f64,
    planetary: f64,
}

impl ThresholdTable {
    pub const fn get(&self, category: Category) -> f64 {
        match category {
            Category::Main => self.main,
            Category::Secular => self.secular,
            Category::Planetary => self.planetary,
        }
    }
}

pub const THRESHOLDS: ThresholdTable = ThresholdTable {
    main: 2.0,
    secular: 15.0,
    planetary: 20.0,
};

/// Category of a raw source index; `None` outside `1..=36`.
pub fn category_for_index(index: u8) -> Option<Category> {
    SourceFile::new(index).map(|source| source.category())
}

pub(crate) const fn category_for_valid_index(index: u8) -> Category {
    match index {
        1..=3 => Category::Main,
        4..=9 => Category::Secular,
        // 10..=36
        _ => Category::Planetary,
    }
}

/// Inclusive threshold test.
pub fn is_significant(term: &Term, category: Category) -> bool {
    term.significance() >= THRESHOLDS.get(category)
}

/// Whether a term from a file of `category` ends up in the output.
///
/// Secular files (ELP4..ELP9) are dropped wholesale before any threshold is
/// consulted, so the `sec` table is always empty even though a secular
/// threshold is defined.
pub fn retains(category: Category, term: &Term) -> bool {
    match category {
        Category::Secular => false,
        Category::Main | Category::Planetary => is_significant(term, category),
    }
}

/// Appends the retained terms of `batch` to its category table and returns
/// how many were kept.
pub fn route_batch(batch: SourceBatch, result: &mut TransformResult) -> usize {
    let category = batch.source.category();
    let table = result.table_mut(category);
    let before = table.len();

    for term in batch.terms {
        if retains(category, &term) {
            table.push(term);
        }
    }

    table.len() - before
}
