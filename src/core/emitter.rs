//! Renders an [`OutputTable`] as a Rust source file holding one static slice.

use crate::domain::model::{OutputTable, Term};
use std::fmt::Write as _;

pub const GENERATED_HEADER: &str = "// AUTO-GENERATED by elp-codegen, DO NOT EDIT";

#[derive(Debug, Clone)]
pub struct TableEmitter {
    type_path: String,
    type_name: String,
    output_template: String,
}

impl TableEmitter {
    pub fn new(type_path: &str, type_name: &str, output_template: &str) -> Self {
        Self {
            type_path: type_path.to_string(),
            type_name: type_name.to_string(),
            output_template: output_template.to_string(),
        }
    }

    /// Artifact file name, e.g. `elp_terms_main.rs`.
    pub fn file_name(&self, table: &OutputTable) -> String {
        self.output_template.replace("{name}", table.name())
    }

    /// `MAIN_TERMS`, `SEC_TERMS`, `PLAN_TERMS`.
    pub fn static_name(table: &OutputTable) -> String {
        format!("{}_TERMS", table.name().to_uppercase())
    }

    pub fn render(&self, table: &OutputTable) -> String {
        let mut out = String::new();

        out.push_str(GENERATED_HEADER);
        out.push_str("\n\n");
        // Writing into a String cannot fail.
        let _ = writeln!(out, "use {}::{};", self.type_path, self.type_name);
        out.push('\n');
        let _ = writeln!(
            out,
            "pub static {}: &[{}] = &[",
            Self::static_name(table),
            self.type_name
        );

        for term in &table.terms {
            let _ = writeln!(out, "    {},", self.render_term(term));
        }

        out.push_str("];\n");
        out
    }

    fn render_term(&self, term: &Term) -> String {
        // `{:?}` on f64 is the shortest round-trip form and always keeps a
        // decimal point or exponent, so it reads back as a float literal.
        format!(
            "{} {{ d: {}, m: {}, mp: {}, f: {}, a0: {:?}, a1: {:?} }}",
            self.type_name, term.d, term.m, term.mp, term.f, term.a0, term.a1
        )
    }
}

impl Default for TableEmitter {
    fn default() -> Self {
        Self::new("super::elp_types", "ElpTerm", "elp_terms_{name}.rs")
    }
}
