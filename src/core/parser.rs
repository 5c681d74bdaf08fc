//! Record parser for ELP2000 periodic-term tables.
//!
//! A data line carries at least six whitespace-separated columns: the four
//! integer multipliers `d m mp f` followed by the amplitudes `a0 a1`. Anything
//! after the sixth column is annotation and ignored. Lines that are blank,
//! start with a letter (prose headers such as `MAIN PROBLEM...`), are short,
//! or fail numeric conversion yield no term and raise no error.

use crate::domain::model::Term;
use std::borrow::Cow;

const DATA_COLUMNS: usize = 6;

/// Parses a single line. `None` means "not a data line".
pub fn parse_line(line: &str) -> Option<Term> {
    let line = line.trim();

    let first = line.chars().next()?;
    if first.is_alphabetic() {
        return None;
    }

    let columns: Vec<&str> = line.split_whitespace().take(DATA_COLUMNS).collect();
    if columns.len() < DATA_COLUMNS {
        return None;
    }

    let d = parse_multiplier(columns[0])?;
    let m = parse_multiplier(columns[1])?;
    let mp = parse_multiplier(columns[2])?;
    let f = parse_multiplier(columns[3])?;
    let a0 = parse_amplitude(columns[4])?;
    let a1 = parse_amplitude(columns[5])?;

    Some(Term::new(d, m, mp, f, a0, a1))
}

fn parse_multiplier(token: &str) -> Option<i32> {
    strip_digit_separators(token)?.parse::<i32>().ok()
}

// `inf`/`nan` parse as f64 but have no literal form in the generated tables.
fn parse_amplitude(token: &str) -> Option<f64> {
    strip_digit_separators(token)?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Removes digit-group underscores (`1_000`, `2_5.0`). An underscore is only
/// accepted with an ASCII digit on both sides; any other placement makes the
/// token invalid.
fn strip_digit_separators(token: &str) -> Option<Cow<'_, str>> {
    if !token.contains('_') {
        return Some(Cow::Borrowed(token));
    }

    let bytes = token.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            let digit = |b: Option<u8>| b.is_some_and(|b| b.is_ascii_digit());
            if !digit(before) || !digit(after) {
                return None;
            }
        }
    }

    Some(Cow::Owned(token.replace('_', "")))
}

/// Lazily yields the terms of `content` in line order. Calling it again on the
/// same content restarts from the first line.
pub fn parse_terms(content: &str) -> impl Iterator<Item = Term> + '_ {
    content.lines().filter_map(parse_line)
}

pub fn parse_content(content: &str) -> Vec<Term> {
    parse_terms(content).collect()
}
