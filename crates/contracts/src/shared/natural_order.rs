//! Natural ("human") ordering of rows: `item2` before `item10`.

use serde_json::Value;
use std::cmp::Ordering;

use super::data_path::value_at_path;
use super::page_config::SortBy;

#[derive(Debug)]
enum Chunk<'a> {
    Number(&'a str),
    Text(String),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;

    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != is_digit => {
                result.push(make_chunk(&s[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }
    if let Some(prev) = in_digits {
        result.push(make_chunk(&s[start..], prev));
    }
    result
}

fn make_chunk(part: &str, digits: bool) -> Chunk<'_> {
    if digits {
        Chunk::Number(part)
    } else {
        Chunk::Text(part.to_lowercase())
    }
}

/// Compare two digit runs numerically without overflow
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        .then_with(|| a.len().cmp(&b.len()))
}

/// Natural comparison of two strings
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let ord = match (l, r) {
            (Chunk::Number(x), Chunk::Number(y)) => compare_digit_runs(x, y),
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
            (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    left.len().cmp(&right.len())
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Sort key of a non-null value.
///
/// Every value falls into exactly one class and classes never mix:
/// booleans, then numbers (numeric strings included), then text.
enum SortKey {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(value: &Value) -> Self {
        if let Value::Bool(b) = value {
            return SortKey::Bool(*b);
        }
        match as_number(value) {
            Some(n) => SortKey::Number(n),
            None => SortKey::Text(text_of(value)),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Bool(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Bool(x), SortKey::Bool(y)) => x.cmp(y),
            (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
            (SortKey::Text(x), SortKey::Text(y)) => compare_natural(x, y),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Natural comparison of two JSON values; `null` and missing values go last
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => SortKey::of(x).compare(&SortKey::of(y)),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Stable sort of rows by the configured identifiers, compared one after another
pub fn order_by(mut rows: Vec<Value>, sort_by: &SortBy) -> Vec<Value> {
    let identifiers = sort_by.identifiers();
    if identifiers.is_empty() {
        return rows;
    }
    rows.sort_by(|a, b| {
        identifiers
            .iter()
            .map(|id| compare_values(value_at_path(id, a), value_at_path(id, b)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    rows
}
