//! Client-side row ordering by a data attribute.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};
use ustr::Ustr;

use super::Row;

/// The one attribute compared numerically.
pub const MARK_KEY: &str = "mark";

/// Name of a row attribute used as sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortKey(Ustr);

impl SortKey {
    pub fn new(key: &str) -> Self {
        Self(Ustr::from(key))
    }

    pub fn as_str(&self) -> &'static str {
        self.0.as_str()
    }

    pub fn is_numeric(&self) -> bool {
        self.0 == MARK_KEY
    }
}

/// Parse the leading number of `raw`, like a browser's `parseFloat`.
///
/// `None` for empty, non-numeric, or NaN input.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    if let Some(value) = parse_infinity(trimmed) {
        return Some(value);
    }
    let prefix = trimmed.get(..numeric_prefix_len(trimmed))?;
    prefix.parse::<f64>().ok().filter(|value| !value.is_nan())
}

fn parse_infinity(s: &str) -> Option<f64> {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    rest.starts_with("Infinity").then_some(sign * f64::INFINITY)
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 || has_digits {
            has_digits |= frac_end > end + 1;
            end = frac_end;
        }
    }
    if !has_digits {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

/// Descending by value; values that do not parse go last.
pub fn compare_numeric(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Locale-style ascending comparison.
///
/// Base letters decide first, ignoring accents and case. Accents break ties
/// next, then lowercase sorts before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Stable in-place sort. Missing attributes compare as empty text.
pub fn sort_rows(rows: &mut [Row], key: SortKey) {
    if key.is_numeric() {
        rows.sort_by_cached_key(|row| NumericKey(row.attribute(key.as_str()).and_then(parse_number)));
    } else {
        rows.sort_by(|a, b| {
            locale_cmp(
                a.attribute(key.as_str()).unwrap_or_default(),
                b.attribute(key.as_str()).unwrap_or_default(),
            )
        });
    }
}

#[derive(PartialEq)]
struct NumericKey(Option<f64>);

impl Eq for NumericKey {}

impl PartialOrd for NumericKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumericKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_numeric(self.0, other.0)
    }
}
