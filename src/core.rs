//! Core types shared by the sorting, searching and store modules.
//!
//! This module defines:
//! - [`Algorithm`]: the five selectable sorting algorithms.
//! - [`SearchOutcome`]: the result of a single search query.
//! - [`StoreConfig`]: size and value bounds applied when generating arrays.

use crate::algo;
use crate::error::StoreError;
use std::fmt;
use std::str::FromStr;

/// Element type of every array handled by the store.
pub type Value = i64;

/// Smallest array length accepted by `generate`.
pub const MIN_ARRAY_SIZE: usize = 5;

/// Largest array length accepted by `generate`.
pub const MAX_ARRAY_SIZE: usize = 100_000;

/// Exclusive upper bound of generated values. Values are drawn from `[0, VALUE_BOUND)`.
pub const VALUE_BOUND: Value = 500;

/// A comparison sort selectable from the visualizer.
///
/// # Examples
///
/// ```
/// use sortscope::Algorithm;
///
/// let algorithm: Algorithm = "Quick Sort".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::Quick);
/// assert_eq!(algorithm.sort(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Merge,
    Quick,
    Insertion,
}

impl Algorithm {
    /// All algorithms, in the order the visualizer lists them.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Insertion,
    ];

    /// Lowercase identifier used by the call interface (`"bubble"`, `"quick"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Insertion => "insertion",
        }
    }

    /// Human readable label, e.g. `"Merge Sort"`.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Insertion => "Insertion Sort",
        }
    }

    /// Whether equal elements keep their relative order.
    ///
    /// Merge sort is not stable here: its merge step only takes from the left
    /// run on a strict `<`, so ties are resolved in favor of the right run.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Insertion)
    }

    /// Sorts a copy of `data` with this algorithm. The input is left untouched.
    pub fn sort<T: Ord + Clone>(self, data: &[T]) -> Vec<T> {
        match self {
            Algorithm::Bubble => algo::bubble_sort(data),
            Algorithm::Selection => algo::selection_sort(data),
            Algorithm::Merge => algo::merge_sort(data),
            Algorithm::Quick => algo::quick_sort(data),
            Algorithm::Insertion => algo::insertion_sort(data),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = StoreError;

    /// Accepts the identifier or the label, case-insensitively
    /// (`"merge"`, `"Merge Sort"`, `"merge_sort"`, `"mergesort"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let base = match lower.strip_suffix("sort") {
            Some(rest) => rest.trim_end_matches([' ', '_', '-']),
            None => lower.as_str(),
        };

        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == base)
            .ok_or_else(|| StoreError::UnknownAlgorithm(s.to_string()))
    }
}

/// Result of searching for a target value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// The target was found at this index.
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    /// Index of the match, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            SearchOutcome::Found(i) => Some(i),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

impl From<Option<usize>> for SearchOutcome {
    fn from(index: Option<usize>) -> Self {
        index.map_or(SearchOutcome::NotFound, SearchOutcome::Found)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(i) => write!(f, "Found at index {i}"),
            SearchOutcome::NotFound => f.write_str("Not found"),
        }
    }
}

/// Bounds applied when generating arrays.
///
/// The default matches the visualizer: lengths in `[5, 100000]` and values in `[0, 500)`.
/// Fields are only reachable through the builder methods, which keep the size
/// range non-empty and the value bound positive.
///
/// # Examples
///
/// ```
/// use sortscope::StoreConfig;
///
/// let config = StoreConfig::default().with_size_range(5, 1000).unwrap();
/// assert!(config.validate_size(1000).is_ok());
/// assert!(config.validate_size(1001).is_err());
/// assert!(StoreConfig::default().with_size_range(10, 5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    min_size: usize,
    max_size: usize,
    value_bound: Value,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_ARRAY_SIZE,
            max_size: MAX_ARRAY_SIZE,
            value_bound: VALUE_BOUND,
        }
    }
}

impl StoreConfig {
    /// Sets the inclusive range of accepted array lengths.
    ///
    /// Fails with [`StoreError::InvalidSizeRange`] if `min_size > max_size`.
    pub fn with_size_range(mut self, min_size: usize, max_size: usize) -> Result<Self, StoreError> {
        if min_size > max_size {
            return Err(StoreError::InvalidSizeRange {
                min: min_size,
                max: max_size,
            });
        }
        self.min_size = min_size;
        self.max_size = max_size;
        Ok(self)
    }

    /// Sets the exclusive upper bound of generated values. Bounds below 1 are raised to 1.
    pub fn with_value_bound(mut self, value_bound: Value) -> Self {
        self.value_bound = value_bound.max(1);
        self
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Exclusive upper bound of generated values, always at least 1.
    pub fn value_bound(&self) -> Value {
        self.value_bound
    }

    /// Checks that `size` lies in `[min_size, max_size]` and returns it as a length.
    pub fn validate_size(&self, size: i64) -> Result<usize, StoreError> {
        usize::try_from(size)
            .ok()
            .filter(|len| (self.min_size..=self.max_size).contains(len))
            .ok_or_else(|| self.invalid_size(size.to_string()))
    }

    /// Parses the raw text of a size field and validates it.
    ///
    /// Any numeric text with a whole value is accepted (`"50"`, `" 1e3 "`).
    /// Blank, non-numeric and fractional text fail with [`StoreError::InvalidSize`].
    pub fn parse_size(&self, text: &str) -> Result<usize, StoreError> {
        match parse_number(text) {
            ParsedNumber::Integer(size) => self
                .validate_size(size)
                .map_err(|_| self.invalid_size(text.to_string())),
            ParsedNumber::NonIntegral | ParsedNumber::Invalid => {
                Err(self.invalid_size(text.to_string()))
            }
        }
    }

    fn invalid_size(&self, got: String) -> StoreError {
        StoreError::InvalidSize {
            min: self.min_size,
            max: self.max_size,
            got,
        }
    }
}

/// Numeric reading of a text field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ParsedNumber {
    /// A whole number that fits in a [`Value`].
    Integer(Value),
    /// Numeric, but fractional, non-finite or out of range (`"3.5"`, `"1e30"`, `"NaN"`).
    NonIntegral,
    /// Blank or not a number at all.
    Invalid,
}

// 2^63 as f64; anything at or above it does not fit in an i64.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Reads `text` as a number, accepting integer, decimal and exponent notation.
pub(crate) fn parse_number(text: &str) -> ParsedNumber {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedNumber::Invalid;
    }
    if let Ok(n) = trimmed.parse::<Value>() {
        return ParsedNumber::Integer(n);
    }

    match trimmed.parse::<f64>() {
        Ok(x) if x.is_finite() && x.fract() == 0.0 && x >= -I64_LIMIT && x < I64_LIMIT => {
            ParsedNumber::Integer(x as Value)
        }
        Ok(_) => ParsedNumber::NonIntegral,
        Err(_) => ParsedNumber::Invalid,
    }
}
