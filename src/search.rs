//! Linear and binary search, and the combined search query the store runs.

use crate::core::{ParsedNumber, SearchOutcome, Value, parse_number};
use crate::error::StoreError;
use std::cmp::Ordering;
use std::fmt;

/// Outcomes of one search query, one per search algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Parsed target. `None` when the text was numeric but not an integer,
    /// in which case nothing can match.
    pub target: Option<Value>,
    /// Linear search over the array in its current order.
    pub linear: SearchOutcome,
    /// Binary search over an ascending copy of the array.
    pub binary: SearchOutcome,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linear Search: {}", self.linear)?;
        write!(f, "Binary Search: {}", self.binary)
    }
}

/// Returns the index of the first element equal to `target`.
pub fn linear_search<T: PartialEq>(data: &[T], target: &T) -> SearchOutcome {
    data.iter().position(|v| v == target).into()
}

/// Iterative binary search over inclusive bounds `[0, len - 1]`.
///
/// `data` must be sorted ascending. With duplicate targets the reported index
/// is whichever match the midpoint narrowing reaches first, not necessarily
/// the lowest.
pub fn binary_search<T: Ord>(data: &[T], target: &T) -> SearchOutcome {
    if data.is_empty() {
        return SearchOutcome::NotFound;
    }

    let mut left = 0;
    let mut right = data.len() - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        match data[mid].cmp(target) {
            Ordering::Equal => return SearchOutcome::Found(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                right = mid - 1;
            }
        }
    }
    SearchOutcome::NotFound
}

/// Parses the text of the search field.
///
/// - Empty or blank text is rejected with [`StoreError::EmptySearchTarget`].
/// - Integer text yields `Some(n)`.
/// - Other numeric text (`"3.5"`, `"1e30"`, `"NaN"`) yields `None`: a valid
///   query that matches nothing.
/// - Anything else is rejected with [`StoreError::InvalidSearchTarget`].
pub fn parse_target(text: &str) -> Result<Option<Value>, StoreError> {
    if text.trim().is_empty() {
        return Err(StoreError::EmptySearchTarget);
    }

    match parse_number(text) {
        ParsedNumber::Integer(n) => Ok(Some(n)),
        ParsedNumber::NonIntegral => Ok(None),
        ParsedNumber::Invalid => Err(StoreError::InvalidSearchTarget(text.to_string())),
    }
}

/// Runs both searches for the value in `text`.
///
/// Linear search sees `data` as given; binary search runs on a freshly sorted
/// copy. `data` itself is never reordered.
///
/// # Examples
///
/// ```
/// use sortscope::{search, SearchOutcome};
///
/// let report = search(&[5, 3, 8, 1, 9, 2], "8").unwrap();
/// assert_eq!(report.linear, SearchOutcome::Found(2));
/// assert_eq!(report.binary, SearchOutcome::Found(4));
/// ```
pub fn search(data: &[Value], text: &str) -> Result<SearchReport, StoreError> {
    let target = parse_target(text)?;

    let (linear, binary) = match target {
        Some(t) => {
            let mut ascending = data.to_vec();
            ascending.sort_unstable();
            (linear_search(data, &t), binary_search(&ascending, &t))
        }
        None => (SearchOutcome::NotFound, SearchOutcome::NotFound),
    };

    Ok(SearchReport {
        target,
        linear,
        binary,
    })
}
