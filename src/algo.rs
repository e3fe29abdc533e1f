//! The five comparison sorts and the timed entry point.
//!
//! Every sort takes a slice, copies it, and returns the sorted copy. Tie-break rules
//! are fixed and observable on inputs with equal keys:
//! - **Bubble** and **Insertion** only move an element past a strictly greater one (stable).
//! - **Selection** picks the first occurrence of the minimum.
//! - **Merge** takes from the left run only on a strict `<`.
//! - **Quick** uses a Lomuto partition with the last element as pivot.
//!
//! The main entry point is [`sort`], which also measures wall-clock time.

use crate::core::Algorithm;
use std::time::{Duration, Instant};

/// Output of a timed sort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortRun<T> {
    pub algorithm: Algorithm,
    pub result: Vec<T>,
    /// Time spent inside the sort call only.
    pub elapsed: Duration,
}

impl<T> SortRun<T> {
    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Elapsed milliseconds with two decimals, e.g. `"0.42"`.
    pub fn elapsed_display(&self) -> String {
        format!("{:.2}", self.elapsed_ms())
    }
}

/// Sorts a copy of `data` with `algorithm` and measures how long the sort took.
///
/// The measurement covers exactly the sort call.
///
/// # Examples
///
/// ```
/// use sortscope::{sort, Algorithm};
///
/// let run = sort(Algorithm::Merge, &[5, 3, 8, 1, 9, 2]);
/// assert_eq!(run.result, vec![1, 2, 3, 5, 8, 9]);
/// assert!(run.elapsed_ms() >= 0.0);
/// ```
pub fn sort<T: Ord + Clone>(algorithm: Algorithm, data: &[T]) -> SortRun<T> {
    let start = Instant::now();
    let result = algorithm.sort(data);
    let elapsed = start.elapsed();

    SortRun {
        algorithm,
        result,
        elapsed,
    }
}

/// Returns `true` if `data` is in non-decreasing order.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Bubble sort. Each pass shrinks the unsorted suffix by one.
pub fn bubble_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    let len = sorted.len();

    for i in 0..len.saturating_sub(1) {
        for j in 0..len - i - 1 {
            if sorted[j] > sorted[j + 1] {
                sorted.swap(j, j + 1);
            }
        }
    }
    sorted
}

/// Selection sort. Ties for the minimum go to the lowest index.
pub fn selection_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    let len = sorted.len();

    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..len {
            if sorted[j] < sorted[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            sorted.swap(i, min_index);
        }
    }
    sorted
}

/// Top-down merge sort, splitting at `len / 2`.
pub fn merge_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    let left = merge_sort(&data[..mid]);
    let right = merge_sort(&data[mid..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Strict `<`: on a tie the right element goes first.
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l < r,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        result.extend(next);
    }

    result.extend(left);
    result.extend(right);
    result
}

/// Quicksort with a Lomuto partition around the last element.
///
/// Worst case is O(N^2) on sorted or all-equal input, but the stack stays
/// O(log N): only the smaller partition is recursed into.
pub fn quick_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    quick_sort_in_place(&mut sorted);
    sorted
}

fn quick_sort_in_place<T: Ord>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let pivot = lomuto_partition(arr);
        let (left, right) = std::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort_in_place(left);
            arr = right;
        } else {
            quick_sort_in_place(right);
            arr = left;
        }
    }
}

/// Moves every element strictly less than the pivot (`arr[len - 1]`) to the front,
/// then places the pivot right after them. Returns the pivot's final index.
fn lomuto_partition<T: Ord>(arr: &mut [T]) -> usize {
    let high = arr.len() - 1;
    let mut boundary = 0;

    for j in 0..high {
        if arr[j] < arr[high] {
            arr.swap(boundary, j);
            boundary += 1;
        }
    }
    arr.swap(boundary, high);
    boundary
}

/// Insertion sort. An element only moves past strictly greater predecessors.
pub fn insertion_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();

    for i in 1..sorted.len() {
        let mut j = i;
        while j > 0 && sorted[j - 1] > sorted[i] {
            j -= 1;
        }
        sorted[j..=i].rotate_right(1);
    }
    sorted
}
