//! Negative-sum scan between a sequence's extremes
//!
//! Task 1 of the coursework set: locate the positions of the maximum and
//! minimum values of a numeric sequence and sum the strictly negative
//! elements strictly between them.

use serde::Serialize;
use std::ops::Add;

/// Outcome of a full scan over a sequence
///
/// Carries the extremum positions alongside the negative sum so callers can
/// report which indices bounded the summed range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport<T> {
    /// Index of the first occurrence of the maximum value
    pub max_index: usize,
    /// Index of the first occurrence of the minimum value
    pub min_index: usize,
    /// Sum of strictly negative elements strictly between the two indices
    pub sum: T,
}

/// Scan a sequence and report its extremum positions and negative sum.
///
/// Returns `None` for an empty sequence. Ties on the maximum or minimum are
/// resolved to the first occurrence in forward order; when every element is
/// equal both indices coincide and the summed range is empty.
pub fn scan<T>(values: &[T]) -> Option<ScanReport<T>>
where
    T: Copy + PartialOrd + Default + Add<Output = T>,
{
    let first = *values.first()?;
    let mut max_index = 0;
    let mut max_value = first;
    let mut min_index = 0;
    let mut min_value = first;

    for (index, &value) in values.iter().enumerate().skip(1) {
        if value > max_value {
            max_value = value;
            max_index = index;
        }
        if value < min_value {
            min_value = value;
            min_index = index;
        }
    }

    let start = max_index.min(min_index);
    let end = max_index.max(min_index);

    // Exclusive on both ends; adjacent or equal indices leave the sum at zero.
    let mut sum = T::default();
    if end > start + 1 {
        for &value in &values[start + 1..end] {
            if value < T::default() {
                sum = sum + value;
            }
        }
    }

    Some(ScanReport {
        max_index,
        min_index,
        sum,
    })
}

/// Sum the strictly negative elements strictly between the first occurrences
/// of the maximum and minimum values.
///
/// Returns zero for an empty sequence, for an empty range (extremes adjacent
/// or coinciding), and when the range holds no negative elements; the three
/// degenerate cases are deliberately not distinguished.
pub fn sum_between_extremes<T>(values: &[T]) -> T
where
    T: Copy + PartialOrd + Default + Add<Output = T>,
{
    scan(values).map(|report| report.sum).unwrap_or_default()
}
