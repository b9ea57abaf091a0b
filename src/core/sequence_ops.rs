//! Filter, map and reduce over number sequences, each written the long way
//! first and then with iterator adapters.

use crate::utils::error::{DrillError, Result};

pub const DEFAULT_THRESHOLD: i64 = 10;

/// Hand-written loop: keeps elements lower than ten, in order.
pub fn keep_lower_than_ten_loop(values: &[i64]) -> Vec<i64> {
    let mut kept = Vec::new();
    for &value in values {
        if value < DEFAULT_THRESHOLD {
            kept.push(value);
        }
    }
    kept
}

pub fn is_lower_than_ten(value: &i64) -> bool {
    *value < DEFAULT_THRESHOLD
}

/// Same as [`keep_lower_than_ten_loop`], with a named predicate handed to `filter`.
pub fn keep_lower_than_ten_filter(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(is_lower_than_ten).collect()
}

pub fn keep_lower_than(values: &[i64], threshold: i64) -> Vec<i64> {
    values.iter().copied().filter(|v| *v < threshold).collect()
}

pub fn negate_all(values: &[i64]) -> Result<Vec<i64>> {
    values
        .iter()
        .map(|v| {
            v.checked_neg().ok_or_else(|| DrillError::Overflow {
                operation: format!("negating {}", v),
            })
        })
        .collect()
}

/// Reduce without a seed: `None` for an empty slice.
///
/// A running sum that leaves the `i64` range is a [`DrillError::Overflow`].
pub fn array_sum(values: &[i64]) -> Result<Option<i64>> {
    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    iter.try_fold(first, checked_sum).map(Some)
}

pub fn sum_with_initial(values: &[i64], initial: i64) -> Result<i64> {
    values.iter().copied().try_fold(initial, checked_sum)
}

fn checked_sum(acc: i64, value: i64) -> Result<i64> {
    acc.checked_add(value).ok_or_else(|| DrillError::Overflow {
        operation: format!("adding {} to {}", value, acc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i64; 9] = [84, 2, -9, 42, 10, -10, 17, 54, 3];

    #[test]
    fn test_filter_variants_agree() {
        let expected = vec![2, -9, -10, 3];
        assert_eq!(keep_lower_than_ten_loop(&SAMPLE), expected);
        assert_eq!(keep_lower_than_ten_filter(&SAMPLE), expected);
        assert_eq!(keep_lower_than(&SAMPLE, 10), expected);
    }

    #[test]
    fn test_keep_lower_than_custom_threshold() {
        assert_eq!(keep_lower_than(&SAMPLE, 0), vec![-9, -10]);
        assert!(keep_lower_than(&SAMPLE, -100).is_empty());
    }

    #[test]
    fn test_negate_all() {
        assert_eq!(
            negate_all(&SAMPLE).unwrap(),
            vec![-84, -2, 9, -42, -10, 10, -17, -54, -3]
        );
        assert!(matches!(
            negate_all(&[1, i64::MIN]),
            Err(DrillError::Overflow { .. })
        ));
    }

    #[test]
    fn test_sums() {
        let values = [3, 5, -1, 6, 12];
        assert_eq!(array_sum(&values).unwrap(), Some(25));
        assert_eq!(sum_with_initial(&values, 0).unwrap(), 25);
        assert_eq!(sum_with_initial(&values, 100).unwrap(), 125);
    }

    #[test]
    fn test_empty_sums() {
        assert_eq!(array_sum(&[]).unwrap(), None);
        assert_eq!(sum_with_initial(&[], 7).unwrap(), 7);
    }

    #[test]
    fn test_sum_overflow() {
        assert!(array_sum(&[i64::MAX, 1]).is_err());
        assert!(sum_with_initial(&[1], i64::MAX).is_err());
    }
}
