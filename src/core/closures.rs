//! Closures that capture values or state from the scope that creates them.

use crate::utils::error::{DrillError, Result};

/// Returns a function that adds `x` to whatever it is given.
///
/// `x` is moved into the closure, so the adder outlives the call that made it.
/// Sums saturate at the `i64` bounds.
pub fn create_adder(x: i64) -> impl Fn(i64) -> i64 {
    move |y| x.saturating_add(y)
}

/// Returns a counter whose count lives inside the closure.
///
/// Each call bumps the count and returns it, starting from 1. Counters
/// created by separate calls never share a count.
pub fn create_counter() -> impl FnMut() -> u64 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

/// Returns a function that removes the element at `index` from the sequence
/// it receives and hands the shortened sequence back.
pub fn create_remover<T>(index: usize) -> impl Fn(Vec<T>) -> Result<Vec<T>> {
    move |mut values| {
        if index >= values.len() {
            return Err(DrillError::IndexOutOfRange {
                index,
                len: values.len(),
            });
        }
        values.remove(index);
        Ok(values)
    }
}
