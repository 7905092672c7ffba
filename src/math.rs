//! Math utility functions.

use num_traits::{Float, NumCast};

/// The arithmetic mean of the given values, or `None` if there are none.
pub fn mean<T: Float>(values: impl IntoIterator<Item = T>) -> Option<T> {
    let (sum, count) = values
        .into_iter()
        .fold((T::zero(), 0_usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return None;
    }

    <T as NumCast>::from(count).map(|count| sum / count)
}

/// The mean of integer values, truncated toward zero.
pub fn truncated_mean(values: impl IntoIterator<Item = u64>) -> Option<u64> {
    let (sum, count) = values
        .into_iter()
        .fold((0_u64, 0_u64), |(sum, count), v| (sum + v, count + 1));

    sum.checked_div(count)
}
