//! Aggregate rating arithmetic for the food catalog.

/// Arithmetic mean of a food's review ratings, rounded to one decimal place,
/// half away from zero.
///
/// Callers never pass an empty slice: when the last review of a food is
/// deleted, the food's rating is reset to the literal `0.0` instead of
/// averaging nothing.
pub fn average(ratings: &[i64]) -> f64 {
    let total: i64 = ratings.iter().sum();
    let mean = total as f64 / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}
