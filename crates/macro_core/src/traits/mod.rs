//! Core traits.

/// Generic floating-point trait for numeric computations.
///
/// Lets the correlation utilities run on both `f64` and `f32`.
///
/// # Examples
/// ```
/// use macro_core::traits::Float;
///
/// fn mean_reverting_step<T: Float>(mean: T, phi: T, level: T) -> T {
///     mean + phi * (level - mean)
/// }
///
/// let next: f64 = mean_reverting_step(0.03, 0.8, 0.045);
/// assert!((next - 0.042).abs() < 1e-12);
/// ```
pub use num_traits::Float;
