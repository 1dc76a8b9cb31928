//! Injectable source of standard normal draws.

use crate::types::RngError;

/// Source of independent standard normal variates (mean 0, std 1).
///
/// Implementations must either return a draw or fail with [`RngError`];
/// they must never substitute a default value.
pub trait RandomSource {
    /// Draw one standard normal variate.
    fn next_normal(&mut self) -> Result<f64, RngError>;

    /// Fill `buffer` with standard normal variates, in order.
    ///
    /// Stops at the first failure; entries after the failing index are left untouched.
    fn fill_normal(&mut self, buffer: &mut [f64]) -> Result<(), RngError> {
        for value in buffer.iter_mut() {
            *value = self.next_normal()?;
        }
        Ok(())
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_normal(&mut self) -> Result<f64, RngError> {
        (**self).next_normal()
    }

    #[inline]
    fn fill_normal(&mut self, buffer: &mut [f64]) -> Result<(), RngError> {
        (**self).fill_normal(buffer)
    }
}
