//! Correlated macro shock generation.
//!
//! One shock vector is drawn per simulated period:
//!
//! ```text
//! z    ~ N(0, I_4)          four independent draws
//! corr = L * z              L = chol(C)
//! s_k  = sigma_k * corr_k   per-channel scaling
//! ```
//!
//! Over many draws the channels' empirical correlation converges to `C` and
//! each channel's standard deviation to `sigma_k`.

use macro_core::math::{CholeskyFactor, CorrelationMatrix};
use macro_core::rng::RandomSource;
use macro_core::types::{ConfigError, RngError};
use serde::{Deserialize, Serialize};

use crate::macro_state::MacroChannel;

/// Default correlation of (growth, inflation, rate, equity) shocks.
///
/// Growth moves with equity, inflation with rates (central bank reaction),
/// and rates against both growth and equity.
#[rustfmt::skip]
pub const MACRO_CORRELATION: [[f64; 4]; 4] = [
    [ 1.00, 0.30, -0.20,  0.60],
    [ 0.30, 1.00,  0.50,  0.00],
    [-0.20, 0.50,  1.00, -0.40],
    [ 0.60, 0.00, -0.40,  1.00],
];

/// Raw macro shocks for one period, one per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShockVector {
    /// Growth shock
    pub growth: f64,
    /// Inflation shock
    pub inflation: f64,
    /// Rate shock
    pub rate: f64,
    /// Equity factor shock
    pub equity: f64,
}

impl ShockVector {
    /// Create a shock vector from its four components.
    pub const fn new(growth: f64, inflation: f64, rate: f64, equity: f64) -> Self {
        Self {
            growth,
            inflation,
            rate,
            equity,
        }
    }

    /// The all-zero shock (pure mean reversion).
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Component for one channel.
    pub fn get(&self, channel: MacroChannel) -> f64 {
        self.as_array()[channel.index()]
    }

    /// Components in channel order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.growth, self.inflation, self.rate, self.equity]
    }

    /// Build from components in channel order.
    pub fn from_array(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}

/// Target standard deviation of each channel's shock.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShockVolatilities {
    /// Growth shock std-dev
    pub growth: f64,
    /// Inflation shock std-dev
    pub inflation: f64,
    /// Rate shock std-dev
    pub rate: f64,
    /// Equity shock std-dev
    pub equity: f64,
}

impl Default for ShockVolatilities {
    fn default() -> Self {
        Self {
            growth: 0.025,
            inflation: 0.015,
            rate: 0.020,
            equity: 0.15,
        }
    }
}

impl ShockVolatilities {
    /// Components in channel order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.growth, self.inflation, self.rate, self.equity]
    }

    /// Each std-dev must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for channel in MacroChannel::ALL {
            let sigma = self.as_array()[channel.index()];
            if !(sigma.is_finite() && sigma >= 0.0) {
                return Err(ConfigError::invalid_parameter(
                    "shock_volatility",
                    format!("{} std-dev must be finite and >= 0, got {}", channel, sigma),
                ));
            }
        }
        Ok(())
    }
}

/// Draws correlated shock vectors.
///
/// The Cholesky factor is computed once in [`ShockGenerator::new`]; the
/// generator holds no other state, so every draw depends only on the
/// random source passed in.
#[derive(Clone, Debug)]
pub struct ShockGenerator {
    cholesky: CholeskyFactor<f64>,
    volatilities: ShockVolatilities,
}

impl ShockGenerator {
    /// Create a generator for a 4x4 correlation matrix.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Correlation` if the matrix is not 4x4 or not positive definite
    /// - `ConfigError::InvalidParameter` for bad volatilities
    pub fn new(
        correlation: &CorrelationMatrix<f64>,
        volatilities: ShockVolatilities,
    ) -> Result<Self, ConfigError> {
        if correlation.dim() != MacroChannel::ALL.len() {
            return Err(ConfigError::invalid_parameter(
                "correlation",
                format!("expected a 4x4 matrix, got {0}x{0}", correlation.dim()),
            ));
        }
        volatilities.validate()?;
        let cholesky = correlation.cholesky()?;
        Ok(Self {
            cholesky,
            volatilities,
        })
    }

    /// Generator with the default correlation matrix and volatilities.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        let correlation = CorrelationMatrix::from_rows(&MACRO_CORRELATION)?;
        Self::new(&correlation, ShockVolatilities::default())
    }

    /// Target volatilities.
    pub fn volatilities(&self) -> &ShockVolatilities {
        &self.volatilities
    }

    /// Cholesky factor of the configured correlation matrix.
    pub fn cholesky(&self) -> &CholeskyFactor<f64> {
        &self.cholesky
    }

    /// Draw one correlated shock vector, consuming exactly four normals.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<ShockVector, RngError> {
        let mut z = [0.0; 4];
        rng.fill_normal(&mut z)?;
        Ok(self.correlate(&z))
    }

    /// Map four independent normals to a scaled, correlated shock vector.
    pub fn correlate(&self, z: &[f64; 4]) -> ShockVector {
        let corr = self.cholesky.transform(z);
        let sigma = self.volatilities.as_array();
        ShockVector::from_array([
            corr[0] * sigma[0],
            corr[1] * sigma[1],
            corr[2] * sigma[2],
            corr[3] * sigma[3],
        ])
    }
}

/// One-shot shock draw: factor `correlation`, then draw once from `rng`.
///
/// Sessions that draw every period should build a [`ShockGenerator`] once instead.
pub fn generate_shocks<R: RandomSource + ?Sized>(
    correlation: &CorrelationMatrix<f64>,
    volatilities: ShockVolatilities,
    rng: &mut R,
) -> Result<ShockVector, ShockError> {
    let generator = ShockGenerator::new(correlation, volatilities)?;
    Ok(generator.draw(rng)?)
}

/// Failure of a one-shot [`generate_shocks`] call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShockError {
    /// Setup rejected the correlation matrix or volatilities.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The random source failed.
    #[error(transparent)]
    Rng(#[from] RngError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use macro_core::rng::{ScriptedSource, SimRng};
    use macro_core::types::CorrelationError;

    fn empirical_stats(draws: &[[f64; 4]]) -> ([f64; 4], [[f64; 4]; 4]) {
        let n = draws.len() as f64;
        let mut mean = [0.0; 4];
        for d in draws {
            for k in 0..4 {
                mean[k] += d[k] / n;
            }
        }
        let mut cov = [[0.0; 4]; 4];
        for d in draws {
            for i in 0..4 {
                for j in 0..4 {
                    cov[i][j] += (d[i] - mean[i]) * (d[j] - mean[j]) / n;
                }
            }
        }
        let std = [
            cov[0][0].sqrt(),
            cov[1][1].sqrt(),
            cov[2][2].sqrt(),
            cov[3][3].sqrt(),
        ];
        let mut corr = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                corr[i][j] = cov[i][j] / (std[i] * std[j]);
            }
        }
        (std, corr)
    }

    #[test]
    fn test_zero_draws_give_zero_shock() {
        let generator = ShockGenerator::with_defaults().unwrap();
        let mut rng = ScriptedSource::zeros(4);
        assert_eq!(generator.draw(&mut rng).unwrap(), ShockVector::zero());
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_unit_growth_draw_spreads_by_first_column() {
        // z = e1 => corr = first column of L = first column of C.
        let generator = ShockGenerator::with_defaults().unwrap();
        let shock = generator.correlate(&[1.0, 0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(shock.growth, 0.025, epsilon = 1e-15);
        assert_abs_diff_eq!(shock.inflation, 0.30 * 0.015, epsilon = 1e-15);
        assert_abs_diff_eq!(shock.rate, -0.20 * 0.020, epsilon = 1e-15);
        assert_abs_diff_eq!(shock.equity, 0.60 * 0.15, epsilon = 1e-15);
    }

    #[test]
    fn test_empirical_correlation_and_std_converge() {
        let generator = ShockGenerator::with_defaults().unwrap();
        let mut rng = SimRng::from_seed(20240601);
        let draws: Vec<[f64; 4]> = (0..200_000)
            .map(|_| generator.draw(&mut rng).unwrap().as_array())
            .collect();

        let (std, corr) = empirical_stats(&draws);
        let target_std = ShockVolatilities::default().as_array();
        for k in 0..4 {
            assert!(
                (std[k] / target_std[k] - 1.0).abs() < 0.02,
                "channel {} std {} vs {}",
                k,
                std[k],
                target_std[k]
            );
        }
        for i in 0..4 {
            for j in 0..4 {
                assert!(
                    (corr[i][j] - MACRO_CORRELATION[i][j]).abs() < 0.02,
                    "corr[{}][{}] = {} vs {}",
                    i,
                    j,
                    corr[i][j],
                    MACRO_CORRELATION[i][j]
                );
            }
        }
    }

    #[test]
    fn test_non_positive_definite_rejected() {
        #[rustfmt::skip]
        let corr = CorrelationMatrix::from_rows(&[
            [ 1.0, 0.9,  0.9, 0.0],
            [ 0.9, 1.0, -0.9, 0.0],
            [ 0.9, -0.9, 1.0, 0.0],
            [ 0.0, 0.0,  0.0, 1.0],
        ]).unwrap();
        let err = ShockGenerator::new(&corr, ShockVolatilities::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Correlation(CorrelationError::NotPositiveDefinite)
        );
    }

    #[test]
    fn test_wrong_dimension_rejected() {
        let corr = CorrelationMatrix::<f64>::identity(3);
        let err = ShockGenerator::new(&corr, ShockVolatilities::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "correlation", .. }));
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let vols = ShockVolatilities {
            rate: -0.01,
            ..ShockVolatilities::default()
        };
        let corr = CorrelationMatrix::<f64>::identity(4);
        assert!(ShockGenerator::new(&corr, vols).is_err());
    }

    #[test]
    fn test_generate_shocks_surfaces_exhaustion() {
        let corr = CorrelationMatrix::from_rows(&MACRO_CORRELATION).unwrap();
        let mut rng = ScriptedSource::zeros(3);
        let err = generate_shocks(&corr, ShockVolatilities::default(), &mut rng).unwrap_err();
        assert_eq!(err, ShockError::Rng(RngError::Exhausted { supplied: 3 }));
    }

    #[test]
    fn test_generate_shocks_is_reproducible() {
        let corr = CorrelationMatrix::from_rows(&MACRO_CORRELATION).unwrap();
        let a = generate_shocks(&corr, ShockVolatilities::default(), &mut SimRng::from_seed(5));
        let b = generate_shocks(&corr, ShockVolatilities::default(), &mut SimRng::from_seed(5));
        assert_eq!(a, b);
    }
}
