//! Macro channels and their AR(1) parameters.

use macro_core::types::ConfigError;
use serde::{Deserialize, Serialize};

/// The four macro channels driving asset returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroChannel {
    /// Real GDP growth
    Growth,
    /// Consumer price inflation
    Inflation,
    /// Policy interest rate
    Rate,
    /// Zero-centred risk-on / risk-off equity factor
    Equity,
}

impl MacroChannel {
    /// All channels in shock-vector order.
    pub const ALL: [MacroChannel; 4] = [
        MacroChannel::Growth,
        MacroChannel::Inflation,
        MacroChannel::Rate,
        MacroChannel::Equity,
    ];

    /// Position of the channel in shock vectors and correlation matrices.
    pub fn index(self) -> usize {
        match self {
            Self::Growth => 0,
            Self::Inflation => 1,
            Self::Rate => 2,
            Self::Equity => 3,
        }
    }

    /// Lower-case channel name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Growth => "growth",
            Self::Inflation => "inflation",
            Self::Rate => "rate",
            Self::Equity => "equity",
        }
    }
}

impl std::fmt::Display for MacroChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Long-run mean and persistence of one AR(1) channel.
///
/// ```text
/// x(t) = mu + phi * (x(t-1) - mu) + shock
/// ```
///
/// `phi` close to 1 means a slow return to `mu`; `phi` must stay strictly
/// below 1 for the channel to be stationary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelParams {
    /// Long-run mean level (mu)
    pub long_run_mean: f64,
    /// Persistence coefficient (phi), in [0, 1)
    pub persistence: f64,
}

impl ChannelParams {
    /// Create validated channel parameters.
    ///
    /// # Errors
    ///
    /// - `InvalidPersistence` if `persistence` is not in `[0, 1)`
    /// - `InvalidParameter` if `long_run_mean` is not finite, or non-zero on
    ///   the equity channel
    pub fn new(
        channel: MacroChannel,
        long_run_mean: f64,
        persistence: f64,
    ) -> Result<Self, ConfigError> {
        let params = Self {
            long_run_mean,
            persistence,
        };
        params.validate(channel)?;
        Ok(params)
    }

    /// Validate the parameters for `channel`.
    pub fn validate(&self, channel: MacroChannel) -> Result<(), ConfigError> {
        if !(self.persistence >= 0.0 && self.persistence < 1.0) {
            return Err(ConfigError::InvalidPersistence {
                channel: channel.name(),
                phi: self.persistence,
            });
        }
        if !self.long_run_mean.is_finite() {
            return Err(ConfigError::invalid_parameter(
                "long_run_mean",
                format!("{} mean must be finite, got {}", channel, self.long_run_mean),
            ));
        }
        // The equity factor follows mu + phi * old + shock, which only reverts
        // to its mean when mu is zero.
        if channel == MacroChannel::Equity && self.long_run_mean != 0.0 {
            return Err(ConfigError::invalid_parameter(
                "long_run_mean",
                format!("equity factor is zero-centred, got mean {}", self.long_run_mean),
            ));
        }
        Ok(())
    }
}

/// Parameters of the four-channel macro process.
///
/// Defaults: growth 2% (phi 0.50), inflation 2% (phi 0.60), rate 3% (phi 0.80)
/// and a zero-centred equity factor (phi 0.30).
///
/// Deserialising a partial table keeps the defaults for missing channels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroParams {
    /// GDP growth channel
    pub growth: ChannelParams,
    /// Inflation channel
    pub inflation: ChannelParams,
    /// Policy rate channel
    pub rate: ChannelParams,
    /// Equity risk factor
    pub equity: ChannelParams,
}

impl Default for MacroParams {
    fn default() -> Self {
        Self {
            growth: ChannelParams {
                long_run_mean: 0.02,
                persistence: 0.50,
            },
            inflation: ChannelParams {
                long_run_mean: 0.02,
                persistence: 0.60,
            },
            rate: ChannelParams {
                long_run_mean: 0.03,
                persistence: 0.80,
            },
            equity: ChannelParams {
                long_run_mean: 0.0,
                persistence: 0.30,
            },
        }
    }
}

impl MacroParams {
    /// Parameters for one channel.
    pub fn channel(&self, channel: MacroChannel) -> &ChannelParams {
        match channel {
            MacroChannel::Growth => &self.growth,
            MacroChannel::Inflation => &self.inflation,
            MacroChannel::Rate => &self.rate,
            MacroChannel::Equity => &self.equity,
        }
    }

    /// Validate every channel, reporting the first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        MacroChannel::ALL
            .iter()
            .try_for_each(|&channel| self.channel(channel).validate(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_order() {
        for (i, channel) in MacroChannel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
        assert_eq!(MacroChannel::Rate.to_string(), "rate");
    }

    #[test]
    fn test_default_params_are_valid() {
        let params = MacroParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.rate.long_run_mean, 0.03);
        assert_eq!(params.channel(MacroChannel::Inflation).persistence, 0.60);
    }

    #[test]
    fn test_unit_root_rejected() {
        let err = ChannelParams::new(MacroChannel::Rate, 0.03, 1.0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPersistence {
                channel: "rate",
                phi: 1.0
            }
        );
    }

    #[test]
    fn test_negative_and_nan_persistence_rejected() {
        assert!(ChannelParams::new(MacroChannel::Growth, 0.02, -0.1).is_err());
        assert!(ChannelParams::new(MacroChannel::Growth, 0.02, f64::NAN).is_err());
        assert!(ChannelParams::new(MacroChannel::Growth, f64::INFINITY, 0.5).is_err());
        assert!(ChannelParams::new(MacroChannel::Growth, 0.02, 0.0).is_ok());
    }

    #[test]
    fn test_equity_mean_must_be_zero() {
        let err = ChannelParams::new(MacroChannel::Equity, 0.05, 0.3).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter { name: "long_run_mean", .. }
        ));
        assert!(ChannelParams::new(MacroChannel::Equity, 0.0, 0.3).is_ok());
        // Other channels keep free means.
        assert!(ChannelParams::new(MacroChannel::Growth, 0.05, 0.3).is_ok());

        let mut params = MacroParams::default();
        params.equity.long_run_mean = -0.01;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_reports_offending_channel() {
        let mut params = MacroParams::default();
        params.equity.persistence = 1.2;
        match params.validate() {
            Err(ConfigError::InvalidPersistence { channel, .. }) => assert_eq!(channel, "equity"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
