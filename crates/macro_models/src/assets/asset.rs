//! Asset definitions and their factor exposures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RegistryError;

/// Asset class tag.
///
/// Only [`AssetClass::Bonds`] may carry a duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    /// Listed equities and equity ETFs
    Equity,
    /// Sovereign and corporate bonds
    Bonds,
    /// Illiquid private funds (LBO, infrastructure, private debt)
    PrivateEquity,
    /// Direct and pooled real estate
    RealEstate,
    /// Precious metals
    Metals,
    /// Energy and other commodities
    Commodities,
    /// Crypto assets
    Crypto,
}

impl AssetClass {
    /// All classes in display order.
    pub const ALL: [AssetClass; 7] = [
        AssetClass::Equity,
        AssetClass::Bonds,
        AssetClass::PrivateEquity,
        AssetClass::RealEstate,
        AssetClass::Metals,
        AssetClass::Commodities,
        AssetClass::Crypto,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Equity => "Equity",
            Self::Bonds => "Bonds",
            Self::PrivateEquity => "Private Equity",
            Self::RealEstate => "Real Estate",
            Self::Metals => "Metals",
            Self::Commodities => "Commodities",
            Self::Crypto => "Crypto",
        }
    }

    /// Whether assets of this class are priced through duration.
    pub fn is_duration_bearing(&self) -> bool {
        matches!(self, Self::Bonds)
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetClass {
    type Err = RegistryError;

    /// Accepts display names and snake_case keys, case-insensitively
    /// (`"Private Equity"`, `"private_equity"`, `"private-equity"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "equity" | "equities" => Ok(Self::Equity),
            "bonds" | "bond" => Ok(Self::Bonds),
            "privateequity" => Ok(Self::PrivateEquity),
            "realestate" => Ok(Self::RealEstate),
            "metals" => Ok(Self::Metals),
            "commodities" => Ok(Self::Commodities),
            "crypto" => Ok(Self::Crypto),
            _ => Err(RegistryError::UnknownClass(s.to_string())),
        }
    }
}

/// Sensitivities of an asset to the four macro channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorLoadings {
    /// Exposure to the growth delta
    pub gdp: f64,
    /// Exposure to the inflation delta
    pub inflation: f64,
    /// Exposure to the rate delta
    pub rates: f64,
    /// Exposure to the equity factor level
    pub equity: f64,
}

impl FactorLoadings {
    /// Create loadings from (gdp, inflation, rates, equity).
    pub const fn new(gdp: f64, inflation: f64, rates: f64, equity: f64) -> Self {
        Self {
            gdp,
            inflation,
            rates,
            equity,
        }
    }
}

/// How the return engine prices an asset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingKind {
    /// Linear factor model around the expected return.
    #[default]
    Standard,
    /// Carry plus mark-to-market from rate changes.
    DurationBased {
        /// Modified duration in years (> 0)
        duration: f64,
    },
}

impl PricingKind {
    /// Duration, or zero for standard pricing.
    pub fn duration(&self) -> f64 {
        match self {
            Self::Standard => 0.0,
            Self::DurationBased { duration } => *duration,
        }
    }
}

/// A tradable asset of the registry.
///
/// # Examples
///
/// ```
/// use macro_models::assets::{Asset, AssetClass, FactorLoadings, PricingKind};
///
/// let bund = Asset::new("Bund 10Y", AssetClass::Bonds, 0.03, 0.05)
///     .with_loadings(FactorLoadings::new(-0.10, -0.50, -0.80, 0.0))
///     .with_duration(8.5);
///
/// assert_eq!(bund.pricing, PricingKind::DurationBased { duration: 8.5 });
/// assert!(bund.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique name (registry key)
    pub name: String,
    /// Asset class
    pub class: AssetClass,
    /// Free-form sub-category tag
    pub sub_category: String,
    /// Base expected annual return (mu)
    pub expected_return: f64,
    /// Idiosyncratic annual volatility (sigma)
    pub volatility: f64,
    /// Macro factor loadings
    pub loadings: FactorLoadings,
    /// Pricing path
    pub pricing: PricingKind,
    /// Lock-up period in years (0 = liquid); used by portfolio accounting
    pub lockup_years: u32,
    /// Early-exit penalty as a fraction of value; used by portfolio accounting
    pub exit_penalty: f64,
}

impl Asset {
    /// Create a liquid, standard-priced asset with zero loadings.
    pub fn new(
        name: impl Into<String>,
        class: AssetClass,
        expected_return: f64,
        volatility: f64,
    ) -> Self {
        Self {
            name: name.into(),
            class,
            sub_category: String::new(),
            expected_return,
            volatility,
            loadings: FactorLoadings::default(),
            pricing: PricingKind::Standard,
            lockup_years: 0,
            exit_penalty: 0.0,
        }
    }

    /// Set the sub-category tag.
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    /// Set the factor loadings.
    pub fn with_loadings(mut self, loadings: FactorLoadings) -> Self {
        self.loadings = loadings;
        self
    }

    /// Price through duration. A zero duration keeps standard pricing.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.pricing = if duration == 0.0 {
            PricingKind::Standard
        } else {
            PricingKind::DurationBased { duration }
        };
        self
    }

    /// Set lock-up and exit penalty.
    pub fn with_liquidity(mut self, lockup_years: u32, exit_penalty: f64) -> Self {
        self.lockup_years = lockup_years;
        self.exit_penalty = exit_penalty;
        self
    }

    /// Whether the asset is priced on the duration path.
    pub fn is_duration_priced(&self) -> bool {
        matches!(self.pricing, PricingKind::DurationBased { .. })
    }

    /// Validate the asset on its own.
    ///
    /// # Errors
    ///
    /// - `DurationOnNonBond` for a duration on a class other than bonds
    /// - `InvalidDuration` for a non-positive or non-finite duration
    /// - `InvalidField` for non-finite numbers, negative volatility or an
    ///   exit penalty outside `[0, 1]`
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let finite_fields = [
            ("expected_return", self.expected_return),
            ("beta_gdp", self.loadings.gdp),
            ("beta_inf", self.loadings.inflation),
            ("beta_rates", self.loadings.rates),
            ("beta_equity", self.loadings.equity),
        ];
        for (field, value) in finite_fields {
            if !value.is_finite() {
                return Err(self.invalid_field(field, value));
            }
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(self.invalid_field("volatility", self.volatility));
        }
        if !(0.0..=1.0).contains(&self.exit_penalty) {
            return Err(self.invalid_field("exit_penalty", self.exit_penalty));
        }

        if let PricingKind::DurationBased { duration } = self.pricing {
            if !(duration.is_finite() && duration > 0.0) {
                return Err(RegistryError::InvalidDuration {
                    asset: self.name.clone(),
                    duration,
                });
            }
            if !self.class.is_duration_bearing() {
                return Err(RegistryError::DurationOnNonBond {
                    asset: self.name.clone(),
                    class: self.class,
                    duration,
                });
            }
        }
        Ok(())
    }

    fn invalid_field(&self, field: &'static str, value: f64) -> RegistryError {
        RegistryError::InvalidField {
            asset: self.name.clone(),
            field,
            value,
        }
    }
}

/// Flat asset record as found in data files.
///
/// Duration is a plain number here; converting into an [`Asset`] turns it into
/// the tagged [`PricingKind`] and rejects a duration on a non-bond class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Unique name
    pub name: String,
    /// Asset class
    pub category: AssetClass,
    /// Sub-category tag
    #[serde(default)]
    pub sub_category: String,
    /// Expected annual return
    pub expected_return: f64,
    /// Annual volatility
    pub volatility: f64,
    /// Growth loading
    #[serde(default)]
    pub beta_gdp: f64,
    /// Inflation loading
    #[serde(default)]
    pub beta_inf: f64,
    /// Rate loading
    #[serde(default)]
    pub beta_rates: f64,
    /// Equity factor loading
    #[serde(default)]
    pub beta_equity: f64,
    /// Duration in years; zero means not duration-priced
    #[serde(default)]
    pub duration: f64,
    /// Lock-up in years
    #[serde(default)]
    pub lockup_years: u32,
    /// Early-exit penalty
    #[serde(default)]
    pub exit_penalty: f64,
}

impl TryFrom<AssetRecord> for Asset {
    type Error = RegistryError;

    fn try_from(record: AssetRecord) -> Result<Self, Self::Error> {
        if record.duration < 0.0 || !record.duration.is_finite() {
            return Err(RegistryError::InvalidDuration {
                asset: record.name,
                duration: record.duration,
            });
        }
        let asset = Asset::new(
            record.name,
            record.category,
            record.expected_return,
            record.volatility,
        )
        .with_sub_category(record.sub_category)
        .with_loadings(FactorLoadings::new(
            record.beta_gdp,
            record.beta_inf,
            record.beta_rates,
            record.beta_equity,
        ))
        .with_duration(record.duration)
        .with_liquidity(record.lockup_years, record.exit_penalty);

        asset.validate()?;
        Ok(asset)
    }
}

impl From<&Asset> for AssetRecord {
    fn from(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            category: asset.class,
            sub_category: asset.sub_category.clone(),
            expected_return: asset.expected_return,
            volatility: asset.volatility,
            beta_gdp: asset.loadings.gdp,
            beta_inf: asset.loadings.inflation,
            beta_rates: asset.loadings.rates,
            beta_equity: asset.loadings.equity,
            duration: asset.pricing.duration(),
            lockup_years: asset.lockup_years,
            exit_penalty: asset.exit_penalty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: AssetClass, duration: f64) -> AssetRecord {
        AssetRecord {
            name: "Test".to_string(),
            category,
            sub_category: String::new(),
            expected_return: 0.04,
            volatility: 0.06,
            beta_gdp: 0.1,
            beta_inf: -0.2,
            beta_rates: -0.5,
            beta_equity: 0.0,
            duration,
            lockup_years: 0,
            exit_penalty: 0.0,
        }
    }

    #[test]
    fn test_bond_record_becomes_duration_priced() {
        let asset = Asset::try_from(record(AssetClass::Bonds, 7.0)).unwrap();
        assert_eq!(asset.pricing, PricingKind::DurationBased { duration: 7.0 });
        assert_eq!(asset.loadings.inflation, -0.2);
    }

    #[test]
    fn test_zero_duration_bond_is_standard() {
        let asset = Asset::try_from(record(AssetClass::Bonds, 0.0)).unwrap();
        assert_eq!(asset.pricing, PricingKind::Standard);
    }

    #[test]
    fn test_duration_on_equity_fails_fast() {
        let err = Asset::try_from(record(AssetClass::Equity, 5.0)).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DurationOnNonBond {
                class: AssetClass::Equity,
                ..
            }
        ));
        assert!(err.to_string().contains("not duration-priced"));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = Asset::try_from(record(AssetClass::Bonds, -1.0)).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDuration { .. }));
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let asset = Asset::new("X", AssetClass::Crypto, 0.1, -0.2);
        assert!(matches!(
            asset.validate(),
            Err(RegistryError::InvalidField { field: "volatility", .. })
        ));

        let asset = Asset::new("X", AssetClass::RealEstate, 0.04, 0.03).with_liquidity(1, 1.5);
        assert!(matches!(
            asset.validate(),
            Err(RegistryError::InvalidField { field: "exit_penalty", .. })
        ));

        let asset = Asset::new("  ", AssetClass::Metals, 0.04, 0.15);
        assert_eq!(asset.validate(), Err(RegistryError::EmptyName));
    }

    #[test]
    fn test_class_parsing() {
        assert_eq!("Private Equity".parse::<AssetClass>().unwrap(), AssetClass::PrivateEquity);
        assert_eq!("real_estate".parse::<AssetClass>().unwrap(), AssetClass::RealEstate);
        assert_eq!("BONDS".parse::<AssetClass>().unwrap(), AssetClass::Bonds);
        assert!(matches!(
            "Options".parse::<AssetClass>(),
            Err(RegistryError::UnknownClass(_))
        ));
    }

    #[test]
    fn test_record_round_trip_through_asset() {
        let original = record(AssetClass::Bonds, 4.0);
        let asset = Asset::try_from(original.clone()).unwrap();
        assert_eq!(AssetRecord::from(&asset), original);
    }

    #[test]
    fn test_record_from_toml_defaults() {
        let record: AssetRecord = toml::from_str(
            r#"
            name = "Gold"
            category = "metals"
            expected_return = 0.045
            volatility = 0.15
            beta_inf = 0.8
            "#,
        )
        .unwrap();
        assert_eq!(record.duration, 0.0);
        assert_eq!(record.beta_gdp, 0.0);
        assert_eq!(record.category, AssetClass::Metals);
    }
}
