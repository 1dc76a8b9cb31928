//! Default teaching universe.
//!
//! Expected returns and volatilities are prudent long-run assumptions; loadings
//! follow the usual macro intuition (equities pro-cyclical and rate-sensitive,
//! sovereigns a haven, gold an inflation hedge, crypto strongly risk-on).

use super::{Asset, AssetClass, FactorLoadings};

pub(super) fn default_assets() -> Vec<Asset> {
    use AssetClass::*;

    vec![
        // Equity
        Asset::new("ETF World (MSCI)", Equity, 0.07, 0.15)
            .with_sub_category("ETF")
            .with_loadings(FactorLoadings::new(1.0, 0.10, -0.45, 1.0)),
        Asset::new("US Tech Equities", Equity, 0.10, 0.25)
            .with_sub_category("Direct")
            .with_loadings(FactorLoadings::new(1.2, 0.0, -0.70, 1.2)),
        Asset::new("Europe Value Equities", Equity, 0.06, 0.16)
            .with_sub_category("Direct")
            .with_loadings(FactorLoadings::new(0.9, 0.25, -0.25, 0.9)),
        // Bonds
        Asset::new("US Gov Bonds (10Y)", Bonds, 0.035, 0.06)
            .with_sub_category("Sovereign AAA")
            .with_loadings(FactorLoadings::new(-0.10, -0.60, -0.90, 0.0))
            .with_duration(7.0),
        Asset::new("Euro Gov Bonds (10Y)", Bonds, 0.030, 0.05)
            .with_sub_category("Sovereign AA")
            .with_loadings(FactorLoadings::new(-0.10, -0.50, -0.80, 0.0))
            .with_duration(7.0),
        Asset::new("Corp Bonds IG", Bonds, 0.045, 0.06)
            .with_sub_category("Corporate IG")
            .with_loadings(FactorLoadings::new(0.30, -0.20, -0.60, 0.25))
            .with_duration(5.0),
        Asset::new("High Yield Bonds", Bonds, 0.065, 0.13)
            .with_sub_category("Corporate HY")
            .with_loadings(FactorLoadings::new(0.70, -0.10, -0.40, 0.50))
            .with_duration(4.0),
        // Private equity (illiquid)
        Asset::new("LBO Fund Vintage 2024", PrivateEquity, 0.13, 0.20)
            .with_sub_category("LBO")
            .with_loadings(FactorLoadings::new(1.3, 0.25, -0.80, 1.1))
            .with_liquidity(5, 0.30),
        Asset::new("Infra Green Fund", PrivateEquity, 0.08, 0.10)
            .with_sub_category("Infrastructure")
            .with_loadings(FactorLoadings::new(0.35, 0.50, -0.50, 0.4))
            .with_liquidity(10, 0.20),
        // Mostly floating-rate: no duration pricing outside the bond class.
        Asset::new("Private Debt Senior", PrivateEquity, 0.07, 0.08)
            .with_sub_category("Private Debt")
            .with_loadings(FactorLoadings::new(0.50, -0.15, -0.50, 0.35))
            .with_liquidity(3, 0.10),
        // Real estate
        Asset::new("Paris Office REIT", RealEstate, 0.045, 0.04)
            .with_sub_category("Office")
            .with_loadings(FactorLoadings::new(0.50, 0.50, -0.45, 0.5))
            .with_liquidity(1, 0.05),
        Asset::new("Direct Residential", RealEstate, 0.04, 0.03)
            .with_sub_category("Residential")
            .with_loadings(FactorLoadings::new(0.30, 0.60, -0.60, 0.3))
            .with_liquidity(0, 0.08),
        // Metals and commodities
        Asset::new("Gold Bullion", Metals, 0.045, 0.15)
            .with_sub_category("Physical Gold")
            .with_loadings(FactorLoadings::new(-0.20, 0.80, -0.35, -0.15)),
        Asset::new("Silver", Metals, 0.06, 0.25)
            .with_sub_category("Silver")
            .with_loadings(FactorLoadings::new(0.20, 0.70, -0.20, 0.25)),
        Asset::new("Oil ETC", Commodities, 0.05, 0.30)
            .with_sub_category("Energy")
            .with_loadings(FactorLoadings::new(0.80, 1.00, 0.0, 0.4)),
        // Crypto
        Asset::new("Bitcoin", Crypto, 0.15, 0.70)
            .with_sub_category("BTC")
            .with_loadings(FactorLoadings::new(0.50, 0.25, -0.90, 0.85)),
        Asset::new("Ethereum", Crypto, 0.20, 0.80)
            .with_sub_category("ETH")
            .with_loadings(FactorLoadings::new(0.50, 0.10, -1.00, 0.90)),
    ]
}
