//! Period returns for every asset in the universe.
//!
//! Two pricing paths, selected by [`PricingKind`](macro_models::assets::PricingKind):
//! - standard factor model (expected return plus macro loadings)
//! - duration model for bonds (carry plus mark-to-market)
//!
//! Both add independent idiosyncratic noise and clamp to the return bounds.

mod asset_returns;
mod engine;

pub use asset_returns::{AssetReturn, AssetReturns};
pub use engine::{duration_effect, price_asset, ReturnComponents, ReturnEngine};
