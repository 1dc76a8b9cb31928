//! Per-period return table.

use serde::Serialize;

/// Return of one named asset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssetReturn {
    pub name: String,
    pub value: f64,
}

/// Returns of every asset for one period, in registry order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AssetReturns {
    entries: Vec<AssetReturn>,
}

impl AssetReturns {
    pub(crate) fn from_entries(entries: Vec<(String, f64)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, value)| AssetReturn { name, value })
                .collect(),
        }
    }

    /// Return of the named asset, if priced this period.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }

    /// Iterate `(name, return)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|e| (e.name.as_str(), e.value))
    }

    /// Entries as a slice.
    pub fn as_slice(&self) -> &[AssetReturn] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best and worst performers, or `None` for an empty table.
    pub fn extremes(&self) -> Option<(&AssetReturn, &AssetReturn)> {
        let best = self
            .entries
            .iter()
            .max_by(|a, b| a.value.total_cmp(&b.value))?;
        let worst = self
            .entries
            .iter()
            .min_by(|a, b| a.value.total_cmp(&b.value))?;
        Some((best, worst))
    }

    /// Weighted return of a portfolio.
    ///
    /// Weights are applied as given; names not priced this period contribute
    /// nothing.
    pub fn weighted<S: AsRef<str>>(&self, weights: &[(S, f64)]) -> f64 {
        weights
            .iter()
            .filter_map(|(name, w)| self.get(name.as_ref()).map(|r| r * w))
            .sum()
    }
}
