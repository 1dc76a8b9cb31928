//! Ordered, name-keyed collection of validated assets.

use std::collections::HashMap;

use super::{universe, Asset, AssetClass, AssetRecord, RegistryError};

/// Read-only asset registry consumed by the return engine.
///
/// Every asset is validated when the registry is built, so an inconsistent
/// asset (for example a duration on an equity) can never reach pricing.
/// Iteration follows insertion order.
///
/// # Examples
///
/// ```
/// use macro_models::assets::{AssetClass, AssetRegistry};
///
/// let registry = AssetRegistry::default_universe().unwrap();
/// let bonds: Vec<_> = registry.by_class(AssetClass::Bonds).collect();
/// assert!(bonds.iter().all(|a| a.is_duration_priced()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AssetRegistry {
    assets: Vec<Asset>,
    index: HashMap<String, usize>,
}

impl AssetRegistry {
    /// Build a registry, validating every asset.
    ///
    /// # Errors
    ///
    /// The first asset-level validation failure, or `DuplicateAsset`.
    pub fn new(assets: Vec<Asset>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(assets.len());
        for (i, asset) in assets.iter().enumerate() {
            asset.validate()?;
            if index.insert(asset.name.clone(), i).is_some() {
                return Err(RegistryError::DuplicateAsset(asset.name.clone()));
            }
        }
        Ok(Self { assets, index })
    }

    /// Build a registry from flat data-file records.
    pub fn from_records(records: Vec<AssetRecord>) -> Result<Self, RegistryError> {
        let assets = records
            .into_iter()
            .map(Asset::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(assets)
    }

    /// The seventeen-asset teaching universe.
    pub fn default_universe() -> Result<Self, RegistryError> {
        Self::new(universe::default_assets())
    }

    /// Look up an asset by name.
    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.index.get(name).map(|&i| &self.assets[i])
    }

    /// Whether an asset with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Assets of one class, in registry order.
    pub fn by_class(&self, class: AssetClass) -> impl Iterator<Item = &Asset> + '_ {
        self.assets.iter().filter(move |a| a.class == class)
    }

    /// Distinct classes present, in [`AssetClass::ALL`] order.
    pub fn classes(&self) -> Vec<AssetClass> {
        AssetClass::ALL
            .into_iter()
            .filter(|class| self.assets.iter().any(|a| a.class == *class))
            .collect()
    }

    /// Asset names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.assets.iter().map(|a| a.name.as_str())
    }

    /// Registry restricted to `names`, in the order given.
    ///
    /// Unknown and repeated names are skipped.
    pub fn subset<S: AsRef<str>>(&self, names: &[S]) -> Self {
        let mut assets = Vec::with_capacity(names.len());
        let mut index = HashMap::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if index.contains_key(name) {
                continue;
            }
            if let Some(asset) = self.get(name) {
                index.insert(asset.name.clone(), assets.len());
                assets.push(asset.clone());
            }
        }
        Self { assets, index }
    }

    /// Iterate assets in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }

    /// Assets as a slice, in registry order.
    pub fn as_slice(&self) -> &[Asset] {
        &self.assets
    }

    /// Number of assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl<'a> IntoIterator for &'a AssetRegistry {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}
