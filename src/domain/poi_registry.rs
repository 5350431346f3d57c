//! Concurrent point-of-interest storage.
//!
//! [`PoiRegistry`] stores all registered POIs in a `HashMap` behind a
//! single [`tokio::sync::RwLock`]. Entries are immutable after insertion,
//! so readers never contend with in-place mutation; the write lock is
//! taken only to insert or remove.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{Poi, PoiId};
use crate::error::GatewayError;

/// Central store for all registered points of interest.
///
/// # Invariant
///
/// At most one POI per name. [`PoiRegistry::insert`] enforces this by
/// rejecting duplicates with [`GatewayError::DuplicatePoi`]; the first
/// registration wins.
#[derive(Debug)]
pub struct PoiRegistry {
    pois: RwLock<HashMap<PoiId, Poi>>,
}

impl PoiRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pois: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a new POI into the registry.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DuplicatePoi`] if a POI with the same name
    /// is already registered.
    pub async fn insert(&self, poi: Poi) -> Result<PoiId, GatewayError> {
        let mut map = self.pois.write().await;
        if map.values().any(|existing| existing.name == poi.name) {
            return Err(GatewayError::DuplicatePoi(poi.name));
        }
        let poi_id = poi.poi_id;
        map.insert(poi_id, poi);
        Ok(poi_id)
    }

    /// Returns a copy of the POI with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PoiNotFound`] if no POI with the given ID
    /// exists.
    pub async fn get(&self, poi_id: PoiId) -> Result<Poi, GatewayError> {
        let map = self.pois.read().await;
        map.get(&poi_id)
            .cloned()
            .ok_or(GatewayError::PoiNotFound(*poi_id.as_uuid()))
    }

    /// Removes a POI from the registry, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PoiNotFound`] if no POI with the given ID
    /// exists.
    pub async fn remove(&self, poi_id: PoiId) -> Result<Poi, GatewayError> {
        let mut map = self.pois.write().await;
        map.remove(&poi_id)
            .ok_or(GatewayError::PoiNotFound(*poi_id.as_uuid()))
    }

    /// Returns all registered POIs sorted by name.
    pub async fn list(&self) -> Vec<Poi> {
        let map = self.pois.read().await;
        let mut pois: Vec<Poi> = map.values().cloned().collect();
        pois.sort_by(|a, b| a.name.cmp(&b.name));
        pois
    }

    /// Returns the number of registered POIs.
    pub async fn len(&self) -> usize {
        self.pois.read().await.len()
    }

    /// Returns `true` if the registry contains no POIs.
    pub async fn is_empty(&self) -> bool {
        self.pois.read().await.is_empty()
    }
}

impl Default for PoiRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn make_poi(name: &str) -> Poi {
        Poi::new(name.to_string(), Position::new(0.0, 64.0, 0.0))
    }

    #[tokio::test]
    async fn insert_and_get() {
        let registry = PoiRegistry::new();
        let poi = make_poi("home");
        let id = poi.poi_id;

        let result = registry.insert(poi).await;
        assert!(result.is_ok());

        let fetched = registry.get(id).await;
        let Ok(fetched) = fetched else {
            panic!("poi not found");
        };
        assert_eq!(fetched.name, "home");
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let registry = PoiRegistry::new();
        let first = make_poi("spawn");
        let first_id = first.poi_id;
        let _ = registry.insert(first).await;

        let result = registry.insert(make_poi("spawn")).await;
        assert!(matches!(result, Err(GatewayError::DuplicatePoi(_))));

        // The first registration survives.
        assert!(registry.get(first_id).await.is_ok());
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn get_nonexistent_returns_error() {
        let registry = PoiRegistry::new();
        let result = registry.get(PoiId::new()).await;
        assert!(matches!(result, Err(GatewayError::PoiNotFound(_))));
    }

    #[tokio::test]
    async fn remove_returns_poi() {
        let registry = PoiRegistry::new();
        let poi = make_poi("quarry");
        let id = poi.poi_id;
        let _ = registry.insert(poi).await;

        let removed = registry.remove(id).await;
        assert!(removed.is_ok());
        assert!(registry.get(id).await.is_err());
    }

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        let registry = PoiRegistry::new();
        let _ = registry.insert(make_poi("zinc_mine")).await;
        let _ = registry.insert(make_poi("base")).await;
        let _ = registry.insert(make_poi("farm")).await;

        let names: Vec<String> = registry.list().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["base", "farm", "zinc_mine"]);
    }

    #[tokio::test]
    async fn len_and_is_empty() {
        let registry = PoiRegistry::new();
        assert!(registry.is_empty().await);
        assert_eq!(registry.len().await, 0);

        let _ = registry.insert(make_poi("home")).await;
        assert!(!registry.is_empty().await);
        assert_eq!(registry.len().await, 1);
    }
}
