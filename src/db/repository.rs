// src/db/repository.rs
// DOCUMENTATION: Typed access to the place collection
// PURPOSE: Convert between Place and stored JSON documents

use crate::db::{DocumentStore, Filter, StoredDocument};
use crate::errors::PlacesError;
use crate::models::{Place, PlaceItem, PLACE_COLLECTION};

/// PlaceRepository: all document operations for places
pub struct PlaceRepository;

impl PlaceRepository {
    /// Insert a place and return its generated id
    /// DOCUMENTATION: Used by POST /places endpoint
    pub async fn create_place(store: &dyn DocumentStore, place: &Place) -> Result<String, PlacesError> {
        let doc = serde_json::to_value(place)?;
        let id = store.insert_one(PLACE_COLLECTION, doc).await?;

        log::info!("Created place {} with id: {}", place.name, id);
        Ok(id)
    }

    /// Insert several places in one all-or-nothing batch
    pub async fn bulk_insert(
        store: &dyn DocumentStore,
        places: &[Place],
    ) -> Result<Vec<String>, PlacesError> {
        let docs = places
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        store.insert_many(PLACE_COLLECTION, docs).await
    }

    pub async fn count(store: &dyn DocumentStore) -> Result<i64, PlacesError> {
        store.count(PLACE_COLLECTION).await
    }

    /// Places matching `filter`, with their storage id exposed as `id`
    pub async fn find(
        store: &dyn DocumentStore,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<PlaceItem>, PlacesError> {
        let docs = store.find(PLACE_COLLECTION, filter, limit).await?;
        docs.into_iter().map(Self::to_item).collect()
    }

    fn to_item(doc: StoredDocument) -> Result<PlaceItem, PlacesError> {
        let place: Place = serde_json::from_value(doc.body).map_err(|e| {
            log::error!("Stored place {} is malformed: {}", doc.id, e);
            PlacesError::InternalError(format!("malformed place document {}", doc.id))
        })?;

        Ok(PlaceItem { id: doc.id, place })
    }
}
