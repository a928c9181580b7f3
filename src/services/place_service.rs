// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Intermediary between handlers and repository

use crate::db::{DocumentStore, FieldRef, Filter, PlaceRepository};
use crate::errors::PlacesError;
use crate::models::{CreatedResponse, ListQuery, ListResponse, Place, SeedResponse};
use crate::services::sample_places;

/// Fields searched by the `q` parameter
const SEARCH_FIELDS: [FieldRef; 5] = [
    FieldRef::Scalar("name"),
    FieldRef::Scalar("city"),
    FieldRef::Scalar("state"),
    FieldRef::Scalar("category"),
    FieldRef::Elements("tags"),
];

pub struct PlaceService;

impl PlaceService {
    /// Create a new place
    pub async fn create_place(
        store: &dyn DocumentStore,
        place: Place,
    ) -> Result<CreatedResponse, PlacesError> {
        let id = PlaceRepository::create_place(store, &place).await?;
        Ok(CreatedResponse { id })
    }

    /// Insert the sample places unless the collection already has documents
    /// DOCUMENTATION: The count check and the insert are separate storage
    /// calls, so two concurrent first-time seeds can both insert.
    pub async fn seed_places(store: &dyn DocumentStore) -> Result<SeedResponse, PlacesError> {
        let existing = PlaceRepository::count(store).await?;
        if existing > 0 {
            log::info!("Seed skipped: {} places already exist", existing);
            return Ok(SeedResponse::already_seeded(existing));
        }

        let ids = PlaceRepository::bulk_insert(store, &sample_places()).await?;
        log::info!("Seeded {} places", ids.len());
        Ok(SeedResponse::seeded(ids))
    }

    /// Translate listing parameters into a storage filter
    /// DOCUMENTATION: `q` is an OR-group of substring matches; category,
    /// state and city are exact matches; everything present is AND-ed
    pub fn build_filter(query: &ListQuery) -> Filter {
        let mut filter = Filter::new();

        if let Some(q) = &query.q {
            filter = filter.contains(SEARCH_FIELDS.to_vec(), q.as_str());
        }
        if let Some(category) = &query.category {
            filter = filter.exact("category", category.as_str());
        }
        if let Some(state) = &query.state {
            filter = filter.exact("state", state.as_str());
        }
        if let Some(city) = &query.city {
            filter = filter.exact("city", city.as_str());
        }

        filter
    }

    /// Search places (from database)
    /// The limit is expected to be validated by the caller.
    pub async fn list_places(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<ListResponse, PlacesError> {
        let filter = Self::build_filter(query);
        let items = PlaceRepository::find(store, &filter, query.effective_limit()).await?;

        log::debug!("Listing returned {} places", items.len());

        Ok(ListResponse {
            count: items.len(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{MemoryDocumentStore, Predicate};
    use std::collections::HashSet;

    fn query() -> ListQuery {
        ListQuery::default()
    }

    fn names(response: &ListResponse) -> Vec<&str> {
        response.items.iter().map(|i| i.place.name.as_str()).collect()
    }

    async fn seeded_store() -> MemoryDocumentStore {
        let store = MemoryDocumentStore::new();
        PlaceService::seed_places(&store).await.unwrap();
        store
    }

    #[test]
    fn test_build_filter_without_params_is_empty() {
        assert!(PlaceService::build_filter(&query()).predicates().is_empty());
    }

    #[test]
    fn test_build_filter_combines_all_params() {
        let filter = PlaceService::build_filter(&ListQuery {
            q: Some("castle".into()),
            category: Some("castle".into()),
            state: Some("Bavaria".into()),
            city: Some("Schwangau".into()),
            limit: None,
        });

        assert_eq!(filter.predicates().len(), 4);
        assert_eq!(
            filter.predicates()[0],
            Predicate::Contains {
                fields: SEARCH_FIELDS.to_vec(),
                needle: "castle".into(),
            }
        );
        assert_eq!(
            filter.predicates()[3],
            Predicate::Exact {
                field: "city",
                value: "Schwangau".into(),
            }
        );
    }

    #[test]
    fn test_build_filter_keeps_explicit_empty_values() {
        let filter = PlaceService::build_filter(&ListQuery {
            city: Some(String::new()),
            ..query()
        });
        assert_eq!(filter.predicates().len(), 1);
    }

    #[tokio::test]
    async fn test_seed_inserts_ten_distinct_places() {
        let store = MemoryDocumentStore::new();

        match PlaceService::seed_places(&store).await.unwrap() {
            SeedResponse::Seeded { seeded, count, ids } => {
                assert!(seeded);
                assert_eq!(count, 10);
                assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 10);
            }
            other => panic!("expected a fresh seed, got {:?}", other),
        }

        assert_eq!(PlaceRepository::count(&store).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_seed_is_noop_when_places_exist() {
        let store = seeded_store().await;

        let second = PlaceService::seed_places(&store).await.unwrap();
        assert_eq!(second, SeedResponse::already_seeded(10));
        assert_eq!(PlaceRepository::count(&store).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_seed_skips_after_manual_create() {
        let store = MemoryDocumentStore::new();
        let place = Place {
            name: "Lone Place".into(),
            ..sample_places().remove(0)
        };
        PlaceService::create_place(&store, place).await.unwrap();

        let response = PlaceService::seed_places(&store).await.unwrap();
        assert_eq!(response, SeedResponse::already_seeded(1));
        assert_eq!(PlaceRepository::count(&store).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_seeds_both_insert() {
        // Neither insert proceeds until both seeds have counted an empty collection
        let store = MemoryDocumentStore::with_insert_barrier(2);

        let (first, second) = tokio::join!(
            PlaceService::seed_places(&store),
            PlaceService::seed_places(&store)
        );

        for response in [first.unwrap(), second.unwrap()] {
            assert!(
                matches!(response, SeedResponse::Seeded { seeded: true, count: 10, .. }),
                "expected both seeds to insert, got {:?}",
                response
            );
        }
        assert_eq!(PlaceRepository::count(&store).await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_city_filter_is_exact() {
        let store = seeded_store().await;
        for near_miss in ["berlin ", "West Berlin"] {
            let place = Place {
                name: format!("Somewhere in {}", near_miss),
                city: Some(near_miss.to_string()),
                state: None,
                description: None,
                category: None,
                tags: None,
                latitude: None,
                longitude: None,
                website: None,
            };
            PlaceService::create_place(&store, place).await.unwrap();
        }

        let response = PlaceService::list_places(
            &store,
            &ListQuery {
                city: Some("BERLIN".into()),
                ..query()
            },
        )
        .await
        .unwrap();

        assert_eq!(names(&response), vec!["Brandenburg Gate", "Museum Island"]);
        assert_eq!(response.count, 2);
    }

    #[tokio::test]
    async fn test_q_searches_fields_and_tags() {
        let store = seeded_store().await;

        let castles = PlaceService::list_places(
            &store,
            &ListQuery {
                q: Some("castle".into()),
                ..query()
            },
        )
        .await
        .unwrap();
        assert_eq!(names(&castles), vec!["Neuschwanstein Castle", "Heidelberg Castle"]);

        // only present as a tag
        let hiking = PlaceService::list_places(
            &store,
            &ListQuery {
                q: Some("HIKING".into()),
                ..query()
            },
        )
        .await
        .unwrap();
        assert_eq!(
            names(&hiking),
            vec!["Black Forest", "Saxon Switzerland National Park"]
        );
    }

    #[tokio::test]
    async fn test_q_and_exact_filters_are_conjunctive() {
        let store = seeded_store().await;

        let response = PlaceService::list_places(
            &store,
            &ListQuery {
                q: Some("unesco".into()),
                state: Some("berlin".into()),
                ..query()
            },
        )
        .await
        .unwrap();

        assert_eq!(names(&response), vec!["Museum Island"]);
    }

    #[tokio::test]
    async fn test_q_with_pattern_characters_is_literal() {
        let store = seeded_store().await;

        let response = PlaceService::list_places(
            &store,
            &ListQuery {
                q: Some(".*".into()),
                ..query()
            },
        )
        .await
        .unwrap();

        assert_eq!(response.count, 0);
    }

    #[tokio::test]
    async fn test_limit_caps_results() {
        let store = seeded_store().await;

        for limit in [1, 3, 10, 500] {
            let response = PlaceService::list_places(
                &store,
                &ListQuery {
                    limit: Some(limit),
                    ..query()
                },
            )
            .await
            .unwrap();
            assert_eq!(response.count as i64, limit.min(10));
            assert_eq!(response.items.len(), response.count);
        }
    }

    #[tokio::test]
    async fn test_created_place_round_trips() {
        let store = MemoryDocumentStore::new();
        let place = Place {
            name: "Speicherstadt".into(),
            city: Some("Hamburg".into()),
            state: Some("Hamburg".into()),
            description: Some("Warehouse district on timber-pile foundations.".into()),
            category: Some("landmark".into()),
            tags: Some(vec!["unesco".into(), "architecture".into()]),
            latitude: Some(53.5436),
            longitude: Some(9.9886),
            website: None,
        };

        let created = PlaceService::create_place(&store, place.clone()).await.unwrap();
        let response = PlaceService::list_places(
            &store,
            &ListQuery {
                q: Some("Speicherstadt".into()),
                ..query()
            },
        )
        .await
        .unwrap();

        assert_eq!(response.count, 1);
        assert_eq!(response.items[0].id, created.id);
        assert_eq!(response.items[0].place, place);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let store = MemoryDocumentStore::failing("connection refused");

        let err = PlaceService::seed_places(&store).await.unwrap_err();
        assert!(matches!(err, PlacesError::DatabaseError(_)));
    }
}
