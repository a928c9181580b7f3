// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return responses

use crate::db::DbHandle;
use crate::errors::PlacesError;
use crate::models::{ListQuery, Place};
use crate::services::PlaceService;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// POST /places
/// Create a new place
pub async fn create_place(
    db: web::Data<DbHandle>,
    req: web::Json<Place>,
) -> Result<impl Responder, PlacesError> {
    let store = db.store()?;
    let created = PlaceService::create_place(store, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(created))
}

/// POST /places/seed
/// Insert the sample places once
pub async fn seed_places(db: web::Data<DbHandle>) -> Result<impl Responder, PlacesError> {
    let store = db.store()?;
    let result = PlaceService::seed_places(store).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /places
/// List places matching the query filters
pub async fn list_places(
    db: web::Data<DbHandle>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, PlacesError> {
    query.validate()?;

    let store = db.store()?;
    let result = PlaceService::list_places(store, &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/places")
            .route("", web::post().to(create_place))
            .route("", web::get().to(list_places))
            .route("/seed", web::post().to(seed_places)),
    );
}
