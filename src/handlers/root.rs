// src/handlers/root.rs
// DOCUMENTATION: Service banner and schema description

use crate::models::place_schema;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Germany Tourist Places API"
    }))
}

/// GET /schema
pub async fn schema() -> impl Responder {
    HttpResponse::Ok().json(place_schema())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/schema", web::get().to(schema));
}
