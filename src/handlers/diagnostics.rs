// src/handlers/diagnostics.rs
// DOCUMENTATION: Connectivity diagnostic handler
// PURPOSE: Always answers 200, even when the database is down

use crate::config::Config;
use crate::db::DbHandle;
use crate::services::DiagnosticService;
use actix_web::{web, HttpResponse, Responder};

/// GET /test
pub async fn test_database(db: web::Data<DbHandle>, config: web::Data<Config>) -> impl Responder {
    let report = DiagnosticService::report(&db, &config).await;
    HttpResponse::Ok().json(report)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/test", web::get().to(test_database));
}
