use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::info;

use crate::counts;
use crate::hosts::KnownHosts;
use crate::models::dto::{UrlcountsRequest, UrlcountsResponse};

const INDEX_HTML: &str = include_str!("../static/index.html");

// The form page that drives POST /urlcounts from a browser.
#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[get("/health")]
async fn health(known: web::Data<KnownHosts>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "known_hosts": known.len(),
    }))
}

// Aggregation endpoint. An empty "urls" list is valid input and yields a
// zero-filled result; malformed JSON or a missing "urls" item is rejected
// with 400 by the JSON extractor before this handler runs.
#[post("/urlcounts")]
async fn urlcounts(
    known: web::Data<KnownHosts>,
    payload: web::Json<UrlcountsRequest>,
) -> impl Responder {
    let aggregation = counts::aggregate(&payload.urls, known.get_ref());
    let response = UrlcountsResponse::from(&aggregation);

    info!(
        submitted = payload.urls.len(),
        matched = response.count_urls_match_a_host,
        unmatched = response.count_urls_not_match_any_hosts,
        "processed urlcounts request"
    );

    HttpResponse::Ok().json(response)
}

/// Registers every route of the service; shared between `serve` and the
/// integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(health).service(urlcounts);
}
