//! HTTP upload surface.
//!
//! One route of substance: `POST /upload_log` takes a plain-text body of the
//! form `<client-iso-time> <raw log line>`, splits the line, normalizes the
//! timestamp into server time, parses the auction, and hands each listing to
//! the sink. Used by the binary and by integration tests; create with
//! [`create_router`]. Uses `Extension` for state so the router is `Router<()>`
//! and works with `into_make_service()`.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::line::split_line;
use crate::parser::Parser;
use crate::sink::{ListingRecord, ListingSink};
use crate::timestamp::{client_time_offset, parse_timestamp_normalized};
use crate::types::Listing;

/// Shared app state: the parser and the listing sink.
#[derive(Clone)]
pub struct AppState {
    pub(crate) parser: Arc<Parser>,
    pub(crate) sink: Arc<dyn ListingSink>,
}

/// Builds the router with state. Returns `Router<()>` so you can call
/// `.into_make_service()` for `axum::serve`.
pub fn create_router(parser: Arc<Parser>, sink: Arc<dyn ListingSink>) -> Router<()> {
    let state = AppState { parser, sink };
    Router::new()
        .route("/health", get(health))
        .route("/upload_log", post(upload_log))
        .layer(Extension(state))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn upload_log(Extension(state): Extension<AppState>, body: String) -> Response {
    let body = body.trim();
    let Some((client_time, log_line)) = body.split_once(' ') else {
        return bad_request("need a client timestamp followed by a log line");
    };
    let Some(line) = split_line(log_line.trim()) else {
        return bad_request("need a valid auction line");
    };
    let now = chrono::Local::now().naive_local();
    let Some(offset) = client_time_offset(now, client_time) else {
        return bad_request("bad client timestamp");
    };
    let Some(timestamp) = parse_timestamp_normalized(&line.timestamp, offset) else {
        return bad_request("bad log timestamp");
    };

    let listings = state.parser.parse_auction(&line.message);
    for listing in &listings {
        state.sink.record(&ListingRecord {
            timestamp,
            speaker: line.speaker.clone(),
            item_id: listing.item_id,
            is_selling: listing.is_selling,
            price: listing.price,
        });
    }

    #[derive(serde::Serialize)]
    struct Out {
        speaker: String,
        listings: Vec<Listing>,
    }
    (
        StatusCode::OK,
        Json(Out {
            speaker: line.speaker,
            listings,
        }),
    )
        .into_response()
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}
