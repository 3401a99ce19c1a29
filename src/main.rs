//! HTTP server for auction-log uploads.
//!
//! Loads the item catalog, builds the parser, and serves `/upload_log`.
//! Config via env: `CATALOG_PATH` (default `items.csv`), `PORT` (default 8000).

use std::sync::Arc;
use tokio::net::TcpListener;
use tunnel_auction_parser::{api, catalog, Parser, StdoutSink};

#[tokio::main]
async fn main() {
    let _ = env_logger::try_init();
    let catalog_path =
        std::env::var("CATALOG_PATH").unwrap_or_else(|_| "items.csv".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8000);

    let vocab = catalog::load_vocab(&catalog_path).expect("catalog");
    let parser = Arc::new(Parser::new(vocab));
    let app = api::create_router(parser, Arc::new(StdoutSink));

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await.expect("bind");
    eprintln!("serving /upload_log on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("serve");
}
