//! Shared helpers for tests.

use std::net::SocketAddr;

use axum::Router;
use futures::future::BoxFuture;

use crate::stations::{FetchError, RawStation, StationSource};

/// Serve `router` on an ephemeral local port and return its address.
pub async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// URL of the fake provider's records endpoint.
pub fn records_url(addr: SocketAddr) -> String {
    format!("http://{addr}/records")
}

/// An installed, renting, returning station row.
pub fn raw_station(code: &str, name: &str, ebike: u32, mechanical: u32) -> RawStation {
    RawStation {
        code: code.to_string(),
        name: name.to_string(),
        capacity: 30,
        ebike_count: ebike,
        mechanical_count: mechanical,
        is_installed: true,
        is_renting: true,
        is_returning: true,
        location: None,
    }
}

/// Source whose provider always answers 500.
pub struct FailingSource;

impl StationSource for FailingSource {
    fn fetch_stations(&self, _limit: usize) -> BoxFuture<'_, Result<Vec<RawStation>, FetchError>> {
        Box::pin(futures::future::ready(Err(FetchError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        })))
    }
}
