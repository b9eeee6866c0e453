//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query string of the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Station name filter
    pub q: Option<String>,
}

/// Error body returned by the JSON API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
