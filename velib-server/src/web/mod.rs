//! Web layer for the station viewer.
//!
//! Serves the JSON station API, the HTML pages and static assets. Every
//! request runs its own fetch-and-synthesize pass; no state is shared between
//! requests beyond the immutable station source.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
