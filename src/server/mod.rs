//! HTTP server — routing, upload handling, and static assets.

pub mod extract;
pub mod routes;

pub use extract::extract_upload_text;
pub use routes::{AppState, app_routes};
