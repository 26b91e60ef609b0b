//! Scan location catalog feature.
//!
//! Serves the fixed set of partner gym sites where scans take place. The
//! catalog is read-only and injected at startup; replacing it with a real
//! data source later does not touch the HTTP layer.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/locations` | No | List all scan locations |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LocationCatalog;
