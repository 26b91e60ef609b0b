//! Document store reachability probe.
//!
//! The frontend polls this before showing the booking form; a broken store
//! is reported inside a 200 body rather than as an error status.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/test` | No | Report whether the store is reachable |

pub mod dtos;
pub mod handlers;
pub mod routes;
