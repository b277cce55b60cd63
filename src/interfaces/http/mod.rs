//! HTTP facade.
//!
//! Two endpoints make up the whole surface:
//!
//! - `POST /receipts/process` accepts a receipt and answers `{"id": "..."}`.
//! - `GET /receipts/{id}/points` answers `{"points": N}` or 404.

pub mod routes;


pub use routes::{ApiError, PointsResponse, ProcessResponse, create_router};
