//! HTTP/REST API layer for Banter.
//!
//! Axum-based JSON API: `POST /chat`, `GET /chat/history`, a liveness
//! route at `/`, and `/health`, with permissive CORS.

pub mod error;
pub mod handlers;
pub mod router;
