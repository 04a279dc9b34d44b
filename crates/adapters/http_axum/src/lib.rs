//! # timedash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the time dashboard summary
//!   (`/api/summary`, `/api/summary/rows`, `/api/rows/preview`)
//! - Optionally serve the compiled **Leptos dashboard** assets, falling back
//!   to `index.html` so client-side routes such as `/dashboard/time` load
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `timedash-app` (for port traits and services) and
//! `timedash-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
