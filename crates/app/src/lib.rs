//! # timedash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement (driven/outbound ports):
//!   - `SummaryStore` — hand-off slot for the latest dashboard summary
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DashboardService` — publish a summary, read it back, project rows
//! - Provide **in-process infrastructure** (the in-memory summary slot) that
//!   doesn't need IO
//!
//! Aggregating time entries and running timers belong to the backend that
//! publishes summaries; this crate only carries finished numbers.
//!
//! ## Dependency rule
//! Depends on `timedash-domain` only (plus `tokio::sync` for locking).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod summary_store;
