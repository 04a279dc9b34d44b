//! # timedash-domain
//!
//! Pure domain model for the timedash time-tracking dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the **summary** handed over by the time-tracking backend
//!   (today's hours, session count, running entry, weekly hours)
//! - Define **stat rows** (label, formatted value, icon, color, navigation)
//! - Project a summary into the fixed list of dashboard rows
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod entry;
pub mod stats;
