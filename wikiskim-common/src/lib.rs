//! Shared utilities for the wikiskim workspace.
//!
//! This crate holds the pieces every other crate can lean on without pulling
//! in heavy transitive costs:
//!
//! - [`observability`]: centralised tracing/logging initialisation
//! - [`io`]: the line-source and output-sink seams consumed by the selection
//!   flow, so interactive input can be swapped for a scripted sequence in
//!   tests

pub mod io;
pub mod observability;
