//! TriageLens: the derived-metrics engine behind a bug-tracking and
//! workforce-planning dashboard.
//!
//! The crate is pure computation: the UI collaborator fetches aggregate
//! JSON from the backend, hands it to these functions, and renders the
//! structured results (score, label, color tag, factor list). Nothing in
//! here performs I/O or holds state between calls, so identical inputs
//! always produce identical outputs.

pub mod config;
pub mod ingest;
pub mod models;
pub mod scoring;
