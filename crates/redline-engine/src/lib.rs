//! Redline engine
//!
//! The request-handling layer over the core: resolves snapshot identifiers
//! through the version repository, runs the comparator, and records new
//! versions. Every operation is logged with start/end events and reports
//! failures as structured `ExError`s.

pub mod commands;
