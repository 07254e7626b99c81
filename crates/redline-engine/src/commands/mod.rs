//! Engine command and query surfaces.

pub mod engine_command;
pub mod engine_query;
mod instrument;
