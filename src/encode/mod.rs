//! Frame sinks.

/// Sink contract, in-memory and PNG sequence sinks.
pub mod sink;
