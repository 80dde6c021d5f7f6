/*!
 * Monitoring Module
 * Structured logging for simulation runs
 */

pub mod tracer;

pub use tracer::{init_tracing, TRACE_JSON_ENV};
