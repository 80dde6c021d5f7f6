/*!
 * Process Module
 * Process records, lifecycle state machine and descriptor validation
 */

mod lifecycle;
pub mod types;
pub mod validation;

// Re-export for convenience
pub use types::{Process, ProcessDescriptor, ProcessState};
pub use validation::{build_process_set, validate_descriptor};
