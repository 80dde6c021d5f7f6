/*!
 * Process Feeds
 * External sources producing process descriptors for a run
 */

pub mod file;
pub mod interactive;
pub mod system;

pub use file::FileFeed;
pub use interactive::InteractiveFeed;
pub use system::SystemProcessFeed;

use crate::core::errors::FeedResult;
use crate::process::ProcessDescriptor;

/// A source of process descriptors, fully formed before the engine runs
pub trait ProcessFeed {
    /// Acquire at most `limit` descriptors, in feed order
    fn acquire(&mut self, limit: usize) -> FeedResult<Vec<ProcessDescriptor>>;
}
