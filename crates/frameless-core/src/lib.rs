pub mod candidate;
pub mod config;
pub mod filters;
pub mod log;
pub mod monitor;
pub mod rect;
pub mod slot;

pub use candidate::{GameCandidate, pick_single};
pub use config::Config;
pub use filters::ScanFilters;
pub use monitor::{MonitorDescriptor, MonitorStatus};
pub use rect::Rect;
pub use slot::GameSlot;

/// A boxed error type for OS query operations.
///
/// Fallible queries (enumeration, window metadata reads) propagate through
/// this. Mutation operations never return it — every mutation failure folds
/// into a [`MonitorStatus`] value instead.
pub type OsResult<T> = Result<T, Box<dyn std::error::Error>>;
