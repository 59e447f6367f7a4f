//! Export history adapters
//!
//! Best-effort, append-only record of completed exports:
//!
//! - [`FileHistorySink`] - JSON-lines file, used by the CLI
//! - [`MemoryHistorySink`] - process-local vector, used by tests

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileHistorySink;
pub use memory::MemoryHistorySink;
pub use traits::{ExportHistorySink, ExportRecord};
