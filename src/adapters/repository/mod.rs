//! Meeting repository adapters
//!
//! Trait-based abstraction over meeting storage:
//!
//! - [`FileMeetingStore`] - JSON file, used by the CLI
//! - [`InMemoryMeetingStore`] - process-local map, used by tests and
//!   embedders

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileMeetingStore;
pub use memory::InMemoryMeetingStore;
pub use traits::MeetingRepository;
