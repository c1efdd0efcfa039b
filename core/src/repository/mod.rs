pub mod file;
pub mod traits;

// Re-export
pub use file::FileEntrySource;
pub use traits::EntrySource;
