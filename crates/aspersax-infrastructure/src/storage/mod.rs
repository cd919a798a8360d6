//! File-backed implementations of the core storage boundary.

mod atomic_file;
mod json_dir_storage;

pub use atomic_file::AtomicFile;
pub use json_dir_storage::JsonDirStorage;
