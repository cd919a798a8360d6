//! File-system adapters for the Aspersax console core.

pub mod config_service;
pub mod paths;
pub mod profile_provider;
pub mod storage;

pub use config_service::ConfigService;
pub use paths::AspersaxPaths;
pub use profile_provider::FileProfileProvider;
pub use storage::{AtomicFile, JsonDirStorage};
