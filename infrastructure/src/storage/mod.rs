//! Key-value store adapters
//!
//! - [`JsonFileStore`]: all keys in one JSON object on disk
//! - [`MemoryStore`]: process-local map, for `--no-persist` style runs and tests

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
