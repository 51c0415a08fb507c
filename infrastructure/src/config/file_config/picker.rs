//! Pool behavior from TOML (`[picker]` section)

use picker_domain::PoolOptions;
use serde::{Deserialize, Serialize};

/// Raw picker configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePickerConfig {
    /// Allow identical names in the pool
    pub allow_duplicates: bool,
    /// Take the winner out of the pool after each draw
    pub remove_after_pick: bool,
    /// Mirror the pool and question to the store
    pub persist: bool,
}

impl Default for FilePickerConfig {
    fn default() -> Self {
        Self {
            allow_duplicates: false,
            remove_after_pick: false,
            persist: true,
        }
    }
}

impl FilePickerConfig {
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            allow_duplicates: self.allow_duplicates,
            remove_after_pick: self.remove_after_pick,
        }
    }
}
