//! Name pool entity

use super::batch::{BATCH_MAX, BATCH_MIN, is_batch_size_valid, parse_batch};
use crate::core::error::{PoolError, ValidationError};
use serde::{Deserialize, Serialize};

/// Rules that govern how the pool accepts and gives up names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolOptions {
    /// Allow identical names to coexist
    pub allow_duplicates: bool,
    /// Remove the winner from the pool once it has been announced
    pub remove_after_pick: bool,
}

/// Result of settling a draw against the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The winning name
    pub name: String,
    /// Position of the winner at draw time
    pub index: usize,
    /// Whether the winner was taken out of the pool
    pub removed: bool,
}

/// Ordered pool of candidate names (Entity)
///
/// Every element is trimmed and non-empty. Unless duplicates are allowed,
/// no two elements are equal. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePool {
    names: Vec<String>,
    options: PoolOptions,
}

impl NamePool {
    /// Create an empty pool
    pub fn new(options: PoolOptions) -> Self {
        Self {
            names: Vec::new(),
            options,
        }
    }

    /// Rebuild a pool from previously stored names.
    ///
    /// Stored data is not trusted: names are trimmed, empty ones dropped and,
    /// unless duplicates are allowed, later repeats discarded.
    pub fn from_names(names: impl IntoIterator<Item = String>, options: PoolOptions) -> Self {
        let mut pool = Self::new(options);
        for name in names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !options.allow_duplicates && pool.contains(trimmed) {
                continue;
            }
            pool.names.push(trimmed.to_string());
        }
        pool
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn options(&self) -> PoolOptions {
        self.options
    }

    /// Change the duplicate rule.
    ///
    /// Disallowing duplicates drops later repeats so the pool stays
    /// duplicate-free. Returns how many names were dropped.
    pub fn set_allow_duplicates(&mut self, allow: bool) -> usize {
        self.options.allow_duplicates = allow;
        if allow {
            return 0;
        }
        let before = self.names.len();
        let mut seen: Vec<String> = Vec::with_capacity(before);
        self.names.retain(|name| {
            if seen.contains(name) {
                false
            } else {
                seen.push(name.clone());
                true
            }
        });
        before - self.names.len()
    }

    pub fn set_remove_after_pick(&mut self, remove: bool) {
        self.options.remove_after_pick = remove;
    }

    /// Add a single name, returning the trimmed value that was stored
    pub fn add(&mut self, name: &str) -> Result<&str, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !self.options.allow_duplicates && self.contains(trimmed) {
            return Err(ValidationError::Duplicate(trimmed.to_string()));
        }
        self.names.push(trimmed.to_string());
        Ok(self.names.last().map(String::as_str).unwrap_or_default())
    }

    /// Add several names from comma or newline separated text.
    ///
    /// The batch must hold between [`BATCH_MIN`] and [`BATCH_MAX`] names.
    /// Without duplicates, names already in the pool and repeats within the
    /// batch are skipped (first occurrence wins) and at least [`BATCH_MIN`]
    /// new names must remain. Nothing is added on error.
    /// Returns the names that were appended, in input order.
    pub fn add_batch(&mut self, raw: &str) -> Result<Vec<String>, ValidationError> {
        let parts = parse_batch(raw);
        if !is_batch_size_valid(parts.len()) {
            return Err(ValidationError::BatchSize { count: parts.len() });
        }

        let mut to_add = parts;
        if !self.options.allow_duplicates {
            let mut seen: Vec<String> = Vec::with_capacity(to_add.len());
            to_add.retain(|part| {
                if self.contains(part) || seen.contains(part) {
                    return false;
                }
                seen.push(part.clone());
                true
            });
            if to_add.is_empty() {
                return Err(ValidationError::AllDuplicates);
            }
            if to_add.len() < BATCH_MIN {
                return Err(ValidationError::InsufficientUnique {
                    remaining: to_add.len(),
                });
            }
            to_add.truncate(BATCH_MAX);
        }

        self.names.extend(to_add.iter().cloned());
        Ok(to_add)
    }

    /// Remove the name at `index` (0-based)
    pub fn remove_at(&mut self, index: usize) -> Result<String, PoolError> {
        if index >= self.names.len() {
            return Err(PoolError::IndexOutOfRange {
                index,
                len: self.names.len(),
            });
        }
        Ok(self.names.remove(index))
    }

    /// Empty the pool, returning how many names were removed
    pub fn clear(&mut self) -> usize {
        let count = self.names.len();
        self.names.clear();
        count
    }

    /// Settle a draw on the name at `index`.
    ///
    /// The winner is taken out of the pool when `remove_after_pick` is set.
    pub fn settle_draw(&mut self, index: usize) -> Result<DrawOutcome, PoolError> {
        if self.names.is_empty() {
            return Err(PoolError::EmptyPool);
        }
        let Some(name) = self.names.get(index).cloned() else {
            return Err(PoolError::IndexOutOfRange {
                index,
                len: self.names.len(),
            });
        };
        let removed = self.options.remove_after_pick;
        if removed {
            self.names.remove(index);
        }
        Ok(DrawOutcome {
            name,
            index,
            removed,
        })
    }
}
