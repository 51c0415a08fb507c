//! Draw animation rendering

pub mod reporter;
