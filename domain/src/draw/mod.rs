//! Draw lifecycle: animation schedule and the state machine that guards the pool.

pub mod machine;
pub mod schedule;
