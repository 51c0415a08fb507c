//! Name pool: the candidates a draw picks from.
//!
//! - [`entities::NamePool`]: ordered names plus the add/remove/draw rules
//! - [`batch`]: splitting pasted text into names

pub mod batch;
pub mod entities;
