//! In-memory model of the item tag format the host persists on item stacks.
//!
//! Encoding to bytes is owned by the host engine; this crate only covers the
//! structured view gameplay code reads and mutates.

pub mod compound;
pub mod tag;

pub use compound::NbtCompound;
pub use tag::NbtTag;
