//! A rope (fancy string): a character sequence stored as a balanced binary
//! tree of fragments, so that edits in the middle of a large sequence don't
//! pay the cost of shifting a contiguous buffer.

mod fib;
mod fibrope;
mod fragment;
mod iter;

pub use crate::fibrope::{Rope, RopeError};
pub use crate::fragment::Fragment;
pub use crate::iter::Chunks;
