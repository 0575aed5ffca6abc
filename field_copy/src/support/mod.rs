//! Small helpers used alongside the copy engine

mod judge;
mod sequence;
mod stack;

pub use judge::is_nil;
pub use sequence::to_sequence;
pub use stack::{CallSite, StackResultExt, call_sites, report, wrap, wrapf};
