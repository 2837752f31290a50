//! Macros used by `shared_resources` itself.

pub mod depth;
pub mod tag_stream;
