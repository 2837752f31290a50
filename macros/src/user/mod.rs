//! Macros for crates building on `shared_resources`.

pub mod resource;
pub mod type_set;
