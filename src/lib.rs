#![cfg_attr(not(feature = "std"), no_std)]
#![recursion_limit = "256"]

//! # shared-resources
//!
//! **Heterogeneous containers keyed by type, checked at build time.**
//!
//! A [`SharedResources<L, E>`] holds exactly one value of each type in the
//! type set `L`, minus the types in `E`. Layers of a program can build a
//! partial bundle (the exclusion `E` names what they cannot provide yet),
//! hand it to the next layer, and have that layer [`extend`] it. Missing,
//! duplicated or foreign types are compile errors; lookups are plain field
//! accesses after monomorphization.
//!
//! [`SharedReferences<'a, L, E>`] has the same rules but holds `&'a mut`
//! handles, so several owners can share the same referents.
//!
//! [`extend`]: SharedResources::extend
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present/Absent, Nibble (X0-XF), HashStream16, FNV-1a           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Tags                                                    |
//! |  - Resource, Named/Applied identities, SameTag                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Type-Set Algebra       |  Layer 3: Storage Engine       |
//! |  - Contains, Subtract, SameSet   |  - Pluck, Sculpt, Select, Merge|
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4-5: SharedResources, SharedReferences                     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! # #![recursion_limit = "256"]
//! use shared_resources::prelude::*;
//!
//! #[derive(Resource, Debug, PartialEq)]
//! struct Config { verbose: bool }
//!
//! #[derive(Resource, Debug, PartialEq)]
//! struct Counter(u32);
//!
//! type App = type_set![Config, Counter];
//!
//! // The configuration layer cannot build a counter.
//! let config_only: SharedResources<App, type_set![Counter]> =
//!     SharedResources::new((Config { verbose: true },));
//!
//! let mut app: SharedResources<App> = SharedResources::extend(config_only, (Counter(0),));
//! app.get_mut::<Counter>().0 += 1;
//!
//! assert!(app.get::<Config>().verbose);
//! assert_eq!(app.get::<Counter>(), &Counter(1));
//! ```

// Allow `::shared_resources` to work inside the crate itself
extern crate self as shared_resources;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Tags
// =============================================================================
pub mod tag;

// =============================================================================
// Layer 2-3: Algebra and Storage
// =============================================================================
pub mod set;
pub mod storage;

// =============================================================================
// Layer 4-5: Containers
// =============================================================================
pub mod references;
pub mod resources;

pub mod trace;

pub use primitives::{Absent, Bool, Present};
pub use tag::{Applied, IdCons, IdEq, IdNil, Named, Resource, SameTag};
pub use set::{
    Cons, Contains, ContainsAll, Distinct, Effective, Equivalent, IntoList, Nil, SameSet,
    Subtract, TypeList, Unique, Without,
};
pub use storage::{DebugBindings, Merge, Pluck, Sculpt, Select};
pub use resources::SharedResources;
pub use references::{HandleSet, Handled, Handles, SharedReferences};

pub use macros::{tag_stream, type_set, Resource};

/// Everything needed to declare sets and build containers.
pub mod prelude {
    pub use crate::references::SharedReferences;
    pub use crate::resources::SharedResources;
    pub use crate::set::{Cons, Nil};
    pub use crate::tag::Resource;
    pub use crate::{impl_resource, type_set};
    pub use macros::Resource;
}
