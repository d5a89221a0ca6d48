//! Order-preserving mapping over pure functions, sequentially or via
//! chunked scatter-gather workers, plus the monoidal pattern algebra
//! (optional labels, periodic sequences, overlay) used to combine them.

mod mapper;
mod overlay;
mod pattern;
mod semigroup;

pub use mapper::{
    auto_chunk_size, map_parallel, map_sequential, try_map_parallel, try_map_sequential, MapError,
};
pub use overlay::overlay;
pub use pattern::{Periodic, PeriodicIter};
pub use semigroup::{combine_all, zip_combine, Monoid, Semigroup};
