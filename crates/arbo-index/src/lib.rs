//! `arbo-index` — "which agents are at node X", answered in O(bucket size).
//!
//! Two maintenance strategies, chosen per run with [`IndexStrategy`]:
//!
//! - **Dense** ([`DenseSlots`]): one `AtomicU32` slot per (node, agent).
//!   Movement writes an agent's own column, so concurrent relocations never
//!   touch the same slot.  Before Contact the slots are compacted into
//!   [`Buckets`], one parallel task per node.
//! - **Compacted** ([`CompactIndex`]): no slots at all; [`Buckets`] are
//!   rebuilt from agent positions with a counting sort after Movement.
//!   O(population + nodes) time and memory.
//!
//! Either way Contact reads the same [`Buckets`] with member ids ascending
//! within each node.

pub mod buckets;
pub mod compact;
pub mod dense;
pub mod error;
pub mod index;

#[cfg(test)]
mod tests;

pub use buckets::Buckets;
pub use compact::CompactIndex;
pub use dense::{ABSENT, DenseSlots};
pub use error::{IndexError, IndexResult};
pub use index::{IndexStrategy, PopulationIndex, SpatialIndex};
