//! astrobib-classify — title-keyword classification for publication records.
//!
//! Three pure functions over a publication title:
//!   - [`Topic::classify`]    — research topic from an ordered keyword rule list
//!   - [`Organism::classify`] — studied organism, same dispatch scheme
//!   - [`derive_year`]        — 4-digit year extraction with a linear-spread fallback
//!
//! All three are deterministic and side-effect free. The rule lists are
//! evaluated top to bottom with first-match-wins semantics; their order is
//! load-bearing ("plant cell growth" must classify as Plant Growth, not
//! Cellular Response) and must not be rearranged.

pub mod organism;
pub mod topic;
pub mod year;

pub use organism::Organism;
pub use topic::Topic;
pub use year::{derive_year, ASSUMED_CORPUS_SIZE};
