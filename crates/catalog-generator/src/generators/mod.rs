//! Individual value generators.
//!
//! Each generator takes the RNG explicitly so that a single seeded source
//! drives every random value of a run.

pub mod numeric;
pub mod timestamp;
