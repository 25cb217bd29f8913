//! Lookup routines over slices.
//!
//! Every search returns `Option<usize>`: the index of a matching element, or
//! `None` when the key is absent. When the slice contains duplicates of the
//! key, any matching index may be returned.

pub mod binary;
pub mod jump;
pub mod linear;
