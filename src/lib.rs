//! devsnap - Device attribute snapshot library.
//!
//! Collects a one-shot snapshot of host device attributes (OS identity,
//! hardware identifiers, display geometry, memory, storage, and network
//! reachability) with per-probe fault isolation: a failing subsystem query
//! degrades to documented fallback values instead of failing the snapshot.

pub mod collector;
pub mod model;
