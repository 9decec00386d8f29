//! Constraint records specific to maintenance bay scheduling.
//!
//! The slot-exclusivity and occupancy-cap rules are instances of the
//! generic constraints in [`crate::solver::constraints`]; what lives here
//! needs to know about grid geometry or bay categories.

pub mod separation;
pub mod specialist;
