//! The generic constraint-solving backend.
//!
//! Nothing in this module knows about planes or bays: a problem is a set of
//! variables with finite, ordered domains and a list of [`constraint::Constraint`]
//! records, and the engine enumerates every complete assignment that
//! satisfies all of them.

pub mod assignment;
pub mod constraint;
pub mod constraints;
pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod problem;
pub mod semantics;
pub mod solution;
pub mod stats;
pub mod value;
