//! Reusable, problem-agnostic constraint records.
//!
//! Domain-specific rules (adjacency, specialist requirements) live with
//! their frontend; what is here applies to any value type.

pub mod all_different;
pub mod at_most_k;
