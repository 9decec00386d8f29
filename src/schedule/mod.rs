//! The maintenance-scheduling frontend.
//!
//! This module bridges the domain model to the generic engine: it defines
//! the problem semantics (variables are (plane, slot) pairs, values are
//! grid positions), the declarative constraint definitions, and the builder
//! that expands a [`crate::model::instance::MaintenanceInstance`] into a
//! ready-to-search problem.

pub mod builder;
pub mod constraints;
pub mod plan;
pub mod registry;

use crate::{
    model::position::Position,
    schedule::constraints::{
        separation::{SeparationConstraint, SpecialistSeparationConstraint},
        specialist::SpecialistRequirementConstraint,
    },
    solver::{
        constraint::Constraint,
        constraints::{all_different::AllDifferentConstraint, at_most_k::AtMostKValueConstraint},
        semantics::DomainSemantics,
    },
};

/// Problem semantics for maintenance bay scheduling.
#[derive(Debug, Clone)]
pub struct BaySemantics;

/// Declarative form of every rule the builder can emit, one case per
/// constraint family.
#[derive(Debug, Clone)]
pub enum BayConstraint {
    /// No two planes share a position within a slot.
    SlotExclusivity(AllDifferentConstraint<BaySemantics>),
    /// At most two planes per maintenance bay per slot.
    BayCapacity(AtMostKValueConstraint<BaySemantics>),
    /// At most one wide-body plane per specialist bay per slot.
    WideBodyBayCapacity(AtMostKValueConstraint<BaySemantics>),
    /// No two planes on edge-adjacent cells within a slot.
    Separation(SeparationConstraint),
    /// No two wide-body planes on adjacent specialist bays within a slot.
    SpecialistSeparation(SpecialistSeparationConstraint),
    /// A plane with both duty kinds must reach a specialist bay.
    SpecialistRequirement(SpecialistRequirementConstraint),
}

impl DomainSemantics for BaySemantics {
    type Value = Position;
    type ConstraintDefinition = BayConstraint;

    fn build_constraint(&self, definition: &Self::ConstraintDefinition) -> Box<dyn Constraint<Self>> {
        match definition {
            BayConstraint::SlotExclusivity(c) => Box::new(c.clone()),
            BayConstraint::BayCapacity(c) => Box::new(c.clone()),
            BayConstraint::WideBodyBayCapacity(c) => Box::new(c.clone()),
            BayConstraint::Separation(c) => Box::new(c.clone()),
            BayConstraint::SpecialistSeparation(c) => Box::new(c.clone()),
            BayConstraint::SpecialistRequirement(c) => Box::new(c.clone()),
        }
    }
}
