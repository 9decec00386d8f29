use im::OrdSet;

use crate::{
    model::position::Position,
    schedule::BaySemantics,
    solver::{
        assignment::Assignment,
        constraint::{Constraint, ConstraintDescriptor},
        engine::VariableId,
    },
};

/// Two planes sharing a slot may not stand on edge-adjacent cells.
///
/// One record exists per (slot, unordered plane pair). While either plane
/// is unassigned the rule holds trivially, so partial assignments are
/// never blocked by it.
#[derive(Debug, Clone)]
pub struct SeparationConstraint {
    vars: [VariableId; 2],
}

impl SeparationConstraint {
    pub fn new(a: VariableId, b: VariableId) -> Self {
        Self { vars: [a, b] }
    }
}

impl Constraint<BaySemantics> for SeparationConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "SeparationConstraint".to_string(),
            description: format!("NonAdjacent(?{}, ?{})", self.vars[0], self.vars[1]),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<Position>) -> bool {
        match (assignment.get(self.vars[0]), assignment.get(self.vars[1])) {
            (Some(first), Some(second)) => !first.is_adjacent_to(second),
            _ => true,
        }
    }
}

/// The stricter wide-body rule: two wide-body planes sharing a slot may not
/// occupy adjacent *specialist* bays.
///
/// One record exists per (slot, unordered wide-body pair). The rule only
/// engages when both positions are specialist bays; anywhere else on the
/// grid the general [`SeparationConstraint`] already governs spacing.
#[derive(Debug, Clone)]
pub struct SpecialistSeparationConstraint {
    vars: [VariableId; 2],
    specialist_bays: OrdSet<Position>,
}

impl SpecialistSeparationConstraint {
    pub fn new(a: VariableId, b: VariableId, specialist_bays: OrdSet<Position>) -> Self {
        Self {
            vars: [a, b],
            specialist_bays,
        }
    }
}

impl Constraint<BaySemantics> for SpecialistSeparationConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "SpecialistSeparationConstraint".to_string(),
            description: format!(
                "NonAdjacentSpecialist(?{}, ?{})",
                self.vars[0], self.vars[1]
            ),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<Position>) -> bool {
        let (Some(first), Some(second)) =
            (assignment.get(self.vars[0]), assignment.get(self.vars[1]))
        else {
            return true;
        };
        if !self.specialist_bays.contains(first) || !self.specialist_bays.contains(second) {
            return true;
        }
        !first.is_adjacent_to(second)
    }
}
