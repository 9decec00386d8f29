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

/// A plane carrying both duty kinds must be assigned a specialist bay.
///
/// The scope is some set of the plane's slot variables and the rule is
/// existential: at least one of them must resolve to a specialist bay.
/// While any scope variable is still unbound the requirement could yet be
/// met, so the predicate only fails once every variable in scope is bound
/// to a non-specialist cell.
///
/// Which variables the builder puts in scope decides the reading: all of
/// the plane's slots (the requirement holds across the schedule) or a
/// single slot variable (every such slot must itself be a specialist bay,
/// as the legacy scheduler enforced per slot).
#[derive(Debug, Clone)]
pub struct SpecialistRequirementConstraint {
    vars: Vec<VariableId>,
    specialist_bays: OrdSet<Position>,
}

impl SpecialistRequirementConstraint {
    pub fn new(vars: Vec<VariableId>, specialist_bays: OrdSet<Position>) -> Self {
        Self {
            vars,
            specialist_bays,
        }
    }
}

impl Constraint<BaySemantics> for SpecialistRequirementConstraint {
    fn scope(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .vars
            .iter()
            .map(|v| format!("?{}", v))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "SpecialistRequirementConstraint".to_string(),
            description: format!("AtLeastOneSpecialist({})", vars_str),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<Position>) -> bool {
        let mut all_bound = true;
        for &var in &self.vars {
            match assignment.get(var) {
                Some(position) => {
                    if self.specialist_bays.contains(position) {
                        return true;
                    }
                }
                None => all_bound = false,
            }
        }
        !all_bound
    }
}
