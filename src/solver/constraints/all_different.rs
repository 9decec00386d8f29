use std::collections::HashSet;

use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    semantics::DomainSemantics,
};

/// A constraint that ensures all variables in a given set take pairwise
/// distinct values.
///
/// Only the bound part of the assignment is judged: two bound variables
/// sharing a value is a violation, while unbound variables never block. A
/// complete assignment therefore satisfies this constraint exactly when the
/// whole group is distinct.
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint<S: DomainSemantics + std::fmt::Debug> {
    pub vars: Vec<VariableId>,
    _phantom: std::marker::PhantomData<S>,
}

impl<S: DomainSemantics + std::fmt::Debug> AllDifferentConstraint<S> {
    /// Creates a new `AllDifferentConstraint` over the given set of variables.
    pub fn new(vars: Vec<VariableId>) -> Self {
        Self {
            vars,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S: DomainSemantics + std::fmt::Debug> Constraint<S> for AllDifferentConstraint<S> {
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
            name: "AllDifferentConstraint".to_string(),
            description: format!("AllDifferent({})", vars_str),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<S::Value>) -> bool {
        let mut seen = HashSet::new();
        for &var in &self.vars {
            if let Some(value) = assignment.get(var) {
                if !seen.insert(value) {
                    return false;
                }
            }
        }
        true
    }
}
