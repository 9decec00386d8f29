use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    semantics::DomainSemantics,
};

/// Caps how many variables in scope may take one particular value.
///
/// Over variables `[v1..vn]` with value `p` and limit `k`, the constraint
/// holds while at most `k` of the *bound* variables equal `p`. Unbound
/// variables do not count, so a partial assignment that already exceeds the
/// cap is rejected as early as possible.
#[derive(Debug, Clone)]
pub struct AtMostKValueConstraint<S: DomainSemantics + std::fmt::Debug> {
    pub vars: Vec<VariableId>,
    value: S::Value,
    limit: usize,
    _phantom: std::marker::PhantomData<S>,
}

impl<S: DomainSemantics + std::fmt::Debug> AtMostKValueConstraint<S> {
    pub fn new(vars: Vec<VariableId>, value: S::Value, limit: usize) -> Self {
        Self {
            vars,
            value,
            limit,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S: DomainSemantics + std::fmt::Debug> Constraint<S> for AtMostKValueConstraint<S> {
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
            name: "AtMostKValueConstraint".to_string(),
            description: format!(
                "AtMost({}, {:?}, [{}])",
                self.limit, self.value, vars_str
            ),
        }
    }

    fn is_satisfied(&self, assignment: &Assignment<S::Value>) -> bool {
        let occupants = self
            .vars
            .iter()
            .filter_map(|&var| assignment.get(var))
            .filter(|&value| *value == self.value)
            .count();
        occupants <= self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::value::StandardValue;

    #[derive(Debug, Clone)]
    struct TestSemantics;

    impl DomainSemantics for TestSemantics {
        type Value = StandardValue;
        type ConstraintDefinition = ();

        fn build_constraint(
            &self,
            _definition: &Self::ConstraintDefinition,
        ) -> Box<dyn Constraint<Self>> {
            unimplemented!("Not needed for constraint unit tests")
        }
    }

    fn int_val(i: i64) -> StandardValue {
        StandardValue::Int(i)
    }

    #[test]
    fn under_the_cap_satisfies() {
        let constraint =
            AtMostKValueConstraint::<TestSemantics>::new(vec![0, 1, 2], int_val(7), 2);
        let mut assignment = Assignment::new(3);
        assignment.bind(0, int_val(7));
        assignment.bind(1, int_val(7));
        assert!(constraint.is_satisfied(&assignment));
    }

    #[test]
    fn exceeding_the_cap_violates() {
        let constraint =
            AtMostKValueConstraint::<TestSemantics>::new(vec![0, 1, 2], int_val(7), 2);
        let mut assignment = Assignment::new(3);
        assignment.bind(0, int_val(7));
        assignment.bind(1, int_val(7));
        assignment.bind(2, int_val(7));
        assert!(!constraint.is_satisfied(&assignment));
    }

    #[test]
    fn other_values_do_not_count() {
        let constraint =
            AtMostKValueConstraint::<TestSemantics>::new(vec![0, 1, 2], int_val(7), 1);
        let mut assignment = Assignment::new(3);
        assignment.bind(0, int_val(7));
        assignment.bind(1, int_val(8));
        assignment.bind(2, int_val(9));
        assert!(constraint.is_satisfied(&assignment));
    }

    #[test]
    fn unbound_variables_do_not_count() {
        let constraint =
            AtMostKValueConstraint::<TestSemantics>::new(vec![0, 1, 2], int_val(7), 1);
        let mut assignment = Assignment::new(3);
        assignment.bind(1, int_val(7));
        assert!(constraint.is_satisfied(&assignment));
    }
}
