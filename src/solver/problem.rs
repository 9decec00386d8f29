use std::sync::Arc;

use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    solver::{
        constraint::Constraint,
        domain::Domain,
        engine::{ConstraintId, VariableId},
        semantics::DomainSemantics,
    },
};

/// A finalized problem: variables with their domains, plus the constraint
/// set, validated and indexed for search.
///
/// Construction is the only place configuration defects can surface; once a
/// `Problem` exists, search cannot fail, only terminate with zero or more
/// solutions.
#[derive(Debug)]
pub struct Problem<S: DomainSemantics> {
    semantics: Arc<S>,
    domains: Vec<Domain<S::Value>>,
    constraints: Vec<Box<dyn Constraint<S>>>,
    constraints_by_variable: Vec<Vec<ConstraintId>>,
}

impl<S: DomainSemantics> Problem<S> {
    /// Builds every definition through the semantics factory and validates
    /// the result.
    pub fn new(
        semantics: Arc<S>,
        domains: Vec<Domain<S::Value>>,
        definitions: &[S::ConstraintDefinition],
    ) -> Result<Self> {
        let constraints = definitions
            .iter()
            .map(|definition| semantics.build_constraint(definition))
            .collect();
        Self::with_constraints(semantics, domains, constraints)
    }

    /// Validates domains and constraint scopes, and indexes constraints by
    /// the variables they touch.
    pub fn with_constraints(
        semantics: Arc<S>,
        domains: Vec<Domain<S::Value>>,
        constraints: Vec<Box<dyn Constraint<S>>>,
    ) -> Result<Self> {
        for (variable, domain) in domains.iter().enumerate() {
            if domain.is_empty() {
                return Err(ConfigError::EmptyDomain {
                    variable: variable as VariableId,
                }
                .into());
            }
        }

        let mut constraints_by_variable = vec![Vec::new(); domains.len()];
        for (id, constraint) in constraints.iter().enumerate() {
            if constraint.scope().is_empty() {
                return Err(ConfigError::EmptyScope {
                    name: constraint.descriptor().name,
                }
                .into());
            }
            for &variable in constraint.scope() {
                let Some(touching) = constraints_by_variable.get_mut(variable as usize) else {
                    return Err(ConfigError::UnknownVariable {
                        name: constraint.descriptor().name,
                        variable,
                    }
                    .into());
                };
                touching.push(id);
            }
        }

        debug!(
            variables = domains.len(),
            constraints = constraints.len(),
            "problem finalized"
        );

        Ok(Self {
            semantics,
            domains,
            constraints,
            constraints_by_variable,
        })
    }

    pub fn semantics(&self) -> &Arc<S> {
        &self.semantics
    }

    pub fn variable_count(&self) -> usize {
        self.domains.len()
    }

    pub fn domain(&self, variable: VariableId) -> &Domain<S::Value> {
        &self.domains[variable as usize]
    }

    pub fn constraints(&self) -> &[Box<dyn Constraint<S>>] {
        &self.constraints
    }

    /// Ids of every constraint whose scope contains `variable`.
    pub fn constraints_on(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_by_variable[variable as usize]
    }
}
