//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use crate::solver::{
    assignment::Assignment, engine::VariableId, problem::Problem, semantics::DomainSemantics,
};

/// A trait for variable-selection heuristics.
///
/// Implementors define a strategy for choosing which unbound variable the
/// engine should branch on next. The choice never affects which solutions
/// exist, only the order they are found in and how quickly dead ends are
/// pruned. It must be deterministic, or enumeration order stops being
/// reproducible.
pub trait VariableSelectionHeuristic<S: DomainSemantics> {
    /// Selects the next variable to be assigned.
    ///
    /// # Returns
    ///
    /// * `Some(VariableId)` of the chosen unbound variable.
    /// * `None` if every variable is already bound.
    fn select_variable(
        &self,
        problem: &Problem<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId>;
}

/// Selects the first unbound variable in declaration order.
///
/// This reproduces the order in which variables were registered, which for
/// scheduling problems is plane-major: all slots of the first plane, then
/// the second, and so on.
pub struct SelectFirstHeuristic;

impl<S: DomainSemantics> VariableSelectionHeuristic<S> for SelectFirstHeuristic {
    fn select_variable(
        &self,
        problem: &Problem<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        (0..problem.variable_count() as VariableId).find(|&variable| !assignment.is_bound(variable))
    }
}

/// Selects the unbound variable with the smallest domain, ties broken by
/// the lower [`VariableId`].
///
/// A "fail-first" strategy: the most constrained variable is branched on
/// early so dead ends show up near the top of the search tree. With uniform
/// domains it degenerates to declaration order and stays deterministic.
pub struct SmallestDomainHeuristic;

impl<S: DomainSemantics> VariableSelectionHeuristic<S> for SmallestDomainHeuristic {
    fn select_variable(
        &self,
        problem: &Problem<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        (0..problem.variable_count() as VariableId)
            .filter(|&variable| !assignment.is_bound(variable))
            .min_by_key(|&variable| (problem.domain(variable).len(), variable))
    }
}
