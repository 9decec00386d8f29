use crate::solver::{
    assignment::Assignment, engine::VariableId, semantics::DomainSemantics,
};

#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// Arity classification of a constraint's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
    Nary,
}

/// A rule over a subset of the problem's variables.
///
/// Implementations are plain data records: the scope and any parameters are
/// held by value and fixed at construction time. `is_satisfied` is a pure
/// predicate over the current partial assignment. An unbound variable in
/// scope must never cause a failure (the predicate judges only the bound
/// part), so the engine can prune partial assignments without blocking on
/// incomplete information. Constraints never raise; inconsistency is always
/// expressed as `false`.
pub trait Constraint<S: DomainSemantics>: std::fmt::Debug {
    /// The ordered set of variables this constraint examines.
    fn scope(&self) -> &[VariableId];

    fn descriptor(&self) -> ConstraintDescriptor;

    /// Whether the bound part of `assignment` is consistent with this rule.
    fn is_satisfied(&self, assignment: &Assignment<S::Value>) -> bool;

    fn arity(&self) -> Arity {
        match self.scope().len() {
            1 => Arity::Unary,
            2 => Arity::Binary,
            _ => Arity::Nary,
        }
    }
}
