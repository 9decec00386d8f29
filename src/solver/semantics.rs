use crate::solver::{constraint::Constraint, value::ValueOrdering};

/// A trait that defines the "frontend" for a specific problem domain.
///
/// This is the primary interface for connecting a concrete problem (like
/// maintenance bay scheduling) to the generic engine. An implementation
/// names the value type that variables range over and knows how to turn
/// declarative constraint definitions into runnable [`Constraint`] objects.
pub trait DomainSemantics: 'static + Clone {
    /// The concrete type for a value in a variable's domain.
    ///
    /// The ordering of this type fixes the order in which the engine tries
    /// candidate values.
    type Value: ValueOrdering;

    /// A structure that defines a single constraint in the problem domain.
    ///
    /// This is typically an enum where each variant represents a different
    /// kind of constraint.
    type ConstraintDefinition: std::fmt::Debug;

    /// A factory method that constructs a runnable [`Constraint`] object
    /// from its definition.
    ///
    /// The problem builder calls this to turn the declarative constraint
    /// definitions into executable logic.
    fn build_constraint(
        &self,
        definition: &Self::ConstraintDefinition,
    ) -> Box<dyn Constraint<Self>>;
}
