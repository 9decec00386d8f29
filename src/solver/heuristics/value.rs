use crate::solver::{domain::Domain, semantics::DomainSemantics};

/// A trait for strategies that determine the order of values to try for a
/// variable.
pub trait ValueOrderingHeuristic<S: DomainSemantics> {
    /// Given a variable's domain, returns an iterator over the values in
    /// the order they should be tried.
    fn order_values<'a>(
        &self,
        domain: &'a Domain<S::Value>,
    ) -> Box<dyn Iterator<Item = &'a S::Value> + 'a>;
}

/// Yields values in the domain's natural ascending order.
///
/// For grid positions this is the row-major scan, which matches the
/// reference enumeration order.
pub struct IdentityValueHeuristic;

impl<S: DomainSemantics> ValueOrderingHeuristic<S> for IdentityValueHeuristic {
    fn order_values<'a>(
        &self,
        domain: &'a Domain<S::Value>,
    ) -> Box<dyn Iterator<Item = &'a S::Value> + 'a> {
        Box::new(domain.iter())
    }
}
