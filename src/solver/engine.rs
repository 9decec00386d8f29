use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Instant,
};

use tracing::debug;

use crate::solver::{
    assignment::Assignment,
    heuristics::{
        value::{IdentityValueHeuristic, ValueOrderingHeuristic},
        variable::{SelectFirstHeuristic, VariableSelectionHeuristic},
    },
    problem::Problem,
    semantics::DomainSemantics,
    solution::{Solution, SolutionSet},
    stats::SearchStats,
};

pub type VariableId = u32;
pub type ConstraintId = usize;

/// Cooperative cancellation for a running enumeration.
///
/// The engine checks the token once per search step; a cancelled search
/// stops yielding but does not invalidate solutions already emitted.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// The main engine for enumerating solutions to a constraint satisfaction
/// problem.
///
/// The engine performs an exhaustive depth-first backtracking search: it
/// repeatedly picks an unbound variable, tries each candidate value in
/// domain order, re-checks the constraints touching that variable, and
/// backtracks when a variable's candidates are exhausted. Every complete,
/// consistent assignment is emitted; the search does not stop at the first
/// solution.
///
/// With deterministic heuristics (the defaults), two runs over the same
/// problem produce the identical solution sequence.
pub struct SolverEngine<S: DomainSemantics> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
    cancellation: Option<CancellationToken>,
}

impl<S: DomainSemantics> SolverEngine<S> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            cancellation: None,
        }
    }

    /// Attaches a cancellation token checked at every search step.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Exhaustively enumerates all solutions, collecting them eagerly.
    ///
    /// Returns the ordered solution set together with the final search
    /// statistics. An empty set means the search space holds no valid
    /// assignment, which is an ordinary outcome, not an error.
    pub fn solve(&self, problem: &Problem<S>) -> (SolutionSet<S::Value>, SearchStats) {
        let mut search = self.enumerate(problem);
        let mut solutions = SolutionSet::new();
        for solution in search.by_ref() {
            solutions.push(solution);
        }
        (solutions, search.into_stats())
    }

    /// Lazily enumerates solutions.
    ///
    /// The returned [`Search`] yields solutions on demand, so a caller that
    /// only needs a count (or the first few solutions) never materializes
    /// the full set. Restarting requires a fresh call; the sequence is not
    /// rewindable.
    pub fn enumerate<'p>(&'p self, problem: &'p Problem<S>) -> Search<'p, S> {
        debug!(
            variables = problem.variable_count(),
            constraints = problem.constraints().len(),
            "search started"
        );
        Search {
            engine: self,
            problem,
            assignment: Assignment::new(problem.variable_count()),
            stack: Vec::with_capacity(problem.variable_count()),
            stats: SearchStats::default(),
            started_at: Instant::now(),
            started: false,
            done: false,
        }
    }
}

impl<S: DomainSemantics> Default for SolverEngine<S> {
    fn default() -> Self {
        Self::new(Box::new(SelectFirstHeuristic), Box::new(IdentityValueHeuristic))
    }
}

struct Frame<'p, S: DomainSemantics> {
    variable: VariableId,
    values: Box<dyn Iterator<Item = &'p S::Value> + 'p>,
}

/// A depth-first enumeration in progress.
///
/// One frame per branched variable: the frame owns the variable's remaining
/// candidate values, and the binding of its variable lives from the moment
/// a candidate is tried until the search returns to the frame for the next
/// one. The assignment is private to this search; emitted solutions are
/// independent copies.
pub struct Search<'p, S: DomainSemantics> {
    engine: &'p SolverEngine<S>,
    problem: &'p Problem<S>,
    assignment: Assignment<S::Value>,
    stack: Vec<Frame<'p, S>>,
    stats: SearchStats,
    started_at: Instant,
    started: bool,
    done: bool,
}

impl<'p, S: DomainSemantics> Search<'p, S> {
    /// Statistics accumulated so far; final once the iterator is exhausted.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn into_stats(mut self) -> SearchStats {
        if !self.done {
            self.stats.elapsed = self.started_at.elapsed();
        }
        self.stats
    }

    fn finish(&mut self) {
        self.done = true;
        self.stats.elapsed = self.started_at.elapsed();
        debug!(
            solutions = self.stats.solutions_found,
            nodes = self.stats.nodes_visited,
            backtracks = self.stats.backtracks,
            "search finished"
        );
    }

    fn push_frame(&mut self, variable: VariableId) {
        let domain = self.problem.domain(variable);
        self.stack.push(Frame {
            variable,
            values: self.engine.value_heuristic.order_values(domain),
        });
    }

    /// Re-checks every constraint whose scope contains `variable`.
    ///
    /// Predicates are non-blocking on unbound variables, so checking
    /// constraints with partially bound scopes is sound and prunes dead
    /// branches before they are expanded.
    fn consistent(&mut self, variable: VariableId) -> bool {
        for &constraint_id in self.problem.constraints_on(variable) {
            let entry = self.stats.constraint_stats.entry(constraint_id).or_default();
            entry.checks += 1;
            let start_time = Instant::now();
            let satisfied =
                self.problem.constraints()[constraint_id].is_satisfied(&self.assignment);
            entry.time_spent_micros += start_time.elapsed().as_micros() as u64;
            if !satisfied {
                entry.violations += 1;
                return false;
            }
        }
        true
    }
}

impl<'p, S: DomainSemantics> Iterator for Search<'p, S> {
    type Item = Solution<S::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            if self.problem.variable_count() == 0 {
                // An empty roster has exactly one trivial solution.
                self.stats.solutions_found += 1;
                self.finish();
                return Some(Solution::new(Vec::new()));
            }
            let Some(first) = self
                .engine
                .variable_heuristic
                .select_variable(self.problem, &self.assignment)
            else {
                self.finish();
                return None;
            };
            self.push_frame(first);
        }

        loop {
            if let Some(token) = &self.engine.cancellation {
                if token.is_cancelled() {
                    debug!("search cancelled");
                    self.finish();
                    return None;
                }
            }

            let Some(frame) = self.stack.last_mut() else {
                self.finish();
                return None;
            };
            let variable = frame.variable;
            let next_value = frame.values.next().cloned();

            // Drop the binding left over from the previous candidate (or
            // from the solution just emitted) before moving on.
            if self.assignment.is_bound(variable) {
                self.assignment.unbind(variable);
            }

            match next_value {
                Some(value) => {
                    self.stats.nodes_visited += 1;
                    self.assignment.bind(variable, value);
                    if !self.consistent(variable) {
                        continue;
                    }
                    if let Some(values) = self.assignment.snapshot() {
                        self.stats.solutions_found += 1;
                        return Some(Solution::new(values));
                    }
                    let Some(next_variable) = self
                        .engine
                        .variable_heuristic
                        .select_variable(self.problem, &self.assignment)
                    else {
                        // A heuristic found nothing to branch on even
                        // though the assignment is incomplete; treat the
                        // branch as a dead end.
                        continue;
                    };
                    self.push_frame(next_variable);
                }
                None => {
                    self.stack.pop();
                    self.stats.backtracks += 1;
                }
            }
        }
    }
}
