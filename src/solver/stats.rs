use std::{collections::HashMap, time::Duration};

use prettytable::{Cell, Row, Table};

use crate::solver::{
    constraint::Constraint,
    engine::ConstraintId,
    semantics::DomainSemantics,
};

/// Work accounted to a single constraint over one search.
#[derive(Debug, Clone, Default)]
pub struct PerConstraintStats {
    /// How many times the predicate was evaluated.
    pub checks: u64,
    /// How many evaluations rejected the partial assignment.
    pub violations: u64,
    pub time_spent_micros: u64,
}

/// Aggregate counters for one search.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Tentative bindings tried, including ones that were rejected.
    pub nodes_visited: u64,
    /// Frames popped after their candidate values were exhausted.
    pub backtracks: u64,
    pub solutions_found: u64,
    /// Wall-clock time of the search.
    pub elapsed: Duration,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

pub fn render_stats_table<S: DomainSemantics>(
    stats: &SearchStats,
    constraints: &[Box<dyn Constraint<S>>],
) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Checks"),
        Cell::new("Violations"),
        Cell::new("Time / Check (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();

    sorted_stats.sort_by_key(|entry| *entry.0);

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = constraints[*constraint_id].descriptor();
        let avg_time = if constraint_stats.checks > 0 {
            constraint_stats.time_spent_micros as f64 / constraint_stats.checks as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.checks.to_string()),
            Cell::new(&constraint_stats.violations.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
