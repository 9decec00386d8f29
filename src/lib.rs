//! Apron is an exhaustive constraint solver for aircraft maintenance bay
//! scheduling.
//!
//! A hangar is modelled as a grid of positions; every plane in the roster
//! must hold one position per time slot, subject to occupancy, adjacency,
//! and specialization rules, and the solver enumerates *every* assignment
//! that satisfies all of them. The engine itself is problem-agnostic, with
//! a two-layered architecture: a generic solver backend and a
//! problem-specific frontend.
//!
//! # Core Concepts
//!
//! - **[`DomainSemantics`](solver::semantics::DomainSemantics)**: a trait
//!   you implement to define the "what" of a problem: the value type
//!   variables range over, and how declarative constraint definitions turn
//!   into runnable rules.
//! - **[`Constraint`](solver::constraint::Constraint)**: a rule over a
//!   subset of the variables, held as a plain data record with a pure
//!   satisfaction predicate.
//! - **[`SolverEngine`](solver::engine::SolverEngine)**: deterministic
//!   depth-first backtracking that enumerates all solutions, eagerly or as
//!   a lazy sequence.
//! - **[`ScheduleBuilder`](schedule::builder::ScheduleBuilder)**: the
//!   maintenance frontend. It expands a parsed
//!   [`MaintenanceInstance`](model::instance::MaintenanceInstance) into
//!   variables, full-grid domains, and the complete constraint set.
//!
//! # Example: a one-slot schedule on a 2x2 grid
//!
//! Two planes on a 2x2 grid can only keep clear of each other on the
//! diagonals, so exactly four schedules exist (two cell pairs, in either
//! plane order):
//!
//! ```
//! use apron::model::instance::MaintenanceInstance;
//! use apron::model::plane::{AircraftClass, Plane};
//! use apron::model::position::Position;
//! use apron::schedule::builder::ScheduleBuilder;
//! use apron::solver::engine::SolverEngine;
//!
//! let instance = MaintenanceInstance {
//!     slots: 1,
//!     rows: 2,
//!     cols: 2,
//!     standard_bays: vec![Position::new(0, 0), Position::new(0, 1)],
//!     specialist_bays: vec![Position::new(1, 0)],
//!     planes: vec![
//!         Plane::new("1", AircraftClass::Standard, 1, 0),
//!         Plane::new("2", AircraftClass::Standard, 1, 0),
//!     ],
//! };
//!
//! let (problem, _registry) = ScheduleBuilder::new(&instance).build().unwrap();
//! let engine = SolverEngine::default();
//! let (solutions, stats) = engine.solve(&problem);
//!
//! assert_eq!(solutions.len(), 4);
//! assert_eq!(stats.solutions_found, 4);
//! ```

pub mod error;
pub mod model;
pub mod schedule;
pub mod solver;
