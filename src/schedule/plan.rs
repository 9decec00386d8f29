use serde::Serialize;

use crate::{
    model::{instance::MaintenanceInstance, position::Position},
    schedule::registry::VariableRegistry,
    solver::solution::Solution,
};

/// One plane standing at one position during one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaySlotAssignment {
    pub plane: String,
    pub slot: usize,
    pub position: Position,
}

/// A solution translated back into roster terms.
///
/// Solutions index by solver variable; a `BayPlan` re-keys them by plane id
/// and slot so callers (and reports) never see variable ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BayPlan {
    assignments: Vec<BaySlotAssignment>,
}

impl BayPlan {
    pub fn from_solution(
        instance: &MaintenanceInstance,
        registry: &VariableRegistry,
        solution: &Solution<Position>,
    ) -> Self {
        let assignments = solution
            .iter()
            .map(|(variable, &position)| {
                let (plane, slot) = registry.plane_and_slot(variable);
                BaySlotAssignment {
                    plane: instance.planes[plane].id.clone(),
                    slot,
                    position,
                }
            })
            .collect();
        Self { assignments }
    }

    pub fn assignments(&self) -> &[BaySlotAssignment] {
        &self.assignments
    }

    pub fn position_of(&self, plane: &str, slot: usize) -> Option<Position> {
        self.assignments
            .iter()
            .find(|assignment| assignment.plane == plane && assignment.slot == slot)
            .map(|assignment| assignment.position)
    }
}
