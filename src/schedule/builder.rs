use std::sync::Arc;

use im::OrdSet;
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    model::{instance::MaintenanceInstance, position::Position},
    schedule::{
        constraints::{
            separation::{SeparationConstraint, SpecialistSeparationConstraint},
            specialist::SpecialistRequirementConstraint,
        },
        registry::VariableRegistry,
        BayConstraint, BaySemantics,
    },
    solver::{
        constraints::{all_different::AllDifferentConstraint, at_most_k::AtMostKValueConstraint},
        domain::Domain,
        engine::VariableId,
        problem::Problem,
    },
};

/// Which reading of the specialist-bay requirement the builder emits.
///
/// The rule says a plane with both duty kinds must be assigned a
/// specialist bay; the two readings differ in when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialistRule {
    /// At least one of the plane's slots lands on a specialist bay.
    #[default]
    AcrossSlots,
    /// Every slot of a qualifying plane must itself land on a specialist
    /// bay, as the legacy scheduler enforced slot by slot.
    PerSlot,
}

/// Expands a [`MaintenanceInstance`] into variables, full-grid domains,
/// and the complete maintenance constraint set.
///
/// One variable exists per (plane, slot) pair and every domain is the full
/// grid; nothing is pre-pruned. Constraint records are constructed one per
/// (slot, bay) or (slot, pair) combination, each holding its scope and
/// parameters by value.
pub struct ScheduleBuilder<'a> {
    instance: &'a MaintenanceInstance,
    specialist_rule: SpecialistRule,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(instance: &'a MaintenanceInstance) -> Self {
        Self {
            instance,
            specialist_rule: SpecialistRule::default(),
        }
    }

    pub fn specialist_rule(mut self, rule: SpecialistRule) -> Self {
        self.specialist_rule = rule;
        self
    }

    /// Validates the instance and builds the problem.
    ///
    /// Defects that depend on the constraint set (a qualifying plane when
    /// the instance has no specialist bay at all) surface here rather than
    /// silently producing an unsatisfiable problem.
    pub fn build(self) -> Result<(Problem<BaySemantics>, VariableRegistry)> {
        let instance = self.instance;
        instance.validate()?;

        let registry = VariableRegistry::new(instance.planes.len(), instance.slots);

        let grid: OrdSet<Position> = instance.grid_positions().collect();
        let domains = vec![Domain::new(grid); registry.variable_count()];

        let specialist_bays: OrdSet<Position> =
            instance.specialist_bays.iter().cloned().collect();
        let wide_bodies: Vec<usize> = instance
            .planes
            .iter()
            .enumerate()
            .filter(|(_, plane)| plane.is_wide_body())
            .map(|(index, _)| index)
            .collect();

        let mut definitions = Vec::new();

        for slot in 0..instance.slots {
            let slot_vars: Vec<VariableId> = registry.slot_variables(slot).collect();

            if !slot_vars.is_empty() {
                definitions.push(BayConstraint::SlotExclusivity(AllDifferentConstraint::new(
                    slot_vars.clone(),
                )));

                for &bay in instance.workshop_bays() {
                    definitions.push(BayConstraint::BayCapacity(AtMostKValueConstraint::new(
                        slot_vars.clone(),
                        bay,
                        2,
                    )));
                }
            }

            if !wide_bodies.is_empty() {
                let wide_vars: Vec<VariableId> = wide_bodies
                    .iter()
                    .map(|&plane| registry.variable(plane, slot))
                    .collect();
                for &bay in &instance.specialist_bays {
                    definitions.push(BayConstraint::WideBodyBayCapacity(
                        AtMostKValueConstraint::new(wide_vars.clone(), bay, 1),
                    ));
                }
            }

            for i in 0..slot_vars.len() {
                for j in (i + 1)..slot_vars.len() {
                    definitions.push(BayConstraint::Separation(SeparationConstraint::new(
                        slot_vars[i],
                        slot_vars[j],
                    )));
                }
            }

            for i in 0..wide_bodies.len() {
                for j in (i + 1)..wide_bodies.len() {
                    definitions.push(BayConstraint::SpecialistSeparation(
                        SpecialistSeparationConstraint::new(
                            registry.variable(wide_bodies[i], slot),
                            registry.variable(wide_bodies[j], slot),
                            specialist_bays.clone(),
                        ),
                    ));
                }
            }
        }

        for (index, plane) in instance.planes.iter().enumerate() {
            if !plane.requires_specialist_bay() {
                continue;
            }
            if instance.specialist_bays.is_empty() {
                return Err(ConfigError::NoSpecialistBays {
                    id: plane.id.clone(),
                }
                .into());
            }
            match self.specialist_rule {
                SpecialistRule::AcrossSlots => {
                    definitions.push(BayConstraint::SpecialistRequirement(
                        SpecialistRequirementConstraint::new(
                            registry.plane_variables(index).collect(),
                            specialist_bays.clone(),
                        ),
                    ));
                }
                SpecialistRule::PerSlot => {
                    for slot in 0..instance.slots {
                        definitions.push(BayConstraint::SpecialistRequirement(
                            SpecialistRequirementConstraint::new(
                                vec![registry.variable(index, slot)],
                                specialist_bays.clone(),
                            ),
                        ));
                    }
                }
            }
        }

        debug!(
            variables = registry.variable_count(),
            constraints = definitions.len(),
            rule = ?self.specialist_rule,
            "constraint set built"
        );

        let problem = Problem::new(Arc::new(BaySemantics), domains, &definitions)?;
        Ok((problem, registry))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::plane::{AircraftClass, Plane},
        solver::engine::SolverEngine,
    };

    fn two_plane_instance() -> MaintenanceInstance {
        MaintenanceInstance {
            slots: 1,
            rows: 2,
            cols: 2,
            standard_bays: vec![Position::new(0, 0), Position::new(0, 1)],
            specialist_bays: vec![Position::new(1, 0)],
            planes: vec![
                Plane::new("1", AircraftClass::Standard, 1, 0),
                Plane::new("2", AircraftClass::Standard, 1, 0),
            ],
        }
    }

    #[test]
    fn two_planes_on_a_2x2_grid_have_exactly_the_diagonal_layouts() {
        let instance = two_plane_instance();
        let (problem, _registry) = ScheduleBuilder::new(&instance).build().unwrap();
        let engine = SolverEngine::default();
        let (solutions, stats) = engine.solve(&problem);

        // Of the twelve ordered placements of two planes on distinct
        // cells, only the two diagonals keep them non-adjacent, in either
        // plane order.
        let actual: Vec<Vec<Position>> = solutions
            .iter()
            .map(|solution| solution.values().to_vec())
            .collect();
        let expected = vec![
            vec![Position::new(0, 0), Position::new(1, 1)],
            vec![Position::new(0, 1), Position::new(1, 0)],
            vec![Position::new(1, 0), Position::new(0, 1)],
            vec![Position::new(1, 1), Position::new(0, 0)],
        ];
        assert_eq!(actual, expected);
        assert_eq!(stats.solutions_found, 4);
    }

    #[test]
    fn builder_emits_one_record_per_combination() {
        let instance = two_plane_instance();
        let (problem, _) = ScheduleBuilder::new(&instance).build().unwrap();

        // 1 exclusivity + 3 bay capacities + 1 separation pair; no
        // wide-bodies and no qualifying planes.
        assert_eq!(problem.constraints().len(), 5);
    }

    #[test]
    fn empty_roster_yields_exactly_one_trivial_schedule() {
        let instance = MaintenanceInstance {
            planes: vec![],
            ..two_plane_instance()
        };
        let (problem, _) = ScheduleBuilder::new(&instance).build().unwrap();
        let engine = SolverEngine::default();
        let (solutions, _) = engine.solve(&problem);

        assert_eq!(solutions.len(), 1);
        assert!(solutions.get(0).unwrap().is_empty());
    }

    #[test]
    fn overfull_slot_yields_zero_schedules_not_an_error() {
        let mut instance = two_plane_instance();
        for i in 3..=5 {
            instance
                .planes
                .push(Plane::new(i.to_string(), AircraftClass::Standard, 1, 0));
        }
        let (problem, _) = ScheduleBuilder::new(&instance).build().unwrap();
        let engine = SolverEngine::default();
        let (solutions, _) = engine.solve(&problem);

        assert!(solutions.is_empty());
    }

    #[test]
    fn repeated_searches_enumerate_identically() {
        let instance = two_plane_instance();
        let (problem, _) = ScheduleBuilder::new(&instance).build().unwrap();
        let engine = SolverEngine::default();

        let (first, _) = engine.solve(&problem);
        let (second, _) = engine.solve(&problem);
        assert_eq!(first, second);
    }

    fn qualifying_plane_instance() -> MaintenanceInstance {
        MaintenanceInstance {
            slots: 2,
            rows: 1,
            cols: 3,
            standard_bays: vec![Position::new(0, 0)],
            specialist_bays: vec![Position::new(0, 2)],
            planes: vec![Plane::new("1", AircraftClass::Standard, 1, 1)],
        }
    }

    #[test]
    fn across_slots_rule_requires_one_specialist_visit() {
        let instance = qualifying_plane_instance();
        let (problem, registry) = ScheduleBuilder::new(&instance)
            .specialist_rule(SpecialistRule::AcrossSlots)
            .build()
            .unwrap();
        let engine = SolverEngine::default();
        let (solutions, _) = engine.solve(&problem);

        // Nine position pairs over two slots, minus the four that never
        // touch the specialist bay.
        assert_eq!(solutions.len(), 5);
        for solution in solutions.iter() {
            let visited = registry
                .plane_variables(0)
                .any(|var| *solution.value_of(var) == Position::new(0, 2));
            assert!(visited);
        }
    }

    #[test]
    fn per_slot_rule_pins_every_slot_to_a_specialist_bay() {
        let instance = qualifying_plane_instance();
        let (problem, _) = ScheduleBuilder::new(&instance)
            .specialist_rule(SpecialistRule::PerSlot)
            .build()
            .unwrap();
        let engine = SolverEngine::default();
        let (solutions, _) = engine.solve(&problem);

        // The single specialist bay is forced in both slots.
        assert_eq!(solutions.len(), 1);
        assert_eq!(
            solutions.get(0).unwrap().values().to_vec(),
            vec![Position::new(0, 2), Position::new(0, 2)]
        );
    }

    fn wide_body_pair_instance(specialist_bays: Vec<Position>) -> MaintenanceInstance {
        MaintenanceInstance {
            slots: 1,
            rows: 1,
            cols: 3,
            standard_bays: vec![],
            specialist_bays,
            planes: vec![
                Plane::new("1", AircraftClass::WideBody, 1, 1),
                Plane::new("2", AircraftClass::WideBody, 1, 1),
            ],
        }
    }

    #[test]
    fn wide_bodies_fit_distant_specialist_bays() {
        let instance =
            wide_body_pair_instance(vec![Position::new(0, 0), Position::new(0, 2)]);
        let (problem, _) = ScheduleBuilder::new(&instance).build().unwrap();
        let engine = SolverEngine::default();
        let (solutions, _) = engine.solve(&problem);

        // Both planes must reach a specialist bay in the only slot, and
        // the two bays are far enough apart: one layout per plane order.
        assert_eq!(solutions.len(), 2);
    }

    #[test]
    fn adjacent_specialist_bays_cannot_host_two_wide_bodies() {
        let instance =
            wide_body_pair_instance(vec![Position::new(0, 0), Position::new(0, 1)]);
        let (problem, _) = ScheduleBuilder::new(&instance).build().unwrap();
        let engine = SolverEngine::default();
        let (solutions, _) = engine.solve(&problem);

        assert!(solutions.is_empty());
    }

    #[test]
    fn qualifying_plane_without_specialist_bays_is_a_config_error() {
        let mut instance = qualifying_plane_instance();
        instance.specialist_bays.clear();
        let err = ScheduleBuilder::new(&instance).build().unwrap_err();
        assert!(matches!(
            err.config(),
            ConfigError::NoSpecialistBays { .. }
        ));
    }

    #[test]
    fn instance_defects_surface_before_search() {
        let mut instance = two_plane_instance();
        instance.slots = 0;
        let err = ScheduleBuilder::new(&instance).build().unwrap_err();
        assert!(matches!(err.config(), ConfigError::ZeroSlots));
    }
}
