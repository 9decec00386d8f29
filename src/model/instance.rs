use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    model::{
        plane::Plane,
        position::{BayKind, Position},
    },
};

/// The parsed problem instance: everything the scheduling frontend needs to
/// expand into variables, domains, and constraints.
///
/// This is the boundary with the outside world: file parsing and CLI
/// handling produce one of these (typically via serde) and hand it over.
/// Grid cells that appear in neither bay list are plain parking spots:
/// planes may stand there, but no bay-specific rule applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceInstance {
    /// Number of time slots in the horizon.
    pub slots: usize,
    /// Grid height.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
    pub standard_bays: Vec<Position>,
    pub specialist_bays: Vec<Position>,
    pub planes: Vec<Plane>,
}

impl MaintenanceInstance {
    /// Checks the instance for structural defects.
    ///
    /// Constraint-dependent defects (a plane that needs a specialist bay
    /// when none exists) are not detected here; they surface when the
    /// constraint set is built, where the offending rule is known.
    pub fn validate(&self) -> Result<()> {
        if self.slots == 0 {
            return Err(ConfigError::ZeroSlots.into());
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            }
            .into());
        }

        let mut seen_bays = HashSet::new();
        for &bay in self.standard_bays.iter().chain(&self.specialist_bays) {
            if !bay.in_grid(self.rows, self.cols) {
                return Err(ConfigError::BayOutsideGrid {
                    bay,
                    rows: self.rows,
                    cols: self.cols,
                }
                .into());
            }
            if !seen_bays.insert(bay) {
                return Err(ConfigError::DuplicateBay { bay }.into());
            }
        }

        let mut seen_ids = HashSet::new();
        for plane in &self.planes {
            if !seen_ids.insert(plane.id.as_str()) {
                return Err(ConfigError::DuplicatePlaneId {
                    id: plane.id.clone(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Every cell of the grid in row-major order: the full domain of every
    /// variable. No pre-pruning happens here.
    pub fn grid_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Standard and specialist bays together, standard first.
    pub fn workshop_bays(&self) -> impl Iterator<Item = &Position> {
        self.standard_bays.iter().chain(&self.specialist_bays)
    }

    pub fn bay_kind(&self, position: &Position) -> Option<BayKind> {
        if self.standard_bays.contains(position) {
            Some(BayKind::Standard)
        } else if self.specialist_bays.contains(position) {
            Some(BayKind::Specialist)
        } else {
            None
        }
    }

    pub fn is_specialist_bay(&self, position: &Position) -> bool {
        self.specialist_bays.contains(position)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::plane::AircraftClass;

    fn small_instance() -> MaintenanceInstance {
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
    fn valid_instance_passes() {
        assert!(small_instance().validate().is_ok());
    }

    #[test]
    fn zero_slots_is_rejected() {
        let mut instance = small_instance();
        instance.slots = 0;
        let err = instance.validate().unwrap_err();
        assert!(matches!(err.config(), ConfigError::ZeroSlots));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let mut instance = small_instance();
        instance.cols = 0;
        let err = instance.validate().unwrap_err();
        assert!(matches!(err.config(), ConfigError::EmptyGrid { .. }));
    }

    #[test]
    fn bay_outside_grid_is_rejected() {
        let mut instance = small_instance();
        instance.specialist_bays.push(Position::new(5, 0));
        let err = instance.validate().unwrap_err();
        assert!(matches!(err.config(), ConfigError::BayOutsideGrid { .. }));
    }

    #[test]
    fn bay_in_both_categories_is_rejected() {
        let mut instance = small_instance();
        instance.specialist_bays.push(Position::new(0, 0));
        let err = instance.validate().unwrap_err();
        assert!(matches!(
            err.config(),
            ConfigError::DuplicateBay {
                bay: Position { row: 0, col: 0 }
            }
        ));
    }

    #[test]
    fn duplicate_plane_id_is_rejected() {
        let mut instance = small_instance();
        instance
            .planes
            .push(Plane::new("1", AircraftClass::WideBody, 0, 1));
        let err = instance.validate().unwrap_err();
        assert!(matches!(err.config(), ConfigError::DuplicatePlaneId { .. }));
    }

    #[test]
    fn grid_positions_scan_row_major() {
        let instance = small_instance();
        let cells: Vec<Position> = instance.grid_positions().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn bay_kind_distinguishes_categories() {
        let instance = small_instance();
        assert_eq!(
            instance.bay_kind(&Position::new(0, 0)),
            Some(BayKind::Standard)
        );
        assert_eq!(
            instance.bay_kind(&Position::new(1, 0)),
            Some(BayKind::Specialist)
        );
        assert_eq!(instance.bay_kind(&Position::new(1, 1)), None);
    }

    #[test]
    fn instance_deserializes_and_ignores_legacy_parking_field() {
        let json = r#"{
            "slots": 1,
            "rows": 2,
            "cols": 2,
            "standard_bays": [{"row": 0, "col": 0}],
            "specialist_bays": [{"row": 1, "col": 0}],
            "prk_positions": [{"row": 1, "col": 1}],
            "planes": [
                {"id": "1", "class": "JMB", "standard_duties": 1, "specialist_duties": 1}
            ]
        }"#;
        let instance: MaintenanceInstance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.planes[0].class, AircraftClass::WideBody);
        assert!(instance.validate().is_ok());
    }
}
