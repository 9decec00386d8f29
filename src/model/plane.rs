use serde::{Deserialize, Serialize};

/// Aircraft size class.
///
/// Wide-body airframes are subject to stricter occupancy and adjacency
/// rules at specialist bays. The wire tags (`"STD"` / `"JMB"`) follow the
/// roster format of the legacy scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftClass {
    #[serde(rename = "STD")]
    Standard,
    #[serde(rename = "JMB")]
    WideBody,
}

/// One aircraft in the roster, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane {
    pub id: String,
    pub class: AircraftClass,
    /// Number of standard maintenance duties on this plane's worksheet.
    pub standard_duties: u32,
    /// Number of specialist maintenance duties on this plane's worksheet.
    pub specialist_duties: u32,
}

impl Plane {
    pub fn new(
        id: impl Into<String>,
        class: AircraftClass,
        standard_duties: u32,
        specialist_duties: u32,
    ) -> Self {
        Self {
            id: id.into(),
            class,
            standard_duties,
            specialist_duties,
        }
    }

    pub fn is_wide_body(&self) -> bool {
        self.class == AircraftClass::WideBody
    }

    /// A plane carrying both duty kinds must be assigned a specialist bay
    /// at some point in the schedule.
    pub fn requires_specialist_bay(&self) -> bool {
        self.standard_duties >= 1 && self.specialist_duties >= 1
    }
}
