use std::backtrace::Backtrace;

use crate::{model::position::Position, solver::engine::VariableId};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A defect in the problem instance or constraint set, detected before any
/// search begins.
///
/// Zero solutions is never reported through this type: an exhausted search
/// is an ordinary outcome, and the two are distinguishable at the API
/// boundary by construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("slot count must be positive")]
    ZeroSlots,

    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("bay {bay} lies outside the {rows}x{cols} grid")]
    BayOutsideGrid {
        bay: Position,
        rows: usize,
        cols: usize,
    },

    #[error("bay {bay} is listed more than once")]
    DuplicateBay { bay: Position },

    #[error("duplicate plane id {id:?}")]
    DuplicatePlaneId { id: String },

    #[error("plane {id:?} requires a specialist bay but the instance has none")]
    NoSpecialistBays { id: String },

    #[error("variable ?{variable} has an empty domain")]
    EmptyDomain { variable: VariableId },

    #[error("constraint {name} has an empty scope")]
    EmptyScope { name: String },

    #[error("constraint {name} references unknown variable ?{variable}")]
    UnknownVariable { name: String, variable: VariableId },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Config: {inner}\n{backtrace}")]
    Config {
        inner: Box<ConfigError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<ConfigError> for Error {
    fn from(inner: ConfigError) -> Self {
        Error::Config {
            inner: Box::new(inner),
            backtrace: Box::new(Backtrace::capture()),
        }
    }
}

impl Error {
    /// The underlying configuration defect, for callers that want to match
    /// on the variant rather than display the message.
    pub fn config(&self) -> &ConfigError {
        match self {
            Error::Config { inner, .. } => inner,
        }
    }
}
