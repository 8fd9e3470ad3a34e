use thiserror::Error;

/// Unified result type for the floor-plan core.
pub type Result<T> = std::result::Result<T, FloorPlanError>;

/// Errors surfaced by the floor-plan core. All of them are recoverable: the
/// plan is never left with overlapping rooms or a half-added room.
#[derive(Debug, Error)]
pub enum FloorPlanError {
    #[error("dimensions must be positive integers (got {width}x{height})")]
    InvalidDimension { width: i32, height: i32 },
    #[error("room name cannot be empty")]
    EmptyName,
    #[error("a room named `{0}` already exists")]
    DuplicateName(String),
    #[error("overlap detected for room `{name}`")]
    Overlap { name: String },
    #[error("room `{name}` extends past the coordinate range")]
    OutOfRange { name: String },
    #[error("room `{0}` not found")]
    UnknownRoom(String),
    #[error("no room selected")]
    NoSelection,
    #[error("invalid file format at line {line}: {msg}")]
    Format { line: usize, msg: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FloorPlanError {
    pub(crate) fn format(line: usize, msg: impl Into<String>) -> Self {
        FloorPlanError::Format { line, msg: msg.into() }
    }

    /// Stable tag for hosts that branch on the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            FloorPlanError::InvalidDimension { .. } => "invalid_dimension",
            FloorPlanError::EmptyName => "empty_name",
            FloorPlanError::DuplicateName(_) => "duplicate_name",
            FloorPlanError::Overlap { .. } => "overlap",
            FloorPlanError::OutOfRange { .. } => "out_of_range",
            FloorPlanError::UnknownRoom(_) => "unknown_room",
            FloorPlanError::NoSelection => "no_selection",
            FloorPlanError::Format { .. } => "format",
            FloorPlanError::Io(_) => "io",
        }
    }
}
