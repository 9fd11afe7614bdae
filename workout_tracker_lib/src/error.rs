use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored workouts are corrupt: {0}")]
    Corrupt(String),
}

/// Everything the controller can refuse. The first two are shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackerError {
    #[error("Could not get your position")]
    LocationUnavailable,

    #[error("input has to be a positive number")]
    InvalidInput,

    #[error("no map location selected")]
    NoLocationSelected,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TrackerError {
    /// Whether the error should interrupt the user with an alert.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, TrackerError::LocationUnavailable | TrackerError::InvalidInput)
    }
}
