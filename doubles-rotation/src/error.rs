use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    /// Fewer than four eligible players, nothing can be scheduled.
    #[error("Insufficient players: need at least 4, found {found}")]
    InsufficientPlayers { found: usize },

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SchedResult<T> = Result<T, SchedulerError>;
