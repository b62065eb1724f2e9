//! Error types
//!
//! The simulation itself never fails. Errors come from loading data
//! (tuning, level catalogs) and from the driver's fail-stop check.

use std::fmt;

/// Everything that can go wrong outside the per-tick physics
#[derive(Debug)]
pub enum GameError {
    /// Reading a tuning or level file failed
    Io(std::io::Error),
    /// A tuning or level file is not valid JSON for its schema
    Json(serde_json::Error),
    /// Tuning values that would break the simulation
    InvalidTuning(String),
    /// A level catalog with no levels
    EmptyCatalog,
    /// Simulation state became unusable (non-finite ball state)
    Simulation { tick: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "I/O error: {}", e),
            GameError::Json(e) => write!(f, "invalid JSON: {}", e),
            GameError::InvalidTuning(reason) => write!(f, "invalid tuning: {}", reason),
            GameError::EmptyCatalog => write!(f, "level catalog has no levels"),
            GameError::Simulation { tick, reason } => {
                write!(f, "simulation halted at tick {}: {}", tick, reason)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_json_error_keeps_source() {
        let err: GameError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, GameError::Json(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn test_simulation_error_message() {
        let err = GameError::Simulation {
            tick: 42,
            reason: "ball position is NaN".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "simulation halted at tick 42: ball position is NaN"
        );
        assert!(err.source().is_none());
    }
}
