//! Errors surfaced by the `abyss` binary, each class with its own exit code.
//!
//! | code | class |
//! |---|---|
//! | 2  | argument parsing (clap exits before `run`) |
//! | 10 | engine: unknown engine, bad dimensions, invalid recipe |
//! | 11 | I/O: reading a recipe, writing a snapshot or recipe file |
//! | 12 | input: bad `--params` JSON, malformed recipe, mistyped parameter |
//! | 13 | serialization of command output |

use abyss_core::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(EngineError),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Engine(_) => 10,
            Self::Io(_) => 11,
            Self::Input(_) => 12,
            Self::Serialization(_) => 13,
        }
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Io(msg) => CliError::Io(msg),
            mismatch @ EngineError::ParamTypeMismatch { .. } => CliError::Input(mismatch.to_string()),
            other => CliError::Engine(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}
