use std::fmt;

#[derive(Debug)]
pub enum SimError {
    InvalidParameter(String),
    InvalidGroupSize { group: String, expected: usize, found: usize },
    EmptyInput(String),
    DeserializationError(String),
    IoError(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            SimError::InvalidGroupSize { group, expected, found } => {
                write!(f, "Invalid group size for group {}: expected {}, found {}", group, expected, found)
            }
            SimError::EmptyInput(msg) => write!(f, "Empty input: {}", msg),
            SimError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
            SimError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::DeserializationError(err.to_string())
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
