use std::fmt;

pub const NETWORK_FAILURE_MESSAGE: &str = "Network request failed. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Network(String),
    NotFound(String),
    Producer(String),
    Config(String),
}

impl AppError {
    /// Falha genérica de rede usada pelo backend simulado
    pub fn network() -> Self {
        AppError::Network(NETWORK_FAILURE_MESSAGE.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Network(msg)
            | AppError::NotFound(msg)
            | AppError::Producer(msg)
            | AppError::Config(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Producer(msg) => write!(f, "{}", msg),
            AppError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Anything a producer raises that isn't already an AppError ends up here
impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Producer(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Producer(msg.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Producer(err.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for AppError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        AppError::Producer(err.to_string())
    }
}
