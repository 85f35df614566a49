use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuessError {
    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Card database returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("No monster card found after {attempts} attempts")]
    NoMonsterFound { attempts: u32 },

    #[error("No round in progress, use `start` first")]
    NoActiveRound,

    #[error("The round is over, use `start` to play again")]
    RoundOver,

    #[error("No hints left for this round")]
    NoHintsLeft,

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for GuessError {
    fn from(error: std::io::Error) -> Self {
        GuessError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for GuessError {
    fn from(error: reqwest::Error) -> Self {
        GuessError::Http(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, GuessError>;
